/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::use_locale;
use leptos::prelude::*;
use raphamed_interactions::Section;

#[component]
pub fn HeroSection() -> impl IntoView {
    let locale = use_locale();
    let strings = move || locale.get().strings();

    view! {
        <section id=Section::HOME.id() class="hero">
            <div class="container hero-content">
                <span class="hero-badge">"ISO 13485 certified distribution"</span>
                <h1 class="hero-title" data-i18n="title">{move || strings().title}</h1>
                <p class="hero-subtitle">{move || strings().subtitle}</p>
                <div class="hero-actions">
                    <a href=Section::PRODUCTS.href() class="btn btn-primary" data-i18n="cta">
                        {move || strings().cta}
                    </a>
                    <a href=Section::CONTACT.href() class="btn btn-secondary">
                        {move || strings().secondary_cta}
                    </a>
                </div>
            </div>
        </section>
    }
}
