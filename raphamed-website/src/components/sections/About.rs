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

use crate::components::Reveal;
use leptos::prelude::*;
use raphamed_interactions::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::ABOUT.id() class="about">
            <div class="container about-grid">
                <Reveal class="about-text">
                    <h2 id="company">"About RaphaMed"</h2>
                    <p>
                        "RaphaMed distributes dependable, ethical and high-quality medical supplies to clinics, "
                        "pharmacies and care homes. Every product we carry is sourced from audited manufacturers."
                    </p>
                </Reveal>
                <Reveal class="about-certifications">
                    <h3 id="certifications">"Certifications"</h3>
                    <ul>
                        <li>"ISO 13485 quality management"</li>
                        <li>"ASTM F2100 Level 3 masks"</li>
                        <li>"ASTM D6319 nitrile examination gloves"</li>
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}
