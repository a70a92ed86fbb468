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

use crate::components::{ContactForm, Reveal};
use crate::map::mount_when_ready;
use leptos::prelude::*;
use raphamed_interactions::map::MAP_ELEMENT_ID;
use raphamed_interactions::Section;

pub const OFFICE_ADDRESS: &str = "123 Business St, City, State 12345";

#[component]
pub fn ContactSection() -> impl IntoView {
    Effect::new(move |_| mount_when_ready());

    view! {
        <section id=Section::CONTACT.id() class="contact">
            <div class="container contact-grid">
                <Reveal class="contact-info">
                    <h2>"Get in Touch"</h2>
                    <p>"Tell us what your practice needs and we will reply within one business day."</p>
                    <address>{OFFICE_ADDRESS}</address>
                    <div
                        id=MAP_ELEMENT_ID
                        class="map-container"
                        data-lat="40.7128"
                        data-lng="-74.0060"
                        data-zoom="15"
                        data-title="RaphaMed Medical Supplies"
                        data-address=OFFICE_ADDRESS
                    ></div>
                </Reveal>
                <ContactForm/>
            </div>
        </section>
    }
}
