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

use crate::components::sections::{
    About::AboutSection, Contact::ContactSection, Hero::HeroSection, Products::ProductsSection,
    Testimonials::TestimonialsSection,
};
use crate::components::Page;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <HeroSection/>
            <ProductsSection/>
            <TestimonialsSection/>
            <AboutSection/>
            <ContactSection/>
        </Page>
    }
}
