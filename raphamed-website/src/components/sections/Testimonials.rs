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

use crate::components::Carousel;
use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Orders arrive on time and every box carries its lot certificate. Our audits got easier.",
        author: "Sarah M.",
        role: "Clinic Manager",
    },
    Testimonial {
        quote: "Consistent glove quality at a price that works for a small pharmacy.",
        author: "David K.",
        role: "Pharmacist",
    },
    Testimonial {
        quote: "Responsive team. They helped us switch mask suppliers within a week.",
        author: "Amira L.",
        role: "Care Home Director",
    },
];

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let slides = TESTIMONIALS
        .iter()
        .map(|t| {
            view! {
                <blockquote class="testimonial">
                    <p class="testimonial-quote">{t.quote}</p>
                    <footer>
                        <cite class="testimonial-author">{t.author}</cite>
                        <span class="testimonial-role">{t.role}</span>
                    </footer>
                </blockquote>
            }
            .into_any()
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2>"What Our Clients Say"</h2>
                </div>
                <Carousel slides=slides label="Client testimonials" transition="fade" loop_slides=true/>
            </div>
        </section>
    }
}
