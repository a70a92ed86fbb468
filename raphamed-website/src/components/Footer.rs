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

use leptos::prelude::*;
use raphamed_interactions::nav::{ABOUT_ITEMS, PRODUCT_ITEMS};
use raphamed_interactions::platform::current_year;
use raphamed_interactions::Section;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href=Section::HOME.href() class="logo">"RaphaMed"</a>
                    <p>"Certified medical supplies for clinics, pharmacies and care homes."</p>
                </div>

                <nav class="footer-links" aria-label="Products">
                    <h4>"Products"</h4>
                    <ul>
                        {PRODUCT_ITEMS
                            .iter()
                            .map(|item| view! { <li><a href=item.href>{item.label}</a></li> })
                            .collect_view()}
                    </ul>
                </nav>

                <nav class="footer-links" aria-label="Company">
                    <h4>"Company"</h4>
                    <ul>
                        {ABOUT_ITEMS
                            .iter()
                            .map(|item| view! { <li><a href=item.href>{item.label}</a></li> })
                            .collect_view()}
                        <li><a href=Section::CONTACT.href()>"Contact"</a></li>
                    </ul>
                </nav>
            </div>

            <div class="footer-bottom">
                <p>
                    "© " <span id="copyright-year">{year}</span>
                    " RaphaMed Medical Supplies. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
