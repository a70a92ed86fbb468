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

use crate::components::{BackToTop, Footer, Header};
use crate::dom::{closest, scroll_to_anchor};
use crate::listeners::ListenerScope;
use leptos::prelude::*;

/// Page chrome: header, footer, back-to-top and animated in-page anchors.
#[component]
pub fn Page(children: Children) -> impl IntoView {
    let listeners = ListenerScope::new();
    listeners.on_document_active("click", |ev| {
        let Some(link) = closest(ev, "a[href^='#']") else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if scroll_to_anchor(&href) {
            ev.prevent_default();
        }
    });

    view! {
        <Header/>
        <main id="main-content">{children()}</main>
        <Footer/>
        <BackToTop/>
    }
}
