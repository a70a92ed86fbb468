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

use crate::dom::{document_lang, set_body_class};
use crate::pages::Home::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, *};
use raphamed_interactions::{Locale, ScrollLock};

/// Body class applied while something holds the page scroll lock.
pub const SCROLL_LOCK_CLASS: &str = "no-scroll";

/// Shared lock over page scrolling. The first holder adds
/// [`SCROLL_LOCK_CLASS`] to `<body>`, the last one removes it.
pub fn body_scroll_lock() -> ScrollLock {
    ScrollLock::new(|locked| set_body_class(SCROLL_LOCK_CLASS, locked))
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(body_scroll_lock());
    let locale = document_lang()
        .and_then(|lang| Locale::from_lang_tag(&lang))
        .unwrap_or_default();
    provide_context(RwSignal::new(locale));

    let formatter = |text| format!("{text} - RaphaMed Medical Supplies");

    view! {
        <Title formatter/>
        <Meta
            name="description"
            content="RaphaMed supplies clinics, pharmacies and care homes with certified gloves, syringes, wound care and masks."
        />
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="RaphaMed"/>
        <Meta property="og:title" content="RaphaMed - Professional Health & Wellness Solutions"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Home/>
            </Routes>
        </Router>
    }
}
