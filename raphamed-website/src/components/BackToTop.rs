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

use crate::dom::{scroll_y, smooth_scroll_to};
use crate::listeners::ListenerScope;
use leptos::prelude::*;
use raphamed_interactions::scroll::back_to_top_visible;

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(back_to_top_visible(scroll_y()));
    let listeners = ListenerScope::new();
    listeners.on_window("scroll", move |_| {
        let show = back_to_top_visible(scroll_y());
        if visible.get_untracked() != show {
            visible.set(show);
        }
    });

    view! {
        <button
            type="button"
            class="back-to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
