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

use crate::dom::set_document_lang;
use leptos::prelude::*;
use raphamed_interactions::Locale;

/// The locale shared through context, falling back to English outside an
/// `App`.
pub fn use_locale() -> RwSignal<Locale> {
    use_context::<RwSignal<Locale>>().unwrap_or_else(|| RwSignal::new(Locale::default()))
}

#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let locale = use_locale();
    Effect::new(move |_| set_document_lang(locale.get().code()));

    view! {
        <div class="lang-switch" role="group" aria-label="Language">
            {Locale::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class="lang-btn"
                            class:active=move || locale.get() == option
                            aria-pressed=move || (locale.get() == option).to_string()
                            on:click=move |_| {
                                log::debug!("language switched to {option}");
                                locale.set(option);
                            }
                        >
                            {option.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
