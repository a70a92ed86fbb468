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

use crate::deadline::drive;
use crate::dom::focus_element;
use crate::submitter::{configured, SignalForm};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use raphamed_interactions::form::{
    submit_form, FieldKind, FieldSpec, FieldState, SubmitBlocked, SubmitOutcome,
};
use raphamed_interactions::platform::now_ms;
use raphamed_interactions::ContactForm as FormState;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    drive(form);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let submitter = configured();
            match submit_form(&SignalForm(form), submitter.as_ref(), now_ms).await {
                Some(SubmitOutcome::Blocked(SubmitBlocked::Invalid { first_invalid })) => {
                    focus_element(first_invalid);
                }
                Some(SubmitOutcome::Blocked(SubmitBlocked::InFlight)) => {
                    log::debug!("ignoring submit while a request is in flight");
                }
                Some(SubmitOutcome::Sent) | Some(SubmitOutcome::Failed(_)) => {}
                None => log::warn!("contact form unmounted during submission"),
            }
        });
    };

    let fields = form.with_untracked(|f| {
        f.fields()
            .iter()
            .map(|state| state.spec)
            .collect::<Vec<_>>()
    });

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-grid">
                {fields
                    .into_iter()
                    .map(|spec| view! { <FormField spec=spec form=form/> })
                    .collect_view()}
            </div>

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled=move || !form.with(FormState::submit_enabled)
                aria-busy=move || form.with(FormState::is_submitting).to_string()
            >
                {move || form.with(|f| f.submit_label().to_string())}
            </button>

            {move || {
                form.with(|f| f.banner().cloned())
                    .map(|banner| {
                        view! {
                            <div
                                class=format!("form-message {}", banner.kind.class_name())
                                role="status"
                                aria-live="polite"
                            >
                                <span>{banner.message}</span>
                                <button
                                    type="button"
                                    class="form-message-close"
                                    aria-label="Dismiss message"
                                    on:click=move |_| form.update(FormState::dismiss_banner)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FormField(spec: FieldSpec, form: RwSignal<FormState>) -> impl IntoView {
    let name = spec.name;
    let invalid = move || form.with(|f| f.field(name).is_some_and(FieldState::is_invalid));
    let error = move || form.with(|f| f.field(name).and_then(|s| s.error().map(str::to_string)));
    let value = move || form.with(|f| f.value(name).to_string());
    let on_input = move |ev: Event| form.update(|f| f.input(name, event_target_value(&ev)));
    let on_blur = move |_| {
        form.update(|f| {
            f.blur(name);
        })
    };
    let error_id = format!("{name}-error");
    let wide = spec.kind == FieldKind::MultiLine;

    let control = if wide {
        view! {
            <textarea
                id=name
                name=name
                rows="5"
                class:invalid=invalid
                required=spec.required
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type=spec.kind.input_type()
                class:invalid=invalid
                required=spec.required
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group" class:full-width=wide class:error=invalid>
            <label for=name>
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {control}
            <span id=error_id class="error-message" role="alert">{error}</span>
        </div>
    }
}
