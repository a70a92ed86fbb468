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

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Shrinks the viewport from the bottom so elements reveal slightly later.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const REVEALED_CLASS: &str = "revealed";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let host: NodeRef<html::Div> = NodeRef::new();
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(el) = host.get() else {
            return;
        };
        match observe_once(&el) {
            Ok(pair) => observer.set_value(Some(pair)),
            Err(e) => {
                log::info!("IntersectionObserver unavailable, revealing immediately: {e:?}");
                let _ = el.class_list().add_1(REVEALED_CLASS);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });

    view! {
        <div node_ref=host class=format!("reveal {class}")>
            {children()}
        </div>
    }
}

fn observe_once(
    el: &web_sys::HtmlDivElement,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);
    Ok((observer, callback))
}
