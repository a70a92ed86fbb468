// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared mount/cleanup and DOM event helpers for the component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> HtmlElement {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into().unwrap()
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &HtmlElement) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let effects and microtasks run.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

pub async fn sleep_ms(ms: u32) {
    TimeoutFuture::new(ms).await;
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

pub fn click(root: &Element, selector: &str) {
    query(root, selector)
        .unwrap_or_else(|| panic!("nothing matches `{selector}`"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

pub fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    query(root, selector).is_some_and(|el| el.class_list().contains(class))
}

/// Fires a synthetic event. `input` bubbles so delegated handlers see it.
pub fn fire(el: &Element, event: &str, bubbles: bool) {
    let init = EventInit::new();
    init.set_bubbles(bubbles);
    let ev = Event::new_with_event_init_dict(event, &init).unwrap();
    el.dispatch_event(&ev).unwrap();
}

/// Types into an `<input>` or `<textarea>` the way a user would: set the
/// value, then fire `input`.
pub fn type_into(root: &Element, selector: &str, value: &str) {
    let field = query(root, selector).unwrap_or_else(|| panic!("nothing matches `{selector}`"));
    js_sys::Reflect::set(&field, &JsValue::from_str("value"), &JsValue::from_str(value)).unwrap();
    fire(&field, "input", true);
}

pub fn blur(root: &Element, selector: &str) {
    fire(&query(root, selector).unwrap(), "blur", false);
}

pub fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    gloo_utils::document().dispatch_event(&ev).unwrap();
}
