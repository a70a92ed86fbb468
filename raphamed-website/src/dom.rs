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

//! Small DOM helpers shared by the components.

use raphamed_interactions::scroll::{anchor_scroll_target, is_scrollable_anchor};
use raphamed_interactions::{Section, SectionBox};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_hidden() -> bool {
    document().is_some_and(|d| d.hidden())
}

/// Viewport-relative box of a section's anchor element.
pub fn section_box(section: Section) -> Option<SectionBox> {
    let rect = document()?
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(SectionBox {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Smooth-scrolls the window to an absolute document offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls to the element named by an in-page `href`, leaving room for the
/// fixed header. Returns `false` when the browser should handle the link.
pub fn scroll_to_anchor(href: &str) -> bool {
    if !is_scrollable_anchor(href) {
        return false;
    }
    let Some(target) = document().and_then(|d| d.get_element_by_id(&href[1..])) else {
        return false;
    };
    let top = target.get_bounding_client_rect().top();
    smooth_scroll_to(anchor_scroll_target(top, scroll_y()));
    true
}

/// The closest ancestor of the event target (itself included) matching
/// `selector`.
pub fn closest(ev: &Event, selector: &str) -> Option<Element> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

pub fn focus_element(id: &str) {
    if let Some(el) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Toggles a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

pub fn document_lang() -> Option<String> {
    document()?.document_element()?.get_attribute("lang")
}

pub fn set_document_lang(code: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", code);
    }
}
