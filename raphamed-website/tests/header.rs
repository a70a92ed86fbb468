// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Header navigation: flyout, body scroll lock and dropdown panels.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use leptos::mount::mount_to;
use leptos::prelude::*;
use support::{cleanup, click, create_mount_point, has_class, press_key, query, settle};
use wasm_bindgen_test::*;

use raphamed_interactions::Locale;
use raphamed_website::app::{body_scroll_lock, SCROLL_LOCK_CLASS};
use raphamed_website::components::Header;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[component]
fn HeaderTestWrapper() -> impl IntoView {
    provide_context(body_scroll_lock());
    provide_context(RwSignal::new(Locale::default()));
    view! { <Header/> }
}

fn body_locked() -> bool {
    gloo_utils::document()
        .body()
        .unwrap()
        .class_list()
        .contains(SCROLL_LOCK_CLASS)
}

#[wasm_bindgen_test]
async fn flyout_locks_body_until_escape() {
    let mount = create_mount_point();
    let handle = mount_to(mount.clone(), || view! { <HeaderTestWrapper/> });
    settle().await;

    click(&mount, ".menu-toggle");
    settle().await;
    assert!(has_class(&mount, ".mobile-nav", "open"));
    assert!(body_locked());

    press_key("Escape");
    settle().await;
    assert!(!has_class(&mount, ".mobile-nav", "open"));
    assert!(!body_locked());

    drop(handle);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unmounting_with_open_flyout_releases_lock() {
    let mount = create_mount_point();
    let handle = mount_to(mount.clone(), || view! { <HeaderTestWrapper/> });
    settle().await;

    click(&mount, ".menu-toggle");
    settle().await;
    assert!(body_locked());

    drop(handle);
    settle().await;
    assert!(!body_locked());
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn dropdown_opens_on_click_and_closes_outside() {
    let mount = create_mount_point();
    let handle = mount_to(mount.clone(), || view! { <HeaderTestWrapper/> });
    settle().await;

    click(&mount, ".nav-dropdown .dropdown-trigger");
    settle().await;
    assert!(has_class(&mount, ".nav-dropdown", "open"));

    click(&mount, ".logo");
    settle().await;
    assert!(!has_class(&mount, ".nav-dropdown", "open"));

    drop(handle);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn language_switch_relabels_quote_link() {
    let mount = create_mount_point();
    let handle = mount_to(mount.clone(), || view! { <HeaderTestWrapper/> });
    settle().await;

    let cta = || query(&mount, ".nav-cta").and_then(|el| el.text_content());
    assert_eq!(cta().as_deref(), Some(Locale::En.strings().quote));

    click(&mount, ".lang-btn:nth-child(2)");
    settle().await;
    assert_eq!(cta().as_deref(), Some(Locale::Fr.strings().quote));
    let lang = gloo_utils::document()
        .document_element()
        .unwrap()
        .get_attribute("lang");
    assert_eq!(lang.as_deref(), Some("fr"));

    drop(handle);
    cleanup(&mount);
    gloo_utils::document()
        .document_element()
        .unwrap()
        .set_attribute("lang", "en")
        .unwrap();
}
