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

use crate::components::{use_locale, LanguageSwitch};
use crate::deadline::drive;
use crate::dom::{closest, scroll_y, section_box, viewport_width};
use crate::listeners::ListenerScope;
use leptos::prelude::*;
use raphamed_interactions::nav::{is_link_active, NavEntry, NAV_ENTRIES};
use raphamed_interactions::platform::now_ms;
use raphamed_interactions::scroll::HeaderReveal;
use raphamed_interactions::{NavMenu, ScrollLock, ScrollState, ScrollTracker};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn Header() -> impl IntoView {
    let lock = use_context::<ScrollLock>().unwrap_or_else(ScrollLock::detached);
    let menu = RwSignal::new(NavMenu::new(lock));
    let locale = use_locale();
    let tracker = RwSignal::new(ScrollTracker::default());
    let reveal = RwSignal::new(HeaderReveal::default());
    let scroll = Memo::new(move |_| tracker.with(ScrollTracker::state));
    drive(menu);

    let recompute = move || {
        let y = scroll_y();
        tracker.try_update(|t| {
            t.on_frame(y, section_box);
        });
        reveal.try_update(|r| r.update(y));
    };
    request_animation_frame(recompute);

    let listeners = ListenerScope::new();
    listeners.on_window("scroll", move |_| {
        if tracker.try_update_untracked(ScrollTracker::on_scroll) == Some(true) {
            request_animation_frame(recompute);
        }
    });
    listeners.on_window("resize", move |_| {
        menu.try_update(|m| m.viewport_resized(viewport_width()));
    });
    listeners.on_document("keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<KeyboardEvent>() {
            menu.try_update(|m| m.key_pressed(&ev.key()));
        }
    });
    listeners.on_document("click", move |ev| {
        if closest(ev, ".nav-dropdown, .menu-toggle").is_some() {
            return;
        }
        let inside_flyout = closest(ev, ".mobile-nav").is_some();
        menu.try_update(|m| m.outside_click(inside_flyout));
    });

    let header_class = move || {
        let ScrollState {
            scrolled_past_threshold,
            ..
        } = scroll.get();
        let reveal = reveal.get();
        let mut class = String::from("site-header");
        if scrolled_past_threshold || reveal.scrolled {
            class.push_str(" scrolled");
        }
        if reveal.hidden {
            class.push_str(" header-hidden");
        }
        class
    };
    let flyout_open = move || menu.with(NavMenu::is_flyout_open);

    view! {
        <header class=header_class>
            <nav class="nav container" aria-label="Main">
                <a href="#home" class="logo">
                    <img src="/images/raphamed_logo.svg" alt="RaphaMed" class="logo-img"/>
                </a>

                <ul class="nav-links">
                    {NAV_ENTRIES
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <DesktopEntry index=index entry=*entry menu=menu scroll=scroll/>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="nav-actions">
                    <LanguageSwitch/>
                    <a href="#contact" class="btn btn-primary nav-cta">
                        {move || locale.get().strings().quote}
                    </a>
                    <button
                        type="button"
                        class="menu-toggle"
                        class:open=flyout_open
                        aria-label="Toggle navigation menu"
                        aria-controls="mobile-nav"
                        aria-expanded=move || flyout_open().to_string()
                        on:click=move |_| menu.update(NavMenu::toggle_flyout)
                    >
                        <span class="hamburger"></span>
                    </button>
                </div>
            </nav>

            <div id="mobile-nav" class="mobile-nav" class:open=flyout_open>
                <ul>
                    {NAV_ENTRIES
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <MobileEntry index=index entry=*entry menu=menu scroll=scroll/>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </header>
    }
}

#[component]
fn DesktopEntry(
    index: usize,
    entry: NavEntry,
    menu: RwSignal<NavMenu>,
    scroll: Memo<ScrollState>,
) -> impl IntoView {
    let active = move || is_link_active(entry.section, scroll.get().active_section);
    if entry.items.is_empty() {
        return view! {
            <li>
                <a
                    href=entry.section.href()
                    class="nav-link"
                    class:active=active
                    on:click=move |_| menu.update(NavMenu::link_activated)
                >
                    {entry.label}
                </a>
            </li>
        }
        .into_any();
    }

    let open = move || menu.with(|m| m.dropdown_open(index));
    view! {
        <li
            class="nav-dropdown"
            class:open=open
            on:mouseenter=move |_| menu.update(|m| m.dropdown_pointer_enter(index))
            on:mouseleave=move |_| menu.update(|m| m.dropdown_pointer_leave(index, now_ms()))
        >
            <button
                type="button"
                class="nav-link dropdown-trigger"
                class:active=active
                aria-haspopup="true"
                aria-expanded=move || open().to_string()
                on:click=move |_| menu.update(|m| m.dropdown_clicked(index))
            >
                {entry.label}
                <span class="chevron" aria-hidden="true"></span>
            </button>
            <ul class="dropdown-menu" class:open=open>
                {entry
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <a
                                    href=item.href
                                    class="dropdown-item"
                                    on:click=move |_| menu.update(NavMenu::link_activated)
                                >
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
    .into_any()
}

#[component]
fn MobileEntry(
    index: usize,
    entry: NavEntry,
    menu: RwSignal<NavMenu>,
    scroll: Memo<ScrollState>,
) -> impl IntoView {
    let active = move || is_link_active(entry.section, scroll.get().active_section);
    if entry.items.is_empty() {
        return view! {
            <li>
                <a
                    href=entry.section.href()
                    class="mobile-link"
                    class:active=active
                    on:click=move |_| menu.update(NavMenu::link_activated)
                >
                    {entry.label}
                </a>
            </li>
        }
        .into_any();
    }

    let expanded = move || menu.with(|m| m.mobile_section_open(index));
    view! {
        <li class="mobile-group" class:open=expanded>
            <button
                type="button"
                class="mobile-link accordion-trigger"
                class:active=active
                aria-expanded=move || expanded().to_string()
                on:click=move |_| menu.update(|m| m.toggle_mobile_section(index))
            >
                {entry.label}
            </button>
            <ul class="mobile-submenu" class:open=expanded>
                {entry
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <a
                                    href=item.href
                                    class="mobile-sublink"
                                    on:click=move |_| menu.update(NavMenu::link_activated)
                                >
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
    .into_any()
}
