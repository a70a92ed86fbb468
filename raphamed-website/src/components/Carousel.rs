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

use crate::constants::CAROUSEL_AUTOPLAY_MS;
use crate::deadline::drive;
use crate::dom::document_hidden;
use crate::listeners::ListenerScope;
use leptos::ev::TouchEvent;
use leptos::html;
use leptos::prelude::*;
use raphamed_interactions::carousel::{CarouselKey, Transition};
use raphamed_interactions::platform::now_ms;
use raphamed_interactions::swipe::TouchPoint;
use raphamed_interactions::{Carousel as SlideShow, CarouselConfig};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Rotating slides with arrows, dots, hover pause, arrow keys and swipes.
///
/// Settings are written to the host as `data-*` attributes and read back
/// once it mounts, so markup authored elsewhere configures it the same way.
#[component]
pub fn Carousel(
    slides: Vec<AnyView>,
    #[prop(optional)] label: &'static str,
    #[prop(optional)] autoplay: Option<bool>,
    #[prop(optional)] delay_ms: Option<u32>,
    #[prop(optional)] transition: Option<&'static str>,
    #[prop(optional)] loop_slides: Option<bool>,
    #[prop(optional)] pause_on_hover: Option<bool>,
) -> impl IntoView {
    let len = slides.len();
    let host: NodeRef<html::Div> = NodeRef::new();
    let carousel = RwSignal::new(None::<SlideShow>);
    drive(carousel);

    Effect::new(move |_| {
        let Some(el) = host.get() else {
            return;
        };
        if carousel.with_untracked(Option::is_some) {
            return;
        }
        let config = CarouselConfig::from_attributes(&|key: &str| {
            el.get_attribute(&format!("data-{key}"))
                .or_else(|| (key == "delay").then(|| CAROUSEL_AUTOPLAY_MS.to_string()))
        });
        carousel.set(SlideShow::mount(len, config, now_ms()));
    });

    on_cleanup(move || {
        carousel.try_update_untracked(|c| {
            if let Some(c) = c {
                c.destroy();
            }
        });
    });

    let listeners = ListenerScope::new();
    listeners.on_document("visibilitychange", move |_| {
        let hidden = document_hidden();
        carousel.try_update(|c| {
            if let Some(c) = c {
                c.visibility_changed(hidden, now_ms());
            }
        });
    });
    listeners.on_document_active("keydown", move |ev| {
        let Some(key) = ev
            .dyn_ref::<KeyboardEvent>()
            .and_then(|k| CarouselKey::from_key(&k.key()))
        else {
            return;
        };
        let consumed = carousel
            .try_update(|c| c.as_mut().is_some_and(|c| c.key_pressed(key, now_ms())))
            .unwrap_or(false);
        if consumed {
            ev.prevent_default();
        }
    });

    let apply = move |f: fn(&mut SlideShow, f64)| {
        carousel.update(|c| {
            if let Some(c) = c {
                f(c, now_ms());
            }
        })
    };
    let read = move |f: fn(&SlideShow) -> bool| carousel.with(|c| c.as_ref().is_some_and(f));
    let is_active = move |index: usize| {
        carousel.with(|c| match c {
            Some(c) => c.is_active(index),
            None => index == 0,
        })
    };
    let has_controls = move || read(SlideShow::has_controls);
    let host_class = move || {
        carousel.with(|c| match c {
            Some(c) => {
                let mut class = format!("carousel {}", c.config().transition.class_name());
                if matches!(c.transition(), Transition::Settling { .. }) {
                    class.push_str(" is-transitioning");
                }
                if c.is_playing() {
                    class.push_str(" is-playing");
                }
                class
            }
            None => "carousel".to_string(),
        })
    };

    let touch_point = |ev: &TouchEvent, changed: bool| {
        let list = if changed { ev.changed_touches() } else { ev.touches() };
        list.get(0).map(|t| TouchPoint {
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
    };

    view! {
        <div
            node_ref=host
            class=host_class
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            tabindex="0"
            data-autoplay=autoplay.map(|v| v.to_string())
            data-delay=delay_ms.map(|v| v.to_string())
            data-transition=transition
            data-loop=loop_slides.map(|v| v.to_string())
            data-pause-on-hover=pause_on_hover.map(|v| v.to_string())
            on:mouseenter=move |_| carousel.update(|c| {
                if let Some(c) = c {
                    c.pointer_enter();
                }
            })
            on:mouseleave=move |_| apply(SlideShow::pointer_leave)
            on:focusin=move |_| carousel.update(|c| {
                if let Some(c) = c {
                    c.focus_in();
                }
            })
            on:focusout=move |_| apply(SlideShow::focus_out)
            on:touchstart=move |ev: TouchEvent| {
                if let Some(at) = touch_point(&ev, false) {
                    carousel.update(|c| {
                        if let Some(c) = c {
                            c.touch_start(at, now_ms());
                        }
                    });
                }
            }
            on:touchend=move |ev: TouchEvent| {
                if let Some(at) = touch_point(&ev, true) {
                    carousel.update(|c| {
                        if let Some(c) = c {
                            c.touch_end(at, now_ms());
                        }
                    });
                }
            }
            on:touchcancel=move |_| apply(SlideShow::touch_cancel)
        >
            <div class="carousel-track">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        view! {
                            <div
                                class="carousel-slide"
                                class:active=move || is_active(index)
                                role="group"
                                aria-roledescription="slide"
                                aria-hidden=move || (!is_active(index)).to_string()
                            >
                                {slide}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=has_controls>
                <button
                    type="button"
                    class="carousel-btn carousel-prev"
                    aria-label="Previous slide"
                    on:click=move |_| apply(SlideShow::previous_clicked)
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="carousel-btn carousel-next"
                    aria-label="Next slide"
                    on:click=move |_| apply(SlideShow::next_clicked)
                >
                    "›"
                </button>
                <div class="carousel-dots" role="tablist">
                    {(0..len)
                        .map(|index| {
                            view! {
                                <button
                                    type="button"
                                    class="carousel-dot"
                                    class:active=move || is_active(index)
                                    role="tab"
                                    aria-label=SlideShow::dot_label(index)
                                    aria-selected=move || is_active(index).to_string()
                                    on:click=move |_| carousel.update(|c| {
                                        if let Some(c) = c {
                                            c.dot_clicked(index, now_ms());
                                        }
                                    })
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
