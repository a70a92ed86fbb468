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

//! Interaction state machines behind the RaphaMed website.
//!
//! Nothing in this crate touches the DOM. Every machine is driven by plain
//! inputs (scroll offsets, bounding boxes, key names, pointer coordinates) and
//! explicit millisecond timestamps, so the browser layer only has to translate
//! events and arm a timer for [`clock::Scheduled::next_deadline`].

pub mod carousel;
pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod map;
pub mod nav;
pub mod platform;
pub mod products;
pub mod scroll;
pub mod scroll_lock;
pub mod swipe;

pub use carousel::{Carousel, CarouselConfig, Playback, Transition};
pub use clock::Scheduled;
pub use config::{truthy, DataAttributes};
pub use error::{MapError, SubmitError};
pub use form::{ContactForm, FieldKind, FieldSpec, FormPayload, FormPhase, FormSubmitter};
pub use i18n::Locale;
pub use map::MapConfig;
pub use nav::NavMenu;
pub use products::{Category, Product, ProductFilter, CATALOG};
pub use scroll::{ScrollState, ScrollTracker, Section, SectionBox};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
