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

//! Global event listeners owned by a component.

use gloo::events::{EventListener, EventListenerOptions};
use leptos::prelude::*;
use web_sys::{Event, EventTarget};

/// Collects `window`/`document` listeners for one component. Everything is
/// removed when the owning reactive scope is cleaned up.
#[derive(Clone, Copy)]
pub struct ListenerScope {
    listeners: StoredValue<Vec<EventListener>, LocalStorage>,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self {
            listeners: StoredValue::new_local(Vec::new()),
        }
    }

    /// Passive listener; the handler cannot cancel the default action.
    pub fn on<F>(&self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.push(EventListener::new(target, event, handler));
    }

    /// Listener that may call `prevent_default`.
    pub fn on_active<F>(&self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.push(EventListener::new_with_options(
            target,
            event,
            EventListenerOptions::enable_prevent_default(),
            handler,
        ));
    }

    pub fn on_window<F>(&self, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        if let Some(window) = web_sys::window() {
            self.on(&window, event, handler);
        }
    }

    pub fn on_document<F>(&self, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            self.on(&document, event, handler);
        }
    }

    pub fn on_document_active<F>(&self, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            self.on_active(&document, event, handler);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.try_with_value(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every listener now instead of waiting for cleanup.
    pub fn clear(&self) {
        self.listeners.update_value(Vec::clear);
    }

    fn push(&self, listener: EventListener) {
        if self
            .listeners
            .try_update_value(|listeners| listeners.push(listener))
            .is_none()
        {
            log::warn!("listener registered after its scope was disposed");
        }
    }
}

impl Default for ListenerScope {
    fn default() -> Self {
        Self::new()
    }
}
