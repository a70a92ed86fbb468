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

//! Reference-counted page scroll lock.
//!
//! Overlays (the mobile flyout today, modals later) each hold a
//! [`ScrollLockGuard`]. Page scrolling is suspended while at least one guard
//! is alive and restored when the last one drops, whichever path drops it.

use std::fmt;
use std::sync::{Arc, Mutex};

type Apply = dyn Fn(bool) + Send + Sync;

struct Inner {
    holders: Mutex<usize>,
    apply: Box<Apply>,
}

/// Shared handle to the page scroll lock. Cloning shares the same counter.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Arc<Inner>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

impl ScrollLock {
    /// `apply(true)` runs when the first holder acquires; `apply(false)` when
    /// the last one releases.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                holders: Mutex::new(0),
                apply: Box::new(apply),
            }),
        }
    }

    /// A lock whose state is only observable through [`ScrollLock::is_locked`].
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let first = {
            let mut holders = self.lock_holders();
            *holders += 1;
            *holders == 1
        };
        if first {
            log::debug!("page scroll locked");
            (self.inner.apply)(true);
        }
        ScrollLockGuard {
            lock: Some(self.clone()),
        }
    }

    pub fn holders(&self) -> usize {
        *self.lock_holders()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    fn release(&self) {
        let last = {
            let mut holders = self.lock_holders();
            *holders = holders.saturating_sub(1);
            *holders == 0
        };
        if last {
            log::debug!("page scroll restored");
            (self.inner.apply)(false);
        }
    }

    fn lock_holders(&self) -> std::sync::MutexGuard<'_, usize> {
        // A poisoned counter is still a valid count.
        self.inner
            .holders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Keeps the page scroll suspended until dropped.
pub struct ScrollLockGuard {
    lock: Option<ScrollLock>,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

impl ScrollLockGuard {
    /// Releases now instead of at drop.
    pub fn release(mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
    }
}
