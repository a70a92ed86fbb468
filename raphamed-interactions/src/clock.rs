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

//! Deadline-driven time.
//!
//! Timers in the browser (`setTimeout`, `setInterval`) are replaced by
//! deadlines stored inside each state machine. The host asks for the nearest
//! deadline, sleeps until then and calls [`Scheduled::tick`]. Tests skip the
//! sleeping and call `tick` with whatever virtual time they need.

/// A state machine with pending timed work.
pub trait Scheduled {
    /// Earliest timestamp (ms) at which [`Scheduled::tick`] has something to do.
    fn next_deadline(&self) -> Option<f64>;

    /// Run every piece of timed work that is due at `now`.
    fn tick(&mut self, now: f64);
}

/// A machine that may not exist yet, such as a widget waiting for its host
/// element to mount.
impl<S: Scheduled> Scheduled for Option<S> {
    fn next_deadline(&self) -> Option<f64> {
        self.as_ref().and_then(Scheduled::next_deadline)
    }

    fn tick(&mut self, now: f64) {
        if let Some(machine) = self {
            machine.tick(now);
        }
    }
}

/// Returns the earlier of two optional deadlines.
pub fn earliest(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Advances `machine` from `from` to `to` in virtual time, firing every
/// deadline that falls inside the window in order.
pub fn run_until<S: Scheduled + ?Sized>(machine: &mut S, from: f64, to: f64) {
    let mut now = from;
    while let Some(deadline) = machine.next_deadline() {
        if deadline > to {
            break;
        }
        now = deadline.max(now);
        machine.tick(now);
        if machine.next_deadline() == Some(deadline) {
            // A deadline that does not move after tick would spin forever.
            break;
        }
    }
    machine.tick(to.max(now));
}
