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

//! Arms a browser timer for a state machine's nearest deadline.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use raphamed_interactions::platform::now_ms;
use raphamed_interactions::Scheduled;

/// Keeps one timer armed for `machine`'s next deadline, re-arming after
/// every state change. The timer is cancelled with the owning scope.
pub fn drive<S>(machine: RwSignal<S>)
where
    S: Scheduled + Send + Sync + 'static,
{
    let timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        let Some(deadline) = machine.try_with(|m| m.next_deadline()) else {
            return;
        };
        let timeout = deadline.map(|at| {
            Timeout::new(delay_until(at, now_ms()), move || {
                machine.try_update(|m| m.tick(now_ms()));
            })
        });
        timer.try_set_value(timeout);
    });
}

/// Milliseconds from `now` until `at`, rounded up so the timer never fires
/// before the deadline.
pub fn delay_until(at: f64, now: f64) -> u32 {
    let delay = (at - now).ceil();
    if delay <= 0.0 {
        0
    } else if delay >= u32::MAX as f64 {
        u32::MAX
    } else {
        delay as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_deadlines_fire_immediately() {
        assert_eq!(delay_until(100.0, 250.0), 0);
    }

    #[test]
    fn fractional_delays_round_up() {
        assert_eq!(delay_until(1_000.2, 0.0), 1_001);
        assert_eq!(delay_until(5_000.0, 0.0), 5_000);
    }
}
