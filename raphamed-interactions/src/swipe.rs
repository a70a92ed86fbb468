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

//! Touch swipe recognition for the carousel.

/// Gestures slower than this are treated as drags, not swipes.
pub const SWIPE_MAX_DURATION_MS: f64 = 300.0;
/// Minimum horizontal travel for a swipe.
pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left: show the next slide.
    Left,
    /// Finger moved left to right: show the previous slide.
    Right,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(TouchPoint, f64)>,
}

impl SwipeTracker {
    pub fn start(&mut self, at: TouchPoint, now: f64) {
        self.start = Some((at, now));
    }

    /// Finishes the gesture. `None` when it was too slow, too short or
    /// mostly vertical.
    pub fn end(&mut self, at: TouchPoint, now: f64) -> Option<Swipe> {
        let (origin, started) = self.start.take()?;
        if now - started >= SWIPE_MAX_DURATION_MS {
            return None;
        }
        let dx = at.x - origin.x;
        let dy = (at.y - origin.y).abs();
        if dx.abs() <= dy {
            return None;
        }
        if dx < -SWIPE_MIN_DISTANCE_PX {
            Some(Swipe::Left)
        } else if dx > SWIPE_MIN_DISTANCE_PX {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}
