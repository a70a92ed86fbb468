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

//! Slide carousel.
//!
//! One writer owns the current index: autoplay, buttons, dots, keys and
//! swipes all end up in [`Carousel::go_to`], which drops any request that
//! arrives while the previous transition is still settling.
//!
//! ```text
//! Idle ──play──▶ AutoPlaying ◀──play/pause──▶ Paused
//!   └──────────────── destroy ───────────────────┴──▶ Destroyed
//! ```

use crate::clock::{earliest, Scheduled};
use crate::config::DataAttributes;
use crate::swipe::{Swipe, SwipeTracker, TouchPoint};

pub const DEFAULT_AUTOPLAY_DELAY_MS: u32 = 5_000;
/// Matches the CSS transition on slides.
pub const TRANSITION_SETTLE_MS: f64 = 600.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionStyle {
    #[default]
    Fade,
    Slide,
}

impl TransitionStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            TransitionStyle::Fade => "fade",
            TransitionStyle::Slide => "slide",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub autoplay_delay_ms: u32,
    pub transition: TransitionStyle,
    pub pause_on_hover: bool,
    pub keyboard: bool,
    pub touch: bool,
    /// Wrap past either end instead of clamping.
    pub loop_slides: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
            transition: TransitionStyle::Fade,
            pause_on_hover: true,
            keyboard: true,
            touch: true,
            loop_slides: true,
        }
    }
}

impl CarouselConfig {
    /// Reads `data-autoplay`, `data-delay`, `data-transition`,
    /// `data-pause-on-hover`, `data-keyboard`, `data-touch` and `data-loop`.
    /// Flags are on unless set to `"false"`; a missing or zero delay falls
    /// back to the default.
    pub fn from_attributes<A: DataAttributes + ?Sized>(attrs: &A) -> Self {
        let delay = attrs.parse_or("delay", 0u32);
        Self {
            autoplay: attrs.flag_default_on("autoplay"),
            autoplay_delay_ms: if delay == 0 {
                DEFAULT_AUTOPLAY_DELAY_MS
            } else {
                delay
            },
            transition: match attrs.data("transition").as_deref() {
                Some("slide") => TransitionStyle::Slide,
                _ => TransitionStyle::Fade,
            },
            pause_on_hover: attrs.flag_default_on("pause-on-hover"),
            keyboard: attrs.flag_default_on("keyboard"),
            touch: attrs.flag_default_on("touch"),
            loop_slides: attrs.flag_default_on("loop"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback {
    Idle,
    AutoPlaying { next_advance_at: f64 },
    Paused,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Settled,
    Settling { until: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    Previous,
    Next,
}

impl CarouselKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(CarouselKey::Previous),
            "ArrowRight" => Some(CarouselKey::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    config: CarouselConfig,
    playback: Playback,
    transition: Transition,
    hovered: bool,
    focused: bool,
    swipe: SwipeTracker,
}

impl Carousel {
    /// Returns `None` for an empty slide list: nothing to show, no controls.
    pub fn mount(len: usize, config: CarouselConfig, now: f64) -> Option<Self> {
        if len == 0 {
            log::info!("carousel has no slides, skipping");
            return None;
        }
        let mut carousel = Self {
            len,
            current: 0,
            config,
            playback: Playback::Idle,
            transition: Transition::Settled,
            hovered: false,
            focused: false,
            swipe: SwipeTracker::default(),
        };
        if carousel.config.autoplay {
            carousel.play(now);
        }
        log::info!("carousel initialized with {len} slides");
        Some(carousel)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::AutoPlaying { .. })
    }

    pub fn is_transitioning(&self, now: f64) -> bool {
        matches!(self.transition, Transition::Settling { until } if now < until)
    }

    pub fn is_destroyed(&self) -> bool {
        self.playback == Playback::Destroyed
    }

    /// Whether prev/next/dot controls should be rendered.
    pub fn has_controls(&self) -> bool {
        self.len > 1 && !self.is_destroyed()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn dot_label(index: usize) -> String {
        format!("Go to slide {}", index + 1)
    }

    /// Shows slide `index`, wrapping or clamping out-of-range values.
    /// Returns whether the visible slide changed.
    pub fn go_to(&mut self, index: isize, now: f64) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.settle(now);
        if let Transition::Settling { .. } = self.transition {
            log::trace!("carousel busy, dropping go_to({index})");
            return false;
        }
        let last = self.len - 1;
        let target = if index < 0 {
            if self.config.loop_slides {
                last
            } else {
                0
            }
        } else if index as usize > last {
            if self.config.loop_slides {
                0
            } else {
                last
            }
        } else {
            index as usize
        };
        if target == self.current {
            return false;
        }
        log::debug!("carousel slide {} -> {}", self.current, target);
        self.current = target;
        self.transition = Transition::Settling {
            until: now + TRANSITION_SETTLE_MS,
        };
        true
    }

    pub fn next(&mut self, now: f64) -> bool {
        self.go_to(self.current as isize + 1, now)
    }

    pub fn previous(&mut self, now: f64) -> bool {
        self.go_to(self.current as isize - 1, now)
    }

    pub fn play(&mut self, now: f64) {
        if self.len < 2
            || matches!(
                self.playback,
                Playback::AutoPlaying { .. } | Playback::Destroyed
            )
        {
            return;
        }
        self.playback = Playback::AutoPlaying {
            next_advance_at: now + f64::from(self.config.autoplay_delay_ms),
        };
    }

    pub fn pause(&mut self) {
        if let Playback::AutoPlaying { .. } = self.playback {
            self.playback = Playback::Paused;
        }
    }

    /// Restarts the autoplay cadence from now.
    pub fn reset_autoplay(&mut self, now: f64) {
        self.pause();
        if self.config.autoplay && !self.pointer_inside() {
            self.play(now);
        }
    }

    pub fn destroy(&mut self) {
        if !self.is_destroyed() {
            log::debug!("carousel destroyed");
        }
        self.playback = Playback::Destroyed;
        self.transition = Transition::Settled;
        self.swipe.cancel();
    }

    pub fn next_clicked(&mut self, now: f64) {
        self.next(now);
        self.reset_autoplay(now);
    }

    pub fn previous_clicked(&mut self, now: f64) {
        self.previous(now);
        self.reset_autoplay(now);
    }

    pub fn dot_clicked(&mut self, index: usize, now: f64) {
        self.go_to(index as isize, now);
        self.reset_autoplay(now);
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.config.pause_on_hover {
            self.pause();
        }
    }

    pub fn pointer_leave(&mut self, now: f64) {
        self.hovered = false;
        self.resume_if_idle(now);
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        if self.config.pause_on_hover {
            self.pause();
        }
    }

    pub fn focus_out(&mut self, now: f64) {
        self.focused = false;
        self.resume_if_idle(now);
    }

    pub fn visibility_changed(&mut self, hidden: bool, now: f64) {
        if hidden {
            self.pause();
        } else {
            self.resume_if_idle(now);
        }
    }

    /// Handles an arrow key. Returns `true` when the key was consumed and the
    /// browser default should be prevented.
    pub fn key_pressed(&mut self, key: CarouselKey, now: f64) -> bool {
        if !self.config.keyboard || !(self.hovered || self.focused) || self.is_destroyed() {
            return false;
        }
        match key {
            CarouselKey::Previous => self.previous(now),
            CarouselKey::Next => self.next(now),
        };
        self.reset_autoplay(now);
        true
    }

    pub fn touch_start(&mut self, at: TouchPoint, now: f64) {
        if !self.config.touch || self.is_destroyed() {
            return;
        }
        self.swipe.start(at, now);
        self.pause();
    }

    /// The browser took the gesture over; resume as if it ended without a swipe.
    pub fn touch_cancel(&mut self, now: f64) {
        if !self.swipe.in_progress() {
            return;
        }
        self.swipe.cancel();
        self.reset_autoplay(now);
    }

    pub fn touch_end(&mut self, at: TouchPoint, now: f64) {
        if !self.swipe.in_progress() {
            return;
        }
        match self.swipe.end(at, now) {
            Some(Swipe::Left) => {
                self.next(now);
            }
            Some(Swipe::Right) => {
                self.previous(now);
            }
            None => {}
        }
        self.reset_autoplay(now);
    }

    fn pointer_inside(&self) -> bool {
        self.config.pause_on_hover && (self.hovered || self.focused)
    }

    fn resume_if_idle(&mut self, now: f64) {
        if self.config.autoplay && !self.pointer_inside() {
            self.play(now);
        }
    }

    fn settle(&mut self, now: f64) {
        if let Transition::Settling { until } = self.transition {
            if now >= until {
                self.transition = Transition::Settled;
            }
        }
    }
}

impl Scheduled for Carousel {
    fn next_deadline(&self) -> Option<f64> {
        let settle = match self.transition {
            Transition::Settling { until } => Some(until),
            Transition::Settled => None,
        };
        let advance = match self.playback {
            Playback::AutoPlaying { next_advance_at } => Some(next_advance_at),
            _ => None,
        };
        earliest(settle, advance)
    }

    fn tick(&mut self, now: f64) {
        self.settle(now);
        if let Playback::AutoPlaying { next_advance_at } = self.playback {
            if now >= next_advance_at {
                self.next(now);
                let delay = f64::from(self.config.autoplay_delay_ms);
                let mut following = next_advance_at + delay;
                if following <= now {
                    following = now + delay;
                }
                self.playback = Playback::AutoPlaying {
                    next_advance_at: following,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::run_until;

    fn carousel(len: usize, loop_slides: bool) -> Carousel {
        let config = CarouselConfig {
            loop_slides,
            ..CarouselConfig::default()
        };
        Carousel::mount(len, config, 0.0).unwrap()
    }

    #[test]
    fn empty_carousel_does_not_mount() {
        assert!(Carousel::mount(0, CarouselConfig::default(), 0.0).is_none());
    }

    #[test]
    fn initial_playback_depends_on_config_and_len() {
        assert!(carousel(3, true).is_playing());
        assert_eq!(carousel(1, true).playback(), Playback::Idle);
        let manual = CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        };
        assert_eq!(Carousel::mount(3, manual, 0.0).unwrap().playback(), Playback::Idle);
    }

    #[test]
    fn looping_wraps_at_both_ends() {
        let mut c = carousel(4, true);
        assert!(c.go_to(-1, 0.0));
        assert_eq!(c.current_index(), 3);
        assert!(c.go_to(4, 1_000.0));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn non_looping_clamps_at_both_ends() {
        let mut c = carousel(4, false);
        c.go_to(2, 0.0);
        assert!(c.go_to(-1, 1_000.0));
        assert_eq!(c.current_index(), 0);
        assert!(c.go_to(4, 2_000.0));
        assert_eq!(c.current_index(), 3);
        assert!(!c.go_to(99, 3_000.0), "already at the last slide");
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn requests_inside_settle_window_are_dropped() {
        let mut c = carousel(3, true);
        assert!(c.next(1_000.0));
        assert!(!c.next(1_300.0));
        assert_eq!(c.current_index(), 1);
        assert!(c.is_transitioning(1_599.0));
        assert!(!c.is_transitioning(1_600.0));
        assert!(c.next(1_600.0));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn untouched_carousel_advances_once_per_delay() {
        let mut c = carousel(3, true);
        run_until(&mut c, 0.0, 4_999.0);
        assert_eq!(c.current_index(), 0);
        run_until(&mut c, 4_999.0, 6_000.0);
        assert_eq!(c.current_index(), 1);
        run_until(&mut c, 6_000.0, 11_000.0);
        assert_eq!(c.current_index(), 2);
        assert_eq!(
            c.playback(),
            Playback::AutoPlaying {
                next_advance_at: 15_000.0
            }
        );
    }

    #[test]
    fn manual_navigation_restarts_cadence() {
        let mut c = carousel(5, true);
        run_until(&mut c, 0.0, 4_000.0);
        c.next_clicked(4_000.0);
        assert_eq!(c.current_index(), 1);
        // The old cadence would have fired at 5000.
        run_until(&mut c, 4_000.0, 8_900.0);
        assert_eq!(c.current_index(), 1);
        run_until(&mut c, 8_900.0, 9_000.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn play_and_pause_are_idempotent() {
        let mut c = carousel(3, true);
        let before = c.playback();
        c.play(2_000.0);
        assert_eq!(c.playback(), before);
        c.pause();
        c.pause();
        assert_eq!(c.playback(), Playback::Paused);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn single_slide_never_plays() {
        let mut c = carousel(1, true);
        c.play(0.0);
        assert!(!c.is_playing());
        assert!(!c.next(0.0));
        assert!(!c.has_controls());
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut c = carousel(3, true);
        c.pointer_enter();
        assert_eq!(c.playback(), Playback::Paused);
        run_until(&mut c, 0.0, 20_000.0);
        assert_eq!(c.current_index(), 0);
        c.pointer_leave(20_000.0);
        assert_eq!(
            c.playback(),
            Playback::AutoPlaying {
                next_advance_at: 25_000.0
            }
        );
    }

    #[test]
    fn hidden_tab_pauses_and_visible_resumes() {
        let mut c = carousel(3, true);
        c.visibility_changed(true, 100.0);
        assert!(!c.is_playing());
        c.visibility_changed(false, 200.0);
        assert!(c.is_playing());
    }

    #[test]
    fn arrow_keys_only_apply_while_hovered_or_focused() {
        let mut c = carousel(3, true);
        assert!(!c.key_pressed(CarouselKey::Next, 0.0));
        assert_eq!(c.current_index(), 0);

        c.pointer_enter();
        assert!(c.key_pressed(CarouselKey::Previous, 0.0));
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_playing(), "still hovered, autoplay stays paused");
    }

    #[test]
    fn swipes_navigate_and_reset_autoplay() {
        let mut c = carousel(3, true);
        c.touch_start(TouchPoint { x: 300.0, y: 10.0 }, 1_000.0);
        assert!(!c.is_playing());
        c.touch_end(TouchPoint { x: 150.0, y: 20.0 }, 1_100.0);
        assert_eq!(c.current_index(), 1);
        assert_eq!(
            c.playback(),
            Playback::AutoPlaying {
                next_advance_at: 6_100.0
            }
        );

        c.touch_start(TouchPoint { x: 100.0, y: 10.0 }, 2_000.0);
        c.touch_end(TouchPoint { x: 260.0, y: 10.0 }, 2_100.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn cancelled_touch_resumes_autoplay() {
        let mut c = carousel(3, true);
        c.touch_start(TouchPoint { x: 300.0, y: 10.0 }, 1_000.0);
        assert!(!c.is_playing());
        c.touch_cancel(1_050.0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(
            c.playback(),
            Playback::AutoPlaying {
                next_advance_at: 6_050.0
            }
        );

        // a late touchend after the cancel is not a swipe
        c.touch_end(TouchPoint { x: 100.0, y: 10.0 }, 1_100.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn transition_classes_differ_from_slide_class() {
        assert_eq!(TransitionStyle::Fade.class_name(), "fade");
        assert_eq!(TransitionStyle::Slide.class_name(), "slide");
        assert_ne!(TransitionStyle::Slide.class_name(), "carousel-slide");
    }

    #[test]
    fn destroyed_carousel_is_inert() {
        let mut c = carousel(3, true);
        c.destroy();
        assert!(!c.next(10_000.0));
        c.play(10_000.0);
        assert!(!c.is_playing());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn config_reads_data_attributes() {
        let attrs = |key: &str| match key {
            "autoplay" => Some("false".to_string()),
            "delay" => Some("7000".to_string()),
            "transition" => Some("slide".to_string()),
            "loop" => Some("false".to_string()),
            _ => None,
        };
        let config = CarouselConfig::from_attributes(&attrs);
        assert!(!config.autoplay);
        assert_eq!(config.autoplay_delay_ms, 7_000);
        assert_eq!(config.transition, TransitionStyle::Slide);
        assert!(!config.loop_slides);
        assert!(config.keyboard && config.touch && config.pause_on_hover);

        let zero_delay = |key: &str| (key == "delay").then(|| "0".to_string());
        assert_eq!(
            CarouselConfig::from_attributes(&zero_delay).autoplay_delay_ms,
            DEFAULT_AUTOPLAY_DELAY_MS
        );
    }
}
