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

//! Scroll-derived page state: header shadow, active section, header reveal
//! and the back-to-top button.

use std::fmt;

/// `scroll_y` above which the header is considered scrolled.
pub const SCROLLED_THRESHOLD: f64 = 10.0;
/// Distance from the viewport top used to pick the active section.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;
/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 80.0;
/// At or above this offset the header is always shown.
pub const HEADER_REVEAL_TOP: f64 = 100.0;
/// Scrolling down past this offset hides the header.
pub const HEADER_HIDE_AFTER: f64 = 200.0;
/// Back-to-top appears once the page is scrolled further than this.
pub const BACK_TO_TOP_AFTER: f64 = 400.0;

/// A named, anchorable region of the single-page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section(&'static str);

impl Section {
    pub const HOME: Section = Section("home");
    pub const PRODUCTS: Section = Section("products");
    pub const ABOUT: Section = Section("about");
    pub const CONTACT: Section = Section("contact");

    /// Probe order. Earlier sections win when several contain the probe.
    pub const ORDER: [Section; 4] = [
        Section::HOME,
        Section::PRODUCTS,
        Section::ABOUT,
        Section::CONTACT,
    ];

    pub const fn id(&self) -> &'static str {
        self.0
    }

    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }

    /// Resolves `home` or `#home` to a known section.
    pub fn from_href(href: &str) -> Option<Section> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Section::ORDER.into_iter().find(|s| s.0 == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub active_section: Section,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scrolled_past_threshold: false,
            active_section: Section::HOME,
        }
    }
}

/// Owns [`ScrollState`] and coalesces scroll events to one recomputation per
/// animation frame.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    state: ScrollState,
    frame_pending: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(Section::ORDER.to_vec())
    }
}

impl ScrollTracker {
    pub fn new(sections: Vec<Section>) -> Self {
        let active_section = sections.first().copied().unwrap_or(Section::HOME);
        Self {
            sections,
            state: ScrollState {
                scrolled_past_threshold: false,
                active_section,
            },
            frame_pending: false,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Called for every scroll event. Returns `true` when the caller must
    /// request an animation frame; `false` when one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Runs the coalesced recomputation inside the animation frame.
    ///
    /// `boxes` returns the bounding box of a section's anchor element, or
    /// `None` when the element is not in the document.
    pub fn on_frame<F>(&mut self, scroll_y: f64, boxes: F) -> ScrollState
    where
        F: Fn(Section) -> Option<SectionBox>,
    {
        self.frame_pending = false;
        self.state.scrolled_past_threshold = scroll_y > SCROLLED_THRESHOLD;
        if let Some(section) = self
            .sections
            .iter()
            .copied()
            .find(|s| boxes(*s).is_some_and(|b| b.contains(SECTION_PROBE_OFFSET)))
        {
            if section != self.state.active_section {
                log::debug!("active section {} -> {}", self.state.active_section, section);
            }
            self.state.active_section = section;
        }
        self.state
    }
}

/// Document offset to scroll to so that a section lands just below the
/// fixed header.
pub fn anchor_scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Whether a clicked `href` should be intercepted for animated scrolling.
/// Bare `#` and `#0` are placeholders and keep the browser default.
pub fn is_scrollable_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#" && href != "#0" && href.len() > 1
}

/// Hide-on-scroll-down header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderReveal {
    last_scroll: f64,
    pub hidden: bool,
    pub scrolled: bool,
}

impl HeaderReveal {
    pub fn update(&mut self, scroll_y: f64) {
        let last = self.last_scroll;
        if scroll_y <= HEADER_REVEAL_TOP {
            self.hidden = false;
            self.scrolled = false;
        } else if scroll_y > last && scroll_y > HEADER_HIDE_AFTER {
            self.hidden = true;
            self.scrolled = true;
        } else {
            self.hidden = false;
            self.scrolled = true;
        }
        self.last_scroll = scroll_y.max(0.0);
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(boxes: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<SectionBox> + '_ {
        move |s| {
            boxes
                .iter()
                .find(|(id, _, _)| *id == s)
                .map(|(_, top, bottom)| SectionBox {
                    top: *top,
                    bottom: *bottom,
                })
        }
    }

    #[test]
    fn threshold_flag_tracks_scroll_y() {
        let mut t = ScrollTracker::default();
        for (y, expected) in [(0.0, false), (10.0, false), (10.5, true), (4000.0, true)] {
            assert!(t.on_scroll());
            let state = t.on_frame(y, |_| None);
            assert_eq!(state.scrolled_past_threshold, expected, "scroll_y = {y}");
        }
    }

    #[test]
    fn scroll_events_are_coalesced_per_frame() {
        let mut t = ScrollTracker::default();
        assert!(t.on_scroll());
        assert!(!t.on_scroll());
        assert!(!t.on_scroll());
        t.on_frame(50.0, |_| None);
        assert!(t.on_scroll());
    }

    #[test]
    fn first_section_containing_probe_wins() {
        let mut t = ScrollTracker::default();
        // products and about both straddle the probe; products is earlier.
        let boxes = [
            (Section::HOME, -900.0, -10.0),
            (Section::PRODUCTS, -10.0, 120.0),
            (Section::ABOUT, 90.0, 800.0),
        ];
        let state = t.on_frame(900.0, layout(&boxes));
        assert_eq!(state.active_section, Section::PRODUCTS);
    }

    #[test]
    fn probe_bounds_are_inclusive() {
        let mut t = ScrollTracker::default();
        let boxes = [(Section::CONTACT, 100.0, 400.0)];
        assert_eq!(t.on_frame(2000.0, layout(&boxes)).active_section, Section::CONTACT);
        let boxes = [(Section::ABOUT, -300.0, 100.0)];
        assert_eq!(t.on_frame(2000.0, layout(&boxes)).active_section, Section::ABOUT);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut t = ScrollTracker::default();
        t.on_frame(900.0, layout(&[(Section::ABOUT, 0.0, 500.0)]));
        let state = t.on_frame(1200.0, layout(&[(Section::ABOUT, -600.0, -100.0)]));
        assert_eq!(state.active_section, Section::ABOUT);
    }

    #[test]
    fn section_hrefs_round_trip() {
        assert_eq!(Section::from_href("#about"), Some(Section::ABOUT));
        assert_eq!(Section::from_href("contact"), Some(Section::CONTACT));
        assert_eq!(Section::from_href("#pricing"), None);
        assert_eq!(Section::PRODUCTS.href(), "#products");
    }

    #[test]
    fn anchor_target_accounts_for_header() {
        assert_eq!(anchor_scroll_target(300.0, 1000.0), 1220.0);
        assert!(is_scrollable_anchor("#contact"));
        assert!(!is_scrollable_anchor("#"));
        assert!(!is_scrollable_anchor("#0"));
        assert!(!is_scrollable_anchor("/about"));
    }

    #[test]
    fn header_hides_on_scroll_down_and_shows_on_scroll_up() {
        let mut h = HeaderReveal::default();
        h.update(50.0);
        assert!(!h.hidden && !h.scrolled);
        h.update(150.0);
        assert!(!h.hidden && h.scrolled);
        h.update(300.0);
        assert!(h.hidden);
        h.update(280.0);
        assert!(!h.hidden && h.scrolled);
        h.update(90.0);
        assert!(!h.hidden && !h.scrolled);
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!back_to_top_visible(400.0));
        assert!(back_to_top_visible(401.0));
    }
}
