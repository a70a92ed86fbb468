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

//! Navigation header state: mobile flyout, hover dropdowns and link
//! highlighting.

use crate::clock::{earliest, Scheduled};
use crate::scroll::Section;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Viewport width at which the desktop navigation takes over.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;
/// Delay before a hovered dropdown closes after the pointer leaves it.
pub const DROPDOWN_CLOSE_DELAY_MS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PRODUCT_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Medical Devices",
        href: "#medical-devices",
    },
    NavItem {
        label: "Healthcare Solutions",
        href: "#healthcare-solutions",
    },
    NavItem {
        label: "Medical Supplies",
        href: "#medical-supplies",
    },
];

pub const ABOUT_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Company",
        href: "#company",
    },
    NavItem {
        label: "Certifications",
        href: "#certifications",
    },
];

/// A top-level header entry: either a plain link or a dropdown trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub section: Section,
    pub items: &'static [NavItem],
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        section: Section::HOME,
        items: &[],
    },
    NavEntry {
        label: "Products",
        section: Section::PRODUCTS,
        items: PRODUCT_ITEMS,
    },
    NavEntry {
        label: "About",
        section: Section::ABOUT,
        items: ABOUT_ITEMS,
    },
    NavEntry {
        label: "Contact",
        section: Section::CONTACT,
        items: &[],
    },
];

/// A link is highlighted exactly when its section is the active one.
pub fn is_link_active(section: Section, active: Section) -> bool {
    section == active
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropdownState {
    Closed,
    Open,
    /// Open, closing at `at` unless the pointer comes back first.
    Closing { at: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dropdown {
    state: DropdownState,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            state: DropdownState::Closed,
        }
    }
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        !matches!(self.state, DropdownState::Closed)
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// Opens immediately and cancels any pending close.
    pub fn pointer_enter(&mut self) {
        self.state = DropdownState::Open;
    }

    pub fn pointer_leave(&mut self, now: f64) {
        if self.is_open() {
            self.state = DropdownState::Closing {
                at: now + DROPDOWN_CLOSE_DELAY_MS,
            };
        }
    }

    pub fn toggle(&mut self) {
        self.state = if self.is_open() {
            DropdownState::Closed
        } else {
            DropdownState::Open
        };
    }

    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
    }
}

impl Scheduled for Dropdown {
    fn next_deadline(&self) -> Option<f64> {
        match self.state {
            DropdownState::Closing { at } => Some(at),
            _ => None,
        }
    }

    fn tick(&mut self, now: f64) {
        if let DropdownState::Closing { at } = self.state {
            if now >= at {
                self.state = DropdownState::Closed;
            }
        }
    }
}

/// Header navigation. Holds the page scroll lock for as long as the mobile
/// flyout is open.
#[derive(Debug)]
pub struct NavMenu {
    scroll_lock: ScrollLock,
    flyout: Option<ScrollLockGuard>,
    dropdowns: Vec<Dropdown>,
    mobile_sections: Vec<bool>,
}

impl NavMenu {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self::with_entries(scroll_lock, NAV_ENTRIES.len())
    }

    pub fn with_entries(scroll_lock: ScrollLock, entries: usize) -> Self {
        Self {
            scroll_lock,
            flyout: None,
            dropdowns: vec![Dropdown::default(); entries],
            mobile_sections: vec![false; entries],
        }
    }

    pub fn is_flyout_open(&self) -> bool {
        self.flyout.is_some()
    }

    pub fn toggle_flyout(&mut self) {
        if self.is_flyout_open() {
            self.close_flyout();
        } else {
            self.flyout = Some(self.scroll_lock.acquire());
            log::debug!("mobile navigation opened");
        }
    }

    pub fn close_flyout(&mut self) {
        if let Some(guard) = self.flyout.take() {
            guard.release();
            self.mobile_sections.iter_mut().for_each(|open| *open = false);
            log::debug!("mobile navigation closed");
        }
    }

    pub fn viewport_resized(&mut self, width: f64) {
        if width >= DESKTOP_BREAKPOINT_PX {
            self.close_flyout();
        }
    }

    /// Returns `true` when the key closed something.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        let had_open = self.is_flyout_open() || self.dropdowns.iter().any(Dropdown::is_open);
        self.close_flyout();
        self.close_dropdowns();
        had_open
    }

    /// A link inside the flyout or a dropdown panel was activated.
    pub fn link_activated(&mut self) {
        self.close_flyout();
        self.close_dropdowns();
    }

    /// A click landed outside every dropdown and outside the flyout toggle.
    pub fn outside_click(&mut self, inside_flyout: bool) {
        self.close_dropdowns();
        if !inside_flyout {
            self.close_flyout();
        }
    }

    pub fn dropdown(&self, entry: usize) -> Option<&Dropdown> {
        self.dropdowns.get(entry)
    }

    pub fn dropdown_open(&self, entry: usize) -> bool {
        self.dropdowns.get(entry).is_some_and(Dropdown::is_open)
    }

    pub fn dropdown_pointer_enter(&mut self, entry: usize) {
        for (i, d) in self.dropdowns.iter_mut().enumerate() {
            if i == entry {
                d.pointer_enter();
            } else {
                d.close();
            }
        }
    }

    pub fn dropdown_pointer_leave(&mut self, entry: usize, now: f64) {
        if let Some(d) = self.dropdowns.get_mut(entry) {
            d.pointer_leave(now);
        }
    }

    pub fn dropdown_clicked(&mut self, entry: usize) {
        if let Some(d) = self.dropdowns.get_mut(entry) {
            d.toggle();
        }
    }

    pub fn close_dropdowns(&mut self) {
        self.dropdowns.iter_mut().for_each(Dropdown::close);
    }

    pub fn mobile_section_open(&self, entry: usize) -> bool {
        self.mobile_sections.get(entry).copied().unwrap_or(false)
    }

    pub fn toggle_mobile_section(&mut self, entry: usize) {
        if let Some(open) = self.mobile_sections.get_mut(entry) {
            *open = !*open;
        }
    }
}

impl Drop for NavMenu {
    fn drop(&mut self) {
        self.close_flyout();
    }
}

impl Scheduled for NavMenu {
    fn next_deadline(&self) -> Option<f64> {
        self.dropdowns
            .iter()
            .fold(None, |acc, d| earliest(acc, d.next_deadline()))
    }

    fn tick(&mut self, now: f64) {
        self.dropdowns.iter_mut().for_each(|d| d.tick(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::run_until;

    fn menu() -> (NavMenu, ScrollLock) {
        let lock = ScrollLock::detached();
        (NavMenu::new(lock.clone()), lock)
    }

    #[test]
    fn flyout_holds_scroll_lock_while_open() {
        let (mut nav, lock) = menu();
        nav.toggle_flyout();
        assert!(nav.is_flyout_open());
        assert!(lock.is_locked());
        nav.toggle_flyout();
        assert!(!nav.is_flyout_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn flyout_closes_on_breakpoint_escape_and_link() {
        let (mut nav, lock) = menu();
        nav.toggle_flyout();
        nav.viewport_resized(500.0);
        assert!(nav.is_flyout_open());
        nav.viewport_resized(768.0);
        assert!(!nav.is_flyout_open());

        nav.toggle_flyout();
        assert!(!nav.key_pressed("Enter"));
        assert!(nav.key_pressed("Escape"));
        assert!(!nav.is_flyout_open());

        nav.toggle_flyout();
        nav.link_activated();
        assert!(!nav.is_flyout_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_the_menu_restores_scroll() {
        let (mut nav, lock) = menu();
        nav.toggle_flyout();
        drop(nav);
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropdown_closes_after_debounce() {
        let (mut nav, _) = menu();
        nav.dropdown_pointer_enter(1);
        assert!(nav.dropdown_open(1));
        nav.dropdown_pointer_leave(1, 1_000.0);
        assert!(nav.dropdown_open(1), "still open during cursor transit");
        run_until(&mut nav, 1_000.0, 1_149.0);
        assert!(nav.dropdown_open(1));
        run_until(&mut nav, 1_149.0, 1_150.0);
        assert!(!nav.dropdown_open(1));
    }

    #[test]
    fn reentry_cancels_pending_close() {
        let (mut nav, _) = menu();
        nav.dropdown_pointer_enter(2);
        nav.dropdown_pointer_leave(2, 0.0);
        nav.dropdown_pointer_enter(2);
        run_until(&mut nav, 0.0, 1_000.0);
        assert!(nav.dropdown_open(2));
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn hovering_one_dropdown_closes_the_other() {
        let (mut nav, _) = menu();
        nav.dropdown_clicked(1);
        nav.dropdown_pointer_enter(2);
        assert!(!nav.dropdown_open(1));
        assert!(nav.dropdown_open(2));
    }

    #[test]
    fn click_toggles_and_outside_click_closes() {
        let (mut nav, _) = menu();
        nav.dropdown_clicked(1);
        assert!(nav.dropdown_open(1));
        nav.dropdown_clicked(1);
        assert!(!nav.dropdown_open(1));
        nav.dropdown_clicked(2);
        nav.outside_click(false);
        assert!(!nav.dropdown_open(2));
    }

    #[test]
    fn escape_closes_dropdowns() {
        let (mut nav, _) = menu();
        nav.dropdown_clicked(1);
        assert!(nav.key_pressed("Escape"));
        assert!(!nav.dropdown_open(1));
        assert!(!nav.key_pressed("Escape"), "nothing left to close");
    }

    #[test]
    fn mobile_sections_reset_when_flyout_closes() {
        let (mut nav, _) = menu();
        nav.toggle_flyout();
        nav.toggle_mobile_section(1);
        assert!(nav.mobile_section_open(1));
        nav.close_flyout();
        assert!(!nav.mobile_section_open(1));
    }

    #[test]
    fn link_highlight_follows_active_section() {
        assert!(is_link_active(Section::ABOUT, Section::ABOUT));
        assert!(!is_link_active(Section::HOME, Section::ABOUT));
    }
}
