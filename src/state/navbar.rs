//! Navbar scroll marker.
//!
//! The navigation bar carries a `scrolled` marker once the page has been
//! scrolled past a small offset.

use log::debug;

use crate::types::{NAVBAR_SCROLL_OFFSET, NavbarIntent};

#[derive(Debug, Clone)]
pub struct Navbar {
    present: bool,
    scrolled: bool,
    threshold: f64,
}

impl Navbar {
    pub fn new(present: bool) -> Self {
        Self::with_threshold(present, NAVBAR_SCROLL_OFFSET)
    }

    pub fn with_threshold(present: bool, threshold: f64) -> Self {
        Self {
            present,
            scrolled: false,
            threshold,
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Page scroll offset changed. Emits only when the marker flips.
    pub fn on_scroll(&mut self, offset: f64) -> Option<NavbarIntent> {
        self.set_scrolled(offset > self.threshold)
    }

    /// Apply an already-computed marker. Emits only when it flips.
    pub fn set_scrolled(&mut self, scrolled: bool) -> Option<NavbarIntent> {
        if !self.present || scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        debug!("navbar scrolled = {scrolled}");
        Some(NavbarIntent { scrolled })
    }
}
