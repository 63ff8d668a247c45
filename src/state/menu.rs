//! Menu Module - Collapsible navigation menu
//!
//! Two states, `Closed` and `Open`. `toggle` flips between them; `close` is
//! reached from three independent triggers (nav link click, Escape, viewport
//! widening past the breakpoint), all funnelled through the same
//! state-setting function so visual and ARIA state never diverge.
//!
//! # API
//!
//! - `toggle()` - Flip open/closed
//! - `close()` - Close if open (idempotent)
//! - `on_link_click()` - A nav link was clicked
//! - `on_key(event)` - Escape closes
//! - `on_viewport_resize(width)` - Widening past the breakpoint closes

use log::debug;

use super::keyboard::KeyboardEvent;
use crate::types::{MENU_BREAKPOINT, MenuIntent, MenuParts};

/// The page's navigation menu.
#[derive(Debug, Clone)]
pub struct Menu {
    present: bool,
    is_open: bool,
    breakpoint: f64,
}

impl Menu {
    /// Create a closed menu from the discovered page parts.
    ///
    /// Without both a toggle control and a link container the menu is
    /// absent and every operation is a no-op.
    pub fn new(parts: MenuParts) -> Self {
        Self::with_breakpoint(parts, MENU_BREAKPOINT)
    }

    /// Create a closed menu with a custom breakpoint.
    pub fn with_breakpoint(parts: MenuParts, breakpoint: f64) -> Self {
        let present = parts.is_complete();
        if !present {
            debug!("menu parts {parts:?} incomplete, menu disabled");
        }
        Self {
            present,
            is_open: false,
            breakpoint,
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    /// Flip the menu.
    pub fn toggle(&mut self) -> Option<MenuIntent> {
        if !self.present {
            return None;
        }
        Some(self.set_open(!self.is_open))
    }

    /// Open the menu. Only reachable through `toggle` from page input.
    pub fn open(&mut self) -> Option<MenuIntent> {
        if !self.present || self.is_open {
            return None;
        }
        Some(self.set_open(true))
    }

    /// Close the menu. Emits nothing if already closed.
    pub fn close(&mut self) -> Option<MenuIntent> {
        if !self.present || !self.is_open {
            return None;
        }
        Some(self.set_open(false))
    }

    /// A navigation link inside the menu was clicked.
    pub fn on_link_click(&mut self) -> Option<MenuIntent> {
        self.close()
    }

    /// Key pressed anywhere on the page.
    pub fn on_key(&mut self, event: &KeyboardEvent) -> Option<MenuIntent> {
        if event.is_press() && event.key == "Escape" {
            return self.close();
        }
        None
    }

    /// Viewport resized. Above the breakpoint the menu is always closed.
    pub fn on_viewport_resize(&mut self, width: f64) -> Option<MenuIntent> {
        if width > self.breakpoint {
            return self.close();
        }
        None
    }

    fn set_open(&mut self, open: bool) -> MenuIntent {
        self.is_open = open;
        debug!("menu {}", if open { "opened" } else { "closed" });
        MenuIntent { is_open: open }
    }
}

// =============================================================================
// TESTS
// =============================================================================
