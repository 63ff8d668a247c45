//! Viewport state signals.
//!
//! Reactive signals for the viewport dimensions and page scroll offset.
//! Each page owns its own viewport, so hosts running several pages never
//! share them.

use std::fmt;

use spark_signals::{Signal, derived, signal};

// =============================================================================
// Viewport
// =============================================================================

pub struct Viewport {
    width: Signal<f64>,
    height: Signal<f64>,
    scroll_y: Signal<f64>,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: signal(width),
            height: signal(height),
            scroll_y: signal(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Current page scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Set the viewport size (called on resize events).
    pub fn set_size(&self, width: f64, height: f64) {
        self.width.set(width);
        self.height.set(height);
    }

    /// Scroll the page by `delta`, never above the top. Returns the new offset.
    pub fn scroll_by(&self, delta: f64) -> f64 {
        let next = (self.scroll_y.get() + delta).max(0.0);
        self.scroll_y.set(next);
        next
    }

    /// Derived flag: page scrolled strictly past `offset`.
    ///
    /// Recomputed lazily whenever the scroll signal changes.
    pub fn scrolled_past(&self, offset: f64) -> impl Fn() -> bool + 'static {
        let scroll_y = self.scroll_y.clone();
        let past = derived(move || scroll_y.get() > offset);
        move || past.get()
    }

    /// Get the width signal for reactive tracking.
    pub fn width_signal(&self) -> Signal<f64> {
        self.width.clone()
    }

    /// Get the height signal for reactive tracking.
    pub fn height_signal(&self) -> Signal<f64> {
        self.height.clone()
    }

    /// Get the scroll offset signal for reactive tracking.
    pub fn scroll_signal(&self) -> Signal<f64> {
        self.scroll_y.clone()
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("scroll_y", &self.scroll_y())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
