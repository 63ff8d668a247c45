//! Core types for folio-interact.
//!
//! Geometry handed in by the host, the swipe threshold policy, the part sets
//! discovered at page initialisation, and the render intents every component
//! hands to the render sink.

use serde::{Deserialize, Serialize};

// =============================================================================
// Defaults
// =============================================================================

/// Snap animation duration for `go_to(_, animate = true)`.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Default swipe threshold as a fraction of the measured track width.
pub const DEFAULT_SWIPE_FRACTION: f64 = 0.15;

/// Alternate swipe threshold in absolute pixels.
pub const DEFAULT_SWIPE_PIXELS: f64 = 60.0;

/// Viewport width above which the collapsible menu is closed.
pub const MENU_BREAKPOINT: f64 = 768.0;

/// Page scroll offset past which the navbar is marked as scrolled.
pub const NAVBAR_SCROLL_OFFSET: f64 = 20.0;

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check whether a point lies inside (right and bottom edges excluded).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Split horizontally into `count` equal cells.
    pub fn split_columns(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let cell = self.width / count as f64;
        (0..count)
            .map(|i| Rect::new(self.x + cell * i as f64, self.y, cell, self.height))
            .collect()
    }
}

// =============================================================================
// Swipe Threshold
// =============================================================================

/// How far a gesture must travel before it commits to a slide change.
///
/// Both policies exist in the wild; each carousel instance picks one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum SwipeThreshold {
    /// `|delta| / track_width >= fraction`.
    TrackFraction(f64),
    /// `|delta| >= pixels`.
    Pixels(f64),
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::TrackFraction(DEFAULT_SWIPE_FRACTION)
    }
}

impl SwipeThreshold {
    /// Reject policies that commit on any jitter or never commit at all.
    ///
    /// Fractions must lie in (0, 1]; pixel counts must be positive. NaN fails both.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Self::TrackFraction(f) if !(f > 0.0 && f <= 1.0) => {
                Err(format!("fraction {f} not in (0, 1]"))
            }
            Self::Pixels(px) if !(px > 0.0 && px.is_finite()) => {
                Err(format!("pixels {px} must be positive"))
            }
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check whether a horizontal travel of `delta` commits a slide change.
    ///
    /// A fraction policy never commits against a track of zero width.
    pub fn is_exceeded(&self, delta: f64, track_width: f64) -> bool {
        match *self {
            Self::TrackFraction(fraction) => {
                track_width > 0.0 && delta.abs() / track_width >= fraction
            }
            Self::Pixels(pixels) => delta.abs() >= pixels,
        }
    }
}

// =============================================================================
// Discovered Parts (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Page elements found for the navigation menu.
    ///
    /// The menu is present only when both the toggle and the link
    /// container were found.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MenuParts: u8 {
        const TOGGLE = 1 << 0;
        const LINKS = 1 << 1;
    }
}

impl MenuParts {
    /// Presence predicate evaluated once at construction.
    pub fn is_complete(&self) -> bool {
        self.contains(Self::TOGGLE | Self::LINKS)
    }
}

// =============================================================================
// Render Intents
// =============================================================================

/// Visual state a carousel wants applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselIntent {
    /// Track offset as a percentage of one slide width (0, -100, -200, ...).
    pub offset_percent: f64,
    /// Transition duration; 0 means jump.
    pub transition_ms: u32,
    /// Indicator to mark active, `None` when the carousel has no indicators.
    pub active_indicator: Option<usize>,
}

/// Visual and accessible state of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuIntent {
    pub is_open: bool,
}

impl MenuIntent {
    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open { "true" } else { "false" }
    }

    /// Accessible label for the toggle control.
    pub fn label(&self) -> &'static str {
        if self.is_open { "Close menu" } else { "Open menu" }
    }

    /// Icon ligature shown on the toggle control.
    pub fn icon(&self) -> &'static str {
        if self.is_open { "close" } else { "menu" }
    }
}

/// Navbar scroll marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarIntent {
    pub scrolled: bool,
}

/// Everything a render sink can be asked to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderIntent {
    /// A carousel was discovered; create this many indicator controls.
    CarouselMounted { id: usize, indicator_count: usize },
    /// A carousel wants its track moved.
    Carousel { id: usize, intent: CarouselIntent },
    /// The menu changed state.
    Menu(MenuIntent),
    /// The navbar crossed its scroll line.
    Navbar(NavbarIntent),
}

// =============================================================================
// Tests
// =============================================================================
