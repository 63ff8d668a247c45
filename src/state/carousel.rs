//! Carousel Module - Slide index and gesture state machine
//!
//! Unifies mouse drags and touch swipes into one three-phase contract
//! (start, move, end or cancel) driving a single "current slide" state.
//! Offsets are percentages of one slide width, so re-asserting the same
//! percentage is all a resize needs.
//!
//! # State machine
//!
//! ```text
//! Resting --start--> Dragging --move--> Dragging --end|cancel--> Resting
//! ```
//!
//! Every operation returns `Some(CarouselIntent)` when the render sink must
//! apply something, and `None` for a guarded no-op.
//!
//! # Example
//!
//! ```ignore
//! use folio_interact::state::carousel::Carousel;
//! use folio_interact::SwipeThreshold;
//!
//! let mut carousel = Carousel::new(5, true, SwipeThreshold::default(), 300);
//! carousel.on_resize(1000.0);
//!
//! carousel.on_gesture_start(800.0);
//! carousel.on_gesture_move(600.0);
//! let intent = carousel.on_gesture_end(300.0).unwrap();
//! assert_eq!(intent.offset_percent, -100.0);
//! ```

use log::{debug, trace, warn};

use crate::types::{CarouselIntent, SwipeThreshold};

// =============================================================================
// TYPES
// =============================================================================

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Resting,
    Dragging {
        /// Pointer x at gesture start.
        origin_x: f64,
        /// Last pointer x seen, used when the gesture is cancelled.
        last_x: f64,
    },
}

/// One slider on the page.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    current_index: usize,
    drag: DragState,
    live_offset_percent: f64,
    track_width: f64,
    has_indicators: bool,
    threshold: SwipeThreshold,
    transition_ms: u32,
}

/// Resting offset for a slide index.
fn rest_offset(index: usize) -> f64 {
    -(index as f64) * 100.0
}

impl Carousel {
    /// Create a carousel resting on the first slide.
    ///
    /// A `slide_count` of 0 yields an inert carousel: every operation is a
    /// no-op. The track width starts unmeasured (0) until the first
    /// `on_resize`.
    pub fn new(
        slide_count: usize,
        has_indicators: bool,
        threshold: SwipeThreshold,
        transition_ms: u32,
    ) -> Self {
        let threshold = match threshold.validate() {
            Ok(()) => threshold,
            Err(reason) => {
                warn!("carousel threshold rejected ({reason}), using default");
                SwipeThreshold::default()
            }
        };
        Self {
            slide_count,
            current_index: 0,
            drag: DragState::Resting,
            live_offset_percent: 0.0,
            track_width: 0.0,
            has_indicators,
            threshold,
            transition_ms,
        }
    }

    /// Render intent for the initial resting position (no animation).
    pub fn initialize(&mut self) -> Option<CarouselIntent> {
        if self.is_inert() {
            debug!("carousel has no slides, staying inert");
            return None;
        }
        self.current_index = 0;
        self.drag = DragState::Resting;
        Some(self.rest(false))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current visual offset (percent of one slide width).
    pub fn live_offset_percent(&self) -> f64 {
        self.live_offset_percent
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// True when constructed without slides.
    pub fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    /// Number of indicator controls the render sink should create.
    pub fn indicator_count(&self) -> usize {
        if self.has_indicators { self.slide_count } else { 0 }
    }

    /// Most negative offset the track may reach.
    fn min_offset(&self) -> f64 {
        rest_offset(self.slide_count.saturating_sub(1))
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Settle on `index` (clamped into range).
    ///
    /// Ignored while a gesture is open; the gesture's own end snaps the
    /// track.
    pub fn go_to(&mut self, index: usize, animate: bool) -> Option<CarouselIntent> {
        if self.is_inert() {
            return None;
        }
        if self.is_dragging() {
            warn!("carousel go_to({index}) during a drag ignored");
            return None;
        }
        let clamped = index.min(self.slide_count - 1);
        if clamped != self.current_index {
            debug!("carousel slide {} -> {}", self.current_index, clamped);
        }
        self.current_index = clamped;
        Some(self.rest(animate))
    }

    /// Indicator control `index` was clicked.
    pub fn on_indicator_click(&mut self, index: usize) -> Option<CarouselIntent> {
        self.go_to(index, true)
    }

    /// Track width changed; re-assert the resting offset without animation.
    ///
    /// An open drag is dropped without changing the slide.
    pub fn on_resize(&mut self, track_width: f64) -> Option<CarouselIntent> {
        self.track_width = track_width.max(0.0);
        if self.is_inert() {
            return None;
        }
        if self.is_dragging() {
            debug!("carousel resized mid-drag, dropping gesture");
            self.drag = DragState::Resting;
        }
        Some(self.rest(false))
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer down / touch start on the track.
    ///
    /// Emits nothing: the first move intent carries the disabled transition.
    pub fn on_gesture_start(&mut self, pointer_x: f64) -> Option<CarouselIntent> {
        if self.is_inert() || self.is_dragging() {
            return None;
        }
        trace!("carousel gesture start at {pointer_x}");
        self.drag = DragState::Dragging {
            origin_x: pointer_x,
            last_x: pointer_x,
        };
        None
    }

    /// Pointer / touch moved while dragging.
    pub fn on_gesture_move(&mut self, pointer_x: f64) -> Option<CarouselIntent> {
        let DragState::Dragging { origin_x, .. } = self.drag else {
            return None;
        };
        self.drag = DragState::Dragging {
            origin_x,
            last_x: pointer_x,
        };

        let delta = pointer_x - origin_x;
        let delta_percent = if self.track_width > 0.0 {
            delta / self.track_width * 100.0
        } else {
            0.0
        };
        let offset = (rest_offset(self.current_index) + delta_percent).clamp(self.min_offset(), 0.0);
        trace!("carousel drag delta {delta} -> offset {offset}%");
        self.live_offset_percent = offset;

        Some(CarouselIntent {
            offset_percent: offset,
            transition_ms: 0,
            active_indicator: self.active_indicator(),
        })
    }

    /// Pointer up / touch end. Commits at most one slide step, then snaps.
    pub fn on_gesture_end(&mut self, pointer_x: f64) -> Option<CarouselIntent> {
        let DragState::Dragging { origin_x, .. } = self.drag else {
            return None;
        };
        self.drag = DragState::Resting;

        let delta = pointer_x - origin_x;
        let mut target = self.current_index;
        if self.threshold.is_exceeded(delta, self.track_width) {
            if delta < 0.0 && target + 1 < self.slide_count {
                target += 1;
            } else if delta > 0.0 && target > 0 {
                target -= 1;
            }
        }
        if target == self.current_index {
            trace!("carousel gesture delta {delta} snaps back");
        }
        self.go_to(target, true)
    }

    /// Pointer left the track mid-drag (or touch cancelled).
    ///
    /// Ends the gesture at the last known position, so the machine never
    /// stays in `Dragging`.
    pub fn on_gesture_cancel(&mut self) -> Option<CarouselIntent> {
        let DragState::Dragging { last_x, .. } = self.drag else {
            return None;
        };
        self.on_gesture_end(last_x)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn active_indicator(&self) -> Option<usize> {
        self.has_indicators.then_some(self.current_index)
    }

    fn rest(&mut self, animate: bool) -> CarouselIntent {
        self.live_offset_percent = rest_offset(self.current_index);
        CarouselIntent {
            offset_percent: self.live_offset_percent,
            transition_ms: if animate { self.transition_ms } else { 0 },
            active_indicator: self.active_indicator(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
