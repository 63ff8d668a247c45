//! Pointer Module - Mouse and touch events, hit regions
//!
//! Mouse drags and touch swipes share one event type so the carousel sees a
//! single start/move/end/cancel contract whatever the device.
//!
//! # API
//!
//! - `PointerEvent::down/move_to/up/cancel` - Build events
//! - `HitMap` - Coordinate-to-target lookup for the page's controls

use crate::types::Rect;

// =============================================================================
// TYPES
// =============================================================================

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Down,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Up,
    /// touchcancel
    Cancel,
}

/// Pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(source: PointerSource, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { source, phase, x, y }
    }

    pub fn down(source: PointerSource, x: f64, y: f64) -> Self {
        Self::new(source, PointerPhase::Down, x, y)
    }

    pub fn move_to(source: PointerSource, x: f64, y: f64) -> Self {
        Self::new(source, PointerPhase::Move, x, y)
    }

    pub fn up(source: PointerSource, x: f64, y: f64) -> Self {
        Self::new(source, PointerPhase::Up, x, y)
    }

    pub fn cancel(source: PointerSource) -> Self {
        Self::new(source, PointerPhase::Cancel, 0.0, 0.0)
    }
}

// =============================================================================
// HIT MAP
// =============================================================================

/// What a point on the page resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The draggable track of carousel `id`.
    CarouselTrack(usize),
    /// Indicator `slide` of carousel `carousel`.
    Indicator { carousel: usize, slide: usize },
    /// The mobile menu toggle.
    MenuToggle,
    /// Navigation link `index`.
    NavLink(usize),
}

/// Ordered list of regions; later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Add a region on top of the existing ones.
    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        self.regions.push((rect, target));
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Topmost target at a position.
    pub fn get(&self, x: f64, y: f64) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    /// Region of a target, if registered.
    pub fn rect_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }
}

// =============================================================================
// TESTS
// =============================================================================
