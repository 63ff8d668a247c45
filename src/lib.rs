//! # folio-interact
//!
//! Interaction state for a static portfolio site: a carousel engine that
//! turns mouse drags and touch swipes into one slide-index state machine,
//! and the collapsible navigation menu.
//!
//! Components never touch a rendering surface. They consume input events
//! and hand declarative render intents (an offset, a transition duration,
//! an active indicator, an open flag) to a [`RenderSink`].
//!
//! ## Architecture
//!
//! ```text
//! InputEvent → Page → Carousel / Menu / Navbar → RenderIntent → RenderSink
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, swipe thresholds, render intents
//! - [`state`] - Carousel, menu and navbar state machines; input events
//! - [`pipeline`] - Page ownership and routing, viewport signals, terminal mount
//! - [`render`] - Render sink trait and stock sinks
//! - [`config`] - TOML settings

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod types;

pub use types::*;

pub use config::InteractionConfig;
pub use error::{ConfigError, Result};

pub use pipeline::{CarouselLayout, MountHandle, Page, PageLayout, Viewport, mount, tick};

pub use render::{LogSink, RecordingSink, RenderSink};

pub use state::{
    Carousel, DragState, HitMap, HitTarget, InputEvent, KeyState, KeyboardEvent, Menu,
    Modifiers, Navbar, PointerEvent, PointerPhase, PointerSource,
};
