//! Page - Component discovery and input routing.
//!
//! The page is the one place that owns component instances: one carousel per
//! discovered track, the optional menu, the navbar and the viewport. The
//! host hands it a `PageLayout` describing what it found, then feeds every
//! input event through `dispatch`; resulting render intents go to the sink.
//!
//! # Routing
//!
//! - pointer down on a track opens a gesture on that carousel, which keeps
//!   it until up / cancel (a mouse leaving the track cancels)
//! - pointer down and up on the same control is a click (indicator, menu
//!   toggle, nav link)
//! - Escape closes the menu
//! - resize closes the menu above the breakpoint and re-asserts every
//!   carousel's resting offset
//! - the wheel scrolls the page and drives the navbar marker

use std::fmt;

use log::{debug, trace, warn};

use super::viewport::Viewport;
use crate::config::InteractionConfig;
use crate::render::RenderSink;
use crate::state::{
    Carousel, HitMap, HitTarget, InputEvent, KeyboardEvent, Menu, Navbar, PointerEvent,
    PointerPhase, PointerSource,
};
use crate::types::{CarouselIntent, MenuIntent, MenuParts, Rect, RenderIntent, SwipeThreshold};

// =============================================================================
// Layout
// =============================================================================

/// A carousel container found on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselLayout {
    /// The draggable track; its width converts drags to percentages.
    pub track: Rect,
    pub slide_count: usize,
    /// Strip holding one indicator per slide, if indicators are wanted.
    pub indicators: Option<Rect>,
    /// Per-instance threshold; falls back to the configured default.
    pub threshold: Option<SwipeThreshold>,
}

impl CarouselLayout {
    pub fn new(track: Rect, slide_count: usize) -> Self {
        Self {
            track,
            slide_count,
            indicators: None,
            threshold: None,
        }
    }

    pub fn with_indicators(mut self, strip: Rect) -> Self {
        self.indicators = Some(strip);
        self
    }

    pub fn with_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Everything the host discovered on the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub navbar: Option<Rect>,
    pub menu_toggle: Option<Rect>,
    /// Link container; `Some` even when it holds no links.
    pub nav_links: Option<Vec<Rect>>,
    pub carousels: Vec<CarouselLayout>,
}

impl PageLayout {
    fn menu_parts(&self) -> MenuParts {
        let mut parts = MenuParts::empty();
        parts.set(MenuParts::TOGGLE, self.menu_toggle.is_some());
        parts.set(MenuParts::LINKS, self.nav_links.is_some());
        parts
    }
}

// =============================================================================
// Page
// =============================================================================

/// Carousel holding the open gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capture {
    carousel: usize,
    source: PointerSource,
}

pub struct Page {
    config: InteractionConfig,
    viewport: Viewport,
    /// Derived from the viewport scroll signal.
    navbar_scrolled: Box<dyn Fn() -> bool>,
    carousels: Vec<Carousel>,
    tracks: Vec<Rect>,
    menu: Menu,
    navbar: Navbar,
    hits: HitMap,
    capture: Option<Capture>,
    pressed: Option<HitTarget>,
}

impl Page {
    /// Discover components and emit their initial render intents.
    pub fn initialize(layout: &PageLayout, config: InteractionConfig, sink: &mut impl RenderSink) -> Self {
        let mut carousels = Vec::with_capacity(layout.carousels.len());
        for (id, found) in layout.carousels.iter().enumerate() {
            let mut carousel = Carousel::new(
                found.slide_count,
                found.indicators.is_some(),
                carousel_threshold(id, found.threshold, config.carousel.threshold),
                config.carousel.transition_ms,
            );
            carousel.on_resize(found.track.width);
            if let Some(intent) = carousel.initialize() {
                sink.apply(RenderIntent::CarouselMounted {
                    id,
                    indicator_count: carousel.indicator_count(),
                });
                sink.apply(RenderIntent::Carousel { id, intent });
            }
            carousels.push(carousel);
        }

        let menu = Menu::with_breakpoint(layout.menu_parts(), config.menu.breakpoint);
        let navbar = Navbar::with_threshold(layout.navbar.is_some(), config.navbar.scrolled_offset);

        let viewport = Viewport::new(layout.viewport_width, layout.viewport_height);
        let navbar_scrolled = Box::new(viewport.scrolled_past(config.navbar.scrolled_offset));

        let mut page = Self {
            viewport,
            navbar_scrolled,
            carousels,
            tracks: Vec::new(),
            menu,
            navbar,
            hits: HitMap::new(),
            capture: None,
            pressed: None,
            config,
        };
        page.rebuild_hits(layout);

        debug!(
            "page initialized: {} carousels, menu {}, navbar {}",
            page.carousels.len(),
            if page.menu.is_present() { "present" } else { "absent" },
            if page.navbar.is_present() { "present" } else { "absent" },
        );
        page
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    pub fn carousel(&self, id: usize) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Carousel currently holding a gesture.
    pub fn active_gesture(&self) -> Option<usize> {
        self.capture.map(|c| c.carousel)
    }

    // =========================================================================
    // Direct operations
    // =========================================================================

    /// Move carousel `id` to `index` (clamped). Unknown ids are ignored.
    pub fn go_to(&mut self, id: usize, index: usize, animate: bool, sink: &mut impl RenderSink) -> bool {
        let intent = self.carousels.get_mut(id).and_then(|c| c.go_to(index, animate));
        emit_carousel(sink, id, intent)
    }

    /// Flip the menu.
    pub fn toggle_menu(&mut self, sink: &mut impl RenderSink) -> bool {
        let intent = self.menu.toggle();
        emit_menu(sink, intent)
    }

    /// Host relaid the page out (typically after a resize).
    ///
    /// Refreshes hit regions and track widths and re-asserts every
    /// carousel's resting offset.
    pub fn apply_layout(&mut self, layout: &PageLayout, sink: &mut impl RenderSink) {
        let (found, owned) = (layout.carousels.len(), self.carousels.len());
        if found > owned {
            warn!("relayout has {found} carousels, page owns {owned}; extra layout entries ignored");
        } else if found < owned {
            warn!("relayout has {found} carousels, page owns {owned}; unmatched carousels keep their width but lose their hit regions");
        }
        self.viewport.set_size(layout.viewport_width, layout.viewport_height);
        self.rebuild_hits(layout);

        for (id, found) in layout.carousels.iter().enumerate() {
            if let Some(carousel) = self.carousels.get_mut(id) {
                let intent = carousel.on_resize(found.track.width);
                emit_carousel(sink, id, intent);
            }
        }
        self.release_dropped_capture();

        let intent = self.menu.on_viewport_resize(layout.viewport_width);
        emit_menu(sink, intent);
    }

    // =========================================================================
    // Event routing
    // =========================================================================

    /// Route one input event. Returns true if any component consumed it.
    pub fn dispatch(&mut self, event: InputEvent, sink: &mut impl RenderSink) -> bool {
        match event {
            InputEvent::Pointer(pointer) => self.on_pointer(pointer, sink),
            InputEvent::Key(key) => self.on_key(&key, sink),
            InputEvent::Resize(width, height) => self.on_resize(width, height, sink),
            InputEvent::Wheel(notches) => self.on_wheel(notches, sink),
            InputEvent::None => false,
        }
    }

    fn on_pointer(&mut self, event: PointerEvent, sink: &mut impl RenderSink) -> bool {
        match event.phase {
            PointerPhase::Down => {
                let target = self.hit_at(event.x, event.y);
                trace!("pointer down at ({}, {}) on {target:?}", event.x, event.y);
                self.pressed = target;
                if let Some(HitTarget::CarouselTrack(id)) = target {
                    if self.capture.is_none() {
                        self.carousels[id].on_gesture_start(event.x);
                        self.capture = Some(Capture {
                            carousel: id,
                            source: event.source,
                        });
                    }
                }
                target.is_some()
            }
            PointerPhase::Move => {
                let Some(capture) = self.capture else {
                    return false;
                };
                let left_track = capture.source == PointerSource::Mouse
                    && !self.tracks[capture.carousel].contains(event.x, event.y);
                let intent = if left_track {
                    debug!("pointer left carousel {} mid-drag", capture.carousel);
                    self.capture = None;
                    self.pressed = None;
                    self.carousels[capture.carousel].on_gesture_cancel()
                } else {
                    self.carousels[capture.carousel].on_gesture_move(event.x)
                };
                emit_carousel(sink, capture.carousel, intent);
                true
            }
            PointerPhase::Up => {
                let mut consumed = false;
                if let Some(capture) = self.capture.take() {
                    let intent = self.carousels[capture.carousel].on_gesture_end(event.x);
                    consumed |= emit_carousel(sink, capture.carousel, intent);
                }
                let pressed = self.pressed.take();
                let released = self.hit_at(event.x, event.y);
                if let Some(target) = pressed.filter(|p| Some(*p) == released) {
                    consumed |= self.on_click(target, sink);
                }
                consumed
            }
            PointerPhase::Cancel => {
                self.pressed = None;
                match self.capture.take() {
                    Some(capture) => {
                        let intent = self.carousels[capture.carousel].on_gesture_cancel();
                        emit_carousel(sink, capture.carousel, intent)
                    }
                    None => false,
                }
            }
        }
    }

    fn on_click(&mut self, target: HitTarget, sink: &mut impl RenderSink) -> bool {
        match target {
            HitTarget::CarouselTrack(_) => false,
            HitTarget::Indicator { carousel, slide } => {
                let intent = self.carousels[carousel].on_indicator_click(slide);
                emit_carousel(sink, carousel, intent)
            }
            HitTarget::MenuToggle => {
                let intent = self.menu.toggle();
                emit_menu(sink, intent)
            }
            HitTarget::NavLink(index) => {
                debug!("navigation clicked: link {index}");
                let intent = self.menu.on_link_click();
                emit_menu(sink, intent)
            }
        }
    }

    fn on_key(&mut self, event: &KeyboardEvent, sink: &mut impl RenderSink) -> bool {
        let intent = self.menu.on_key(event);
        emit_menu(sink, intent)
    }

    fn on_resize(&mut self, width: f64, height: f64, sink: &mut impl RenderSink) -> bool {
        debug!("viewport resized to {width}x{height}");
        self.viewport.set_size(width, height);

        let intent = self.menu.on_viewport_resize(width);
        emit_menu(sink, intent);

        for (id, carousel) in self.carousels.iter_mut().enumerate() {
            let intent = carousel.on_resize(carousel.track_width());
            emit_carousel(sink, id, intent);
        }
        self.release_dropped_capture();
        true
    }

    fn on_wheel(&mut self, notches: f64, sink: &mut impl RenderSink) -> bool {
        let offset = self.viewport.scroll_by(notches * self.config.page.wheel_step);
        trace!("page scrolled to {offset}");
        match self.navbar.set_scrolled((self.navbar_scrolled)()) {
            Some(intent) => {
                sink.apply(RenderIntent::Navbar(intent));
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// A resize may have dropped the captured carousel's gesture.
    fn release_dropped_capture(&mut self) {
        if let Some(capture) = self.capture {
            if !self.carousels[capture.carousel].is_dragging() {
                self.capture = None;
            }
        }
    }

    /// Nav links are hidden on mobile layouts while the menu is closed.
    fn links_visible(&self) -> bool {
        self.menu.is_open() || self.viewport.width() > self.menu.breakpoint()
    }

    fn hit_at(&self, x: f64, y: f64) -> Option<HitTarget> {
        match self.hits.get(x, y) {
            Some(HitTarget::NavLink(_)) if !self.links_visible() => None,
            target => target,
        }
    }

    fn rebuild_hits(&mut self, layout: &PageLayout) {
        self.hits.clear();
        self.tracks = self
            .carousels
            .iter()
            .enumerate()
            .map(|(id, _)| layout.carousels.get(id).map(|c| c.track).unwrap_or_default())
            .collect();

        for (id, carousel) in self.carousels.iter().enumerate() {
            if carousel.is_inert() {
                continue;
            }
            self.hits.push(self.tracks[id], HitTarget::CarouselTrack(id));
            let strip = layout.carousels.get(id).and_then(|c| c.indicators);
            if let Some(strip) = strip {
                for (slide, cell) in strip.split_columns(carousel.indicator_count()).into_iter().enumerate() {
                    self.hits.push(cell, HitTarget::Indicator { carousel: id, slide });
                }
            }
        }

        if self.menu.is_present() {
            if let Some(toggle) = layout.menu_toggle {
                self.hits.push(toggle, HitTarget::MenuToggle);
            }
            for (index, link) in layout.nav_links.iter().flatten().enumerate() {
                self.hits.push(*link, HitTarget::NavLink(index));
            }
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("carousels", &self.carousels)
            .field("menu", &self.menu)
            .field("navbar", &self.navbar)
            .field("capture", &self.capture)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

/// Per-carousel threshold if usable, else the configured one, else the default.
fn carousel_threshold(
    id: usize,
    layout: Option<SwipeThreshold>,
    configured: SwipeThreshold,
) -> SwipeThreshold {
    if let Some(threshold) = layout {
        match threshold.validate() {
            Ok(()) => return threshold,
            Err(reason) => warn!("carousel {id}: layout threshold rejected ({reason}), using configured"),
        }
    }
    if configured.is_valid() { configured } else { SwipeThreshold::default() }
}

fn emit_carousel(sink: &mut impl RenderSink, id: usize, intent: Option<CarouselIntent>) -> bool {
    match intent {
        Some(intent) => {
            sink.apply(RenderIntent::Carousel { id, intent });
            true
        }
        None => false,
    }
}

fn emit_menu(sink: &mut impl RenderSink, intent: Option<MenuIntent>) -> bool {
    match intent {
        Some(intent) => {
            sink.apply(RenderIntent::Menu(intent));
            true
        }
        None => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
