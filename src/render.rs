//! Render sinks.
//!
//! A sink receives render intents and applies them to whatever surface the
//! host owns. The state machines never read anything back from it.

use log::info;

use crate::types::RenderIntent;

/// Write-only consumer of render intents.
pub trait RenderSink {
    fn apply(&mut self, intent: RenderIntent);
}

impl<F> RenderSink for F
where
    F: FnMut(RenderIntent),
{
    fn apply(&mut self, intent: RenderIntent) {
        self(intent)
    }
}

/// Collects every intent, in order. Handy for tests and for hosts that
/// batch work per frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    intents: Vec<RenderIntent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> &[RenderIntent] {
        &self.intents
    }

    pub fn last(&self) -> Option<&RenderIntent> {
        self.intents.last()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Take the recorded intents, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<RenderIntent> {
        std::mem::take(&mut self.intents)
    }
}

impl RenderSink for RecordingSink {
    fn apply(&mut self, intent: RenderIntent) {
        self.intents.push(intent);
    }
}

/// Logs each intent at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn apply(&mut self, intent: RenderIntent) {
        match intent {
            RenderIntent::CarouselMounted { id, indicator_count } => {
                info!("carousel {id}: mounted with {indicator_count} indicators");
            }
            RenderIntent::Carousel { id, intent } => {
                info!(
                    "carousel {id}: translateX({}%) over {}ms, active {:?}",
                    intent.offset_percent, intent.transition_ms, intent.active_indicator
                );
            }
            RenderIntent::Menu(menu) => {
                info!(
                    "menu: aria-expanded={} label={:?} icon={}",
                    menu.aria_expanded(),
                    menu.label(),
                    menu.icon()
                );
            }
            RenderIntent::Navbar(navbar) => {
                info!("navbar: scrolled={}", navbar.scrolled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuIntent, NavbarIntent};

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.apply(RenderIntent::Menu(MenuIntent { is_open: true }));
        sink.apply(RenderIntent::Navbar(NavbarIntent { scrolled: true }));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last(), Some(&RenderIntent::Navbar(NavbarIntent { scrolled: true })));

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |intent: RenderIntent| seen.push(intent);
            sink.apply(RenderIntent::Menu(MenuIntent { is_open: false }));
        }
        assert_eq!(seen, vec![RenderIntent::Menu(MenuIntent { is_open: false })]);
    }
}
