//! Terminal Demo - A portfolio page driven by terminal input
//!
//! - Drag across the slide strip with the left mouse button to swipe
//! - Click the dots to jump to a slide
//! - Click [menu] to toggle the navigation menu, Esc to close it
//! - Scroll the wheel to mark the navbar as scrolled
//! - Ctrl+C quits
//!
//! Logs go to `folio-interact*.log` in the temp directory.
//!
//! Run with: cargo run --example terminal [-- config.toml]

use std::io::{Write, stdout};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{queue, terminal};
use flexi_logger::{FileSpec, Logger};

use folio_interact::{
    CarouselLayout, InteractionConfig, LogSink, Page, PageLayout, Rect, RenderIntent, RenderSink,
    SwipeThreshold, mount, tick,
};

const SLIDES: [&str; 4] = ["Projects", "Writing", "Talks", "Contact"];

/// Remembers the last applied state so the frame can be redrawn.
struct TerminalSink {
    offset_percent: f64,
    active: usize,
    menu_open: bool,
    scrolled: bool,
    log: LogSink,
}

impl RenderSink for TerminalSink {
    fn apply(&mut self, intent: RenderIntent) {
        match &intent {
            RenderIntent::Carousel { intent, .. } => {
                self.offset_percent = intent.offset_percent;
                self.active = intent.active_indicator.unwrap_or(0);
            }
            RenderIntent::Menu(menu) => self.menu_open = menu.is_open,
            RenderIntent::Navbar(navbar) => self.scrolled = navbar.scrolled,
            RenderIntent::CarouselMounted { .. } => {}
        }
        self.log.apply(intent);
    }
}

fn build_layout(width: f64, height: f64) -> PageLayout {
    let track_width = (width - 4.0).max(1.0);
    PageLayout {
        viewport_width: width,
        viewport_height: height,
        navbar: Some(Rect::new(0.0, 0.0, width, 1.0)),
        menu_toggle: Some(Rect::new((width - 7.0).max(0.0), 0.0, 6.0, 1.0)),
        nav_links: Some(vec![
            Rect::new(2.0, 1.0, 10.0, 1.0),
            Rect::new(2.0, 2.0, 10.0, 1.0),
        ]),
        carousels: vec![
            CarouselLayout::new(Rect::new(2.0, 5.0, track_width, 5.0), SLIDES.len())
                .with_indicators(Rect::new(2.0, 11.0, (SLIDES.len() * 2) as f64, 1.0))
                .with_threshold(SwipeThreshold::TrackFraction(0.15)),
        ],
    }
}

fn draw(page: &Page, sink: &TerminalSink) -> std::io::Result<()> {
    let mut out = stdout();
    let width = page.viewport().width() as usize;
    queue!(out, Clear(ClearType::All))?;

    let bar = if sink.scrolled { "== portfolio ==" } else { "   portfolio   " };
    let toggle = if sink.menu_open { "[close]" } else { "[menu] " };
    queue!(out, MoveTo(0, 0), Print(bar))?;
    queue!(out, MoveTo(width.saturating_sub(7) as u16, 0), Print(toggle))?;
    if sink.menu_open {
        queue!(out, MoveTo(2, 1), Print("About"), MoveTo(2, 2), Print("Work"))?;
    }

    // Offset in slide widths, drawn as the visible slide name and a position marker
    let position = -sink.offset_percent / 100.0;
    let nearest = (position.round() as usize).min(SLIDES.len() - 1);
    queue!(
        out,
        MoveTo(2, 7),
        Print(format!("<< {:^20} >>  ({position:.2})", SLIDES[nearest]))
    )?;

    let dots: String = (0..SLIDES.len())
        .map(|i| if i == sink.active { "● " } else { "○ " })
        .collect();
    queue!(out, MoveTo(2, 11), Print(dots))?;
    queue!(out, MoveTo(2, 13), Print("drag the strip, click dots, Esc, wheel, Ctrl+C"))?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("debug")?
        .log_to_file(
            FileSpec::default()
                .directory(std::env::temp_dir())
                .basename("folio-interact"),
        )
        .start()?;

    let config = match std::env::args().nth(1) {
        Some(path) => InteractionConfig::load(path)?,
        None => InteractionConfig::default(),
    };

    let (cols, rows) = terminal::size()?;
    let mut sink = TerminalSink {
        offset_percent: 0.0,
        active: 0,
        menu_open: false,
        scrolled: false,
        log: LogSink,
    };
    let mut page = Page::initialize(&build_layout(cols as f64, rows as f64), config, &mut sink);

    let handle = mount()?;
    draw(&page, &sink)?;
    while tick(&handle, &mut page, &mut sink, Duration::from_millis(50))? {
        let (width, height) = (page.viewport().width(), page.viewport().height());
        let layout = build_layout(width, height);
        if page.carousel(0).map(|c| c.track_width()) != Some(layout.carousels[0].track.width) {
            page.apply_layout(&layout, &mut sink);
        }
        draw(&page, &sink)?;
    }
    handle.unmount();
    Ok(())
}
