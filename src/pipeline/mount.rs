//! Mount API - Terminal host lifecycle.
//!
//! Puts the terminal into raw mode with mouse capture so a page can be
//! driven by terminal input, and restores it on unmount.
//!
//! # Example
//!
//! ```ignore
//! use folio_interact::pipeline::mount;
//!
//! let handle = mount::mount()?;
//!
//! while mount::tick(&handle, &mut page, &mut sink, Duration::from_millis(16))? {
//!     // draw
//! }
//!
//! handle.unmount();
//! ```

use std::io::{self, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;

use super::page::Page;
use crate::render::RenderSink;
use crate::state::InputEvent;
use crate::state::input::{disable_mouse, enable_mouse, poll_event};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
#[derive(Debug)]
pub struct MountHandle {
    running: Arc<AtomicBool>,
    restored: bool,
}

impl MountHandle {
    /// Restore the terminal.
    pub fn unmount(mut self) {
        self.restore();
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the event loop.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        self.running.store(false, Ordering::SeqCst);
        let _ = disable_mouse();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        debug!("terminal restored");
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

// =============================================================================
// Mount / Tick
// =============================================================================

/// Enter raw mode, the alternate screen and mouse capture.
pub fn mount() -> io::Result<MountHandle> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    enable_mouse()?;
    debug!("terminal mounted");
    Ok(MountHandle {
        running: Arc::new(AtomicBool::new(true)),
        restored: false,
    })
}

/// Wait up to `timeout` for one event and route it to the page.
///
/// Returns false once the handle is stopped or Ctrl+C is pressed.
pub fn tick(
    handle: &MountHandle,
    page: &mut Page,
    sink: &mut impl RenderSink,
    timeout: Duration,
) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }
    if let Some(event) = poll_event(timeout)? {
        if let InputEvent::Key(key) = &event {
            if key.is_interrupt() {
                handle.stop();
                return Ok(false);
            }
        }
        page.dispatch(event, sink);
    }
    Ok(handle.is_running())
}
