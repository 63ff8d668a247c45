//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the page's input events, so a
//! terminal can act as the input source.
//!
//! # API
//!
//! - `convert_event` - Convert any crossterm Event to an InputEvent
//! - `convert_mouse_event` - Left-button press/drag/release become pointer phases
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use folio_interact::state::input::poll_event;
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         page.dispatch(event, &mut sink);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use super::pointer::{PointerEvent, PointerPhase, PointerSource};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Everything the input source can deliver to a page.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse or touch pointer event
    Pointer(PointerEvent),
    /// Keyboard event
    Key(KeyboardEvent),
    /// Viewport resize (new width, height)
    Resize(f64, f64),
    /// Page scroll by a number of wheel notches (positive scrolls down)
    Wheel(f64),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w as f64, h as f64),
        _ => InputEvent::None,
    }
}

/// Convert crossterm MouseEvent.
///
/// Only the left button drives gestures; terminal cells become coordinates.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    let x = event.column as f64;
    let y = event.row as f64;
    let phase = match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => PointerPhase::Down,
        MouseEventKind::Drag(CrosstermMouseButton::Left) => PointerPhase::Move,
        MouseEventKind::Moved => PointerPhase::Move,
        MouseEventKind::Up(CrosstermMouseButton::Left) => PointerPhase::Up,
        MouseEventKind::ScrollDown => return InputEvent::Wheel(1.0),
        MouseEventKind::ScrollUp => return InputEvent::Wheel(-1.0),
        _ => return InputEvent::None,
    };
    InputEvent::Pointer(PointerEvent::new(PointerSource::Mouse, phase, x, y))
}

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    out.set(Modifiers::CTRL, mods.contains(KeyModifiers::CONTROL));
    out.set(Modifiers::ALT, mods.contains(KeyModifiers::ALT));
    out.set(Modifiers::SHIFT, mods.contains(KeyModifiers::SHIFT));
    out.set(
        Modifiers::META,
        mods.intersects(KeyModifiers::META | KeyModifiers::SUPER),
    );
    out
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
