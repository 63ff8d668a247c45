//! State Module - Interaction state machines
//!
//! - **Carousel** - Slide index, drag/swipe gestures, snapping
//! - **Menu** - Collapsible navigation menu
//! - **Navbar** - Scrolled marker
//! - **Keyboard** / **Pointer** - Host-independent input events
//! - **Input** - crossterm bridge for terminal hosts

pub mod carousel;
pub mod input;
pub mod keyboard;
pub mod menu;
pub mod navbar;
pub mod pointer;

pub use carousel::{Carousel, DragState};
pub use input::InputEvent;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use menu::Menu;
pub use navbar::Navbar;
pub use pointer::{HitMap, HitTarget, PointerEvent, PointerPhase, PointerSource};
