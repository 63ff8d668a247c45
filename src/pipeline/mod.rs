//! Page pipeline
//!
//! ```text
//! Input source → Page::dispatch → Carousel / Menu / Navbar → RenderSink
//! ```
//!
//! - **viewport** - Reactive viewport size and scroll signals
//! - **page** - Component discovery, ownership and input routing
//! - **mount** - Terminal host lifecycle (raw mode, mouse capture)

pub mod mount;
pub mod page;
pub mod viewport;

pub use mount::{MountHandle, mount, tick};
pub use page::{CarouselLayout, Page, PageLayout};
pub use viewport::Viewport;
