//! rondo widget - accessible page carousel
//!
//! Cycles through sibling "page" elements inside a container. Buttons,
//! clicks, and keyboard input advance the pages with wraparound; active
//! state is mirrored into classes and `aria-hidden`; optional status
//! elements receive the current position. The live tree is the only source
//! of truth - the widget never caches a page index.

mod carousel;
mod config;
mod error;
mod registry;

pub use carousel::{Direction, PageCarousel, PageRef};
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use registry::CarouselRegistry;
