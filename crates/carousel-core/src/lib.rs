//! Target-independent carousel logic.
//!
//! Shared by the listing server and the WASM view:
//! - [`api`] - Endpoint paths and wire types both sides agree on
//! - [`listing`] - Turning a raw directory listing into [`ImageItem`]s
//! - [`Carousel`] - Index state machine with wraparound and transition lock
//! - [`keys`] - Keyboard key to [`Navigation`] mapping

pub mod api;
mod carousel;
mod item;
pub mod keys;
pub mod listing;

pub use carousel::{Carousel, CarouselOptions, Navigation, Phase};
pub use item::ImageItem;
pub use listing::items_from_listing;
