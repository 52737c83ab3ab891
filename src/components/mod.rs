//! UI components built with Leptos.
//!
//! - [`carousel`] - Image carousel over the server's image directory
//! - [`icons`] - Centralized icon definitions

pub mod carousel;
pub mod icons;

pub use carousel::StampCarousel;
