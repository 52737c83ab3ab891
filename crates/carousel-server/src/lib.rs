//! Directory listing service for the stamp carousel.
//!
//! Exposes the names found in the image directory at
//! [`carousel_core::api::API_IMAGES_PATH`] and serves the public root as
//! static files.

pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod web;

pub use config::ServerConfig;
pub use error::ListingError;
pub use listing::list_images;
pub use web::{AppState, router, run};
