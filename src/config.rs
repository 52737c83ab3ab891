//! Application configuration.
//!
//! Centralizes the constants used by the carousel view.

use carousel_core::CarouselOptions;

// =============================================================================
// Carousel Configuration
// =============================================================================

/// Options for the page's carousel.
///
/// The transition lock is on: input during the fade is ignored so a rapid
/// double click advances once.
pub const CAROUSEL_OPTIONS: CarouselOptions = CarouselOptions { animated: true };

/// Length of the change-of-image fade in milliseconds.
///
/// Must match the transition duration in `carousel.module.css`.
pub const TRANSITION_MS: u64 = 300;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;
