//! Root application module.

use leptos::prelude::*;

use crate::components::StampCarousel;
use crate::config::CAROUSEL_OPTIONS;

/// Root application component.
///
/// The page is a single carousel over the server's image directory.
#[component]
pub fn App() -> impl IntoView {
    view! { <StampCarousel options=CAROUSEL_OPTIONS /> }
}
