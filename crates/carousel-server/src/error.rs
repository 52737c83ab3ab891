//! Listing errors and their HTTP representation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carousel_core::api::ErrorBody;
use thiserror::Error;

/// Failure to enumerate the image directory.
///
/// Missing directories, permission problems and mid-iteration I/O errors all
/// collapse into one variant; the client never sees the cause.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("image directory unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::listing_unavailable()),
        )
            .into_response()
    }
}
