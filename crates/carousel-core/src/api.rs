//! HTTP contract between the listing server and the carousel view.

use serde::{Deserialize, Serialize};

/// Listing endpoint. Responds with a JSON array of file names.
pub const API_IMAGES_PATH: &str = "/api/images";

/// URL prefix under which every listed file can be fetched.
pub const IMAGES_URL_PREFIX: &str = "/images";

/// Directory (relative to the public root) holding the images.
pub const IMAGES_DIR: &str = "images";

/// Message sent to clients when the image directory cannot be read.
pub const LISTING_UNAVAILABLE: &str = "Error reading directory";

/// Error payload returned alongside a server error status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn listing_unavailable() -> Self {
        Self {
            error: LISTING_UNAVAILABLE.to_string(),
        }
    }
}

/// Display URL for an entry returned by the listing endpoint.
pub fn image_url(file_name: &str) -> String {
    format!("{}/{}", IMAGES_URL_PREFIX, file_name)
}
