use serde::{Deserialize, Serialize};

/// One displayable image.
///
/// Built once from a listing entry and never modified; a reload replaces the
/// whole list instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// 1-based position among the images at load time.
    pub id: u32,
    /// Human-readable caption derived from the file name.
    pub title: String,
    /// URL the image is fetched from.
    pub src: String,
}
