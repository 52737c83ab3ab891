use std::path::Path;

use tokio::fs;

use crate::error::ListingError;

/// Read the names of every entry in `dir`.
///
/// No filtering or sorting is applied: subdirectories and non-image files are
/// included, in whatever order the filesystem yields them. Names that are not
/// valid UTF-8 are converted lossily.
pub async fn list_images(dir: &Path) -> Result<Vec<String>, ListingError> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
