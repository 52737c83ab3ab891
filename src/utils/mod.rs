//! Browser utilities.
//!
//! - [`fetch_json`] - Same-origin JSON fetching with timeout

mod fetch;

pub use fetch::fetch_json;
