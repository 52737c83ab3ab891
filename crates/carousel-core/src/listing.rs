//! Listing to display-list transformation.
//!
//! The server returns every entry in the image directory unfiltered. This
//! module keeps only recognized images and derives their captions and URLs.

use crate::api::image_url;
use crate::item::ImageItem;

/// File extensions (lowercase, without the dot) treated as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png"];

/// Characters in a file stem that become spaces in the caption.
const TITLE_SEPARATORS: &[char] = &['-', '_', '.'];

/// Returns the file stem if `name` ends with a recognized image extension.
///
/// Matching is case-insensitive. A name that is nothing but the extension
/// (e.g. `.png`) has no stem and is not an image.
fn image_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
        .then_some(stem)
}

/// Check whether a listing entry is a displayable image.
pub fn is_image(name: &str) -> bool {
    image_stem(name).is_some()
}

/// Derive a caption from a file name.
///
/// Strips a recognized image extension and turns each run of separators or
/// whitespace into one space, trimmed at both ends: `"blue-star-1.png"`
/// becomes `"blue star 1"`. A stem made only of separators is kept as is.
pub fn derive_title(name: &str) -> String {
    let stem = image_stem(name).unwrap_or(name);
    let words: Vec<&str> = stem
        .split(|c: char| TITLE_SEPARATORS.contains(&c) || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        return stem.to_string();
    }
    words.join(" ")
}

/// Build the display list from raw listing entries.
///
/// Non-images are dropped. Survivors keep their relative order and are
/// numbered from 1.
pub fn items_from_listing<S: AsRef<str>>(names: &[S]) -> Vec<ImageItem> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_image(name))
        .zip(1..)
        .map(|(name, id)| ImageItem {
            id,
            title: derive_title(name),
            src: image_url(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(is_image("foo.png"));
        assert!(is_image("FOO.PNG"));
        assert!(is_image("Foo.Png"));
        assert!(!is_image("foo.jpg"));
        assert!(!is_image("foo"));
        assert!(!is_image("png"));
        assert!(!is_image(".png"));
        assert!(!is_image("foo.png.txt"));
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("blue-star-1.png"), "blue star 1");
        assert_eq!(derive_title("b.PNG"), "b");
        assert_eq!(derive_title("penny_black.png"), "penny black");
        assert_eq!(derive_title("1840.first.issue.png"), "1840 first issue");
        assert_eq!(derive_title("Inverted Jenny.png"), "Inverted Jenny");
    }

    #[test]
    fn test_derive_title_collapses_separator_runs() {
        assert_eq!(derive_title("a..png"), "a");
        assert_eq!(derive_title("x--y.png"), "x y");
        assert_eq!(derive_title("_penny__black-.png"), "penny black");
        assert_eq!(derive_title("two  spaces.png"), "two spaces");
        assert_eq!(derive_title("---.png"), "---");
    }

    #[test]
    fn test_derive_title_is_deterministic() {
        let first = derive_title("blue-star-1.png");
        let second = derive_title("blue-star-1.png");
        assert_eq!(first, second);
    }

    #[test]
    fn test_items_from_listing_filters_and_numbers() {
        let names = ["a.png", "b.PNG", "c.txt"];
        let items = items_from_listing(&names);

        assert_eq!(
            items,
            vec![
                ImageItem {
                    id: 1,
                    title: "a".to_string(),
                    src: "/images/a.png".to_string(),
                },
                ImageItem {
                    id: 2,
                    title: "b".to_string(),
                    src: "/images/b.PNG".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_items_from_listing_preserves_relative_order() {
        let names = vec![
            "zeta.png".to_string(),
            "notes.md".to_string(),
            "alpha.png".to_string(),
            "thumbs".to_string(),
            "mid-way.PNG".to_string(),
        ];
        let titles: Vec<_> = items_from_listing(&names)
            .into_iter()
            .map(|item| (item.id, item.title))
            .collect();

        assert_eq!(
            titles,
            vec![
                (1, "zeta".to_string()),
                (2, "alpha".to_string()),
                (3, "mid way".to_string()),
            ]
        );
    }

    #[test]
    fn test_items_from_empty_listing() {
        let names: [&str; 0] = [];
        assert!(items_from_listing(&names).is_empty());
        assert!(items_from_listing(&["readme.txt", "photo.jpg"]).is_empty());
    }
}
