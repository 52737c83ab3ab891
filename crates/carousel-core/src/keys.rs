//! Keyboard shortcuts.

use crate::carousel::Navigation;

/// `KeyboardEvent.key` value that steps back.
pub const KEY_PREVIOUS: &str = "ArrowLeft";

/// `KeyboardEvent.key` value that advances.
pub const KEY_NEXT: &str = "ArrowRight";

/// Map a `KeyboardEvent.key` value to a navigation action.
pub fn navigation_for_key(key: &str) -> Option<Navigation> {
    match key {
        KEY_PREVIOUS => Some(Navigation::Previous),
        KEY_NEXT => Some(Navigation::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Carousel, CarouselOptions, items_from_listing};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(navigation_for_key("ArrowLeft"), Some(Navigation::Previous));
        assert_eq!(navigation_for_key("ArrowRight"), Some(Navigation::Next));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(navigation_for_key("ArrowUp"), None);
        assert_eq!(navigation_for_key("Enter"), None);
        assert_eq!(navigation_for_key("arrowright"), None);
        assert_eq!(navigation_for_key(""), None);
    }

    #[test]
    fn test_right_key_wraps_two_items() {
        let mut carousel = Carousel::new(CarouselOptions::default());
        carousel.load(items_from_listing(&["a.png", "b.PNG", "c.txt"]));

        let right = navigation_for_key("ArrowRight").unwrap();
        assert_eq!(carousel.apply(right), Some(1));
        carousel.end_transition();
        assert_eq!(carousel.apply(right), Some(0));
    }
}
