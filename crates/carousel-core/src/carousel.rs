//! Carousel index state machine.
//!
//! Owns the display list, the current position and the transition lock.
//! Scheduling the end of a transition is left to the caller so the state
//! machine stays free of timers and browser APIs.

use crate::item::ImageItem;
use crate::listing::items_from_listing;

/// Behavior switches for a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Gate navigation behind a transition lock while the change-of-image
    /// animation plays. When disabled, every action applies immediately.
    pub animated: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self { animated: true }
    }
}

/// Lifecycle phase of the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No items yet: initial fetch pending, failed, or returned no images.
    Loading,
    /// At least one item is available for display.
    Ready,
}

/// An index-changing user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    GoTo(usize),
}

/// Carousel state: items, current index and transition flag.
///
/// `current` is always a valid index into `items` when `items` is non-empty,
/// and `0` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    items: Vec<ImageItem>,
    current: usize,
    transitioning: bool,
    options: CarouselOptions,
}

impl Carousel {
    /// Creates an empty carousel in the [`Phase::Loading`] phase.
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            transitioning: false,
            options,
        }
    }

    /// Replaces the whole display list and rewinds to the first item.
    pub fn load(&mut self, items: Vec<ImageItem>) {
        self.items = items;
        self.current = 0;
        self.transitioning = false;
    }

    /// Replaces the display list with the images found in a raw listing.
    ///
    /// Non-image entries are dropped. Returns the number of images loaded.
    pub fn load_listing<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        self.load(items_from_listing(names));
        self.items.len()
    }

    /// Applies the outcome of a listing fetch.
    ///
    /// On `Ok` the list is replaced as in [`Carousel::load_listing`]. On
    /// `Err` the state is left untouched (empty before the first load) and
    /// the error is handed back for logging.
    pub fn apply_listing<S: AsRef<str>, E>(
        &mut self,
        listing: Result<Vec<S>, E>,
    ) -> Result<usize, E> {
        listing.map(|names| self.load_listing(&names))
    }

    /// Advances one item, wrapping from the last to the first.
    ///
    /// Returns the new index, or `None` when the action was ignored.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.accepting_len()?;
        self.change_to((self.current + 1) % len)
    }

    /// Steps back one item, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<usize> {
        let len = self.accepting_len()?;
        self.change_to((self.current + len - 1) % len)
    }

    /// Jumps directly to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        let len = self.accepting_len()?;
        if index >= len {
            return None;
        }
        self.change_to(index)
    }

    /// Dispatches a [`Navigation`] action.
    pub fn apply(&mut self, navigation: Navigation) -> Option<usize> {
        match navigation {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
            Navigation::GoTo(index) => self.go_to(index),
        }
    }

    /// Releases the transition lock.
    pub fn end_transition(&mut self) {
        self.transitioning = false;
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The item on display, if any.
    pub fn current(&self) -> Option<&ImageItem> {
        self.items.get(self.current)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    pub fn phase(&self) -> Phase {
        if self.items.is_empty() {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    /// Counter text such as `"2 of 5"`. Empty when there is nothing to show.
    pub fn position_label(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        format!("{} of {}", self.current + 1, self.items.len())
    }

    /// List length if navigation is currently allowed.
    fn accepting_len(&self) -> Option<usize> {
        if self.items.is_empty() || (self.options.animated && self.transitioning) {
            return None;
        }
        Some(self.items.len())
    }

    fn change_to(&mut self, index: usize) -> Option<usize> {
        self.current = index;
        self.transitioning = self.options.animated;
        Some(index)
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}
