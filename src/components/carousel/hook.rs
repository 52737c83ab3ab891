//! Carousel lifecycle hook.
//!
//! Wires the pure [`Carousel`] state machine to the browser: the one-shot
//! listing fetch, the window-level arrow-key listener and the timer that
//! releases the transition lock. Everything acquired here is released when
//! the owning component is cleaned up.

use std::time::Duration;

use carousel_core::api::API_IMAGES_PATH;
use carousel_core::keys::navigation_for_key;
use carousel_core::{Carousel, CarouselOptions, Navigation};
use leptos::logging::{error, log};
use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::config::TRANSITION_MS;
use crate::utils::fetch_json;

/// Reactive handle to a mounted carousel.
#[derive(Clone, Copy)]
pub struct CarouselHandle {
    /// Items, current index and transition flag.
    pub carousel: RwSignal<Carousel>,
    /// Timer that will release the transition lock, if one is pending.
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl CarouselHandle {
    fn new(options: CarouselOptions) -> Self {
        Self {
            carousel: RwSignal::new(Carousel::new(options)),
            pending: StoredValue::new(None),
        }
    }

    /// Apply a navigation action, starting the transition timer if the
    /// carousel locked itself.
    pub fn navigate(&self, navigation: Navigation) {
        let locked = self
            .carousel
            .try_update(|c| c.apply(navigation).map(|_| c.is_transitioning()))
            .flatten();
        if locked == Some(true) {
            self.schedule_transition_end();
        }
    }

    fn schedule_transition_end(&self) {
        self.cancel_pending();

        let carousel = self.carousel;
        let pending = self.pending;
        let release = move || {
            pending.try_update_value(|p| *p = None);
            carousel.try_update(Carousel::end_transition);
        };

        match set_timeout_with_handle(release, Duration::from_millis(TRANSITION_MS)) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(_) => {
                // Without a timer the lock would never lift.
                self.carousel.update(Carousel::end_transition);
            }
        }
    }

    fn cancel_pending(&self) {
        self.pending.try_update_value(|p| {
            if let Some(handle) = p.take() {
                handle.clear();
            }
        });
    }

    /// Fetch the listing once and replace the display list.
    ///
    /// Failures are logged and leave the carousel empty.
    fn load(&self) {
        let carousel = self.carousel;
        spawn_local(async move {
            let listing = fetch_json::<Vec<String>>(API_IMAGES_PATH).await;
            match carousel.try_update(|c| c.apply_listing(listing)) {
                Some(Ok(count)) => log!("Loaded {} images", count),
                Some(Err(e)) => error!("Error loading images: {}", e),
                None => {}
            }
        });
    }
}

/// Mount-scoped carousel state.
///
/// Starts the listing fetch, binds the arrow keys on the window and removes
/// the listener and any pending transition timer on cleanup, so remounting
/// never accumulates listeners or mutates a disposed carousel.
pub fn use_carousel(options: CarouselOptions) -> CarouselHandle {
    let handle = CarouselHandle::new(options);
    handle.load();

    let listener = window_event_listener(ev::keydown, move |ev| {
        if let Some(navigation) = navigation_for_key(&ev.key()) {
            handle.navigate(navigation);
        }
    });

    on_cleanup(move || {
        listener.remove();
        handle.cancel_pending();
    });

    handle
}
