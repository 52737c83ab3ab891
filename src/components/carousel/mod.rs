//! Image carousel component.
//!
//! Shows one image at a time with previous/next buttons, pagination dots,
//! a caption and an "N of M" counter. Renders nothing until the listing has
//! produced at least one image.

mod hook;

use hook::use_carousel;

use carousel_core::{Carousel, CarouselOptions, Navigation};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/carousel/carousel.module.css");

/// Class list for the displayed image: faded out while transitioning.
fn image_class(transitioning: bool) -> String {
    let state = if transitioning {
        css::imageHidden
    } else {
        css::imageShown
    };
    format!("{} {}", css::image, state)
}

/// Class list for a pagination dot.
fn dot_class(active: bool) -> String {
    if active {
        format!("{} {}", css::dot, css::dotActive)
    } else {
        css::dot.to_string()
    }
}

/// Image carousel over the server's image directory.
///
/// # Props
/// - `options`: Carousel behavior; the transition lock is on by default
#[component]
pub fn StampCarousel(#[prop(optional)] options: CarouselOptions) -> impl IntoView {
    let handle = use_carousel(options);
    let carousel = handle.carousel;

    let count = Memo::new(move |_| carousel.with(Carousel::len));
    let current_index = Memo::new(move |_| carousel.with(Carousel::current_index));
    let current = Memo::new(move |_| carousel.with(|c| c.current().cloned()));
    let transitioning = Memo::new(move |_| carousel.with(Carousel::is_transitioning));
    let position = Memo::new(move |_| carousel.with(Carousel::position_label));

    let src = move || current.get().map(|item| item.src).unwrap_or_default();
    let title = move || current.get().map(|item| item.title).unwrap_or_default();

    view! {
        <Show when=move || { count.get() > 0 }>
            <div class=css::stage>
                <div class=css::backdrop />
                <div class=css::overlay>
                    <div class=css::content>
                        <div class=css::frame>
                            <div class=css::viewport>
                                <img
                                    src=src
                                    alt=title
                                    class=move || image_class(transitioning.get())
                                />

                                <button
                                    class=format!("{} {}", css::navButton, css::navPrevious)
                                    on:click=move |_| handle.navigate(Navigation::Previous)
                                    aria-label="Previous image"
                                    disabled=move || transitioning.get()
                                >
                                    <Icon icon=ic::CHEVRON_LEFT />
                                </button>
                                <button
                                    class=format!("{} {}", css::navButton, css::navNext)
                                    on:click=move |_| handle.navigate(Navigation::Next)
                                    aria-label="Next image"
                                    disabled=move || transitioning.get()
                                >
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </button>
                            </div>
                        </div>

                        // Pagination dots
                        <div class=css::dots>
                            <For
                                each=move || 0..count.get()
                                key=|index| *index
                                children=move |index| {
                                    view! {
                                        <button
                                            class=move || dot_class(current_index.get() == index)
                                            on:click=move |_| handle.navigate(Navigation::GoTo(index))
                                            aria-label=format!("Go to slide {}", index + 1)
                                        />
                                    }
                                }
                            />
                        </div>

                        // Caption and counter
                        <div class=css::caption>
                            <p class=css::counter>{move || position.get()}</p>
                            <h2 class=css::title>{title}</h2>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
