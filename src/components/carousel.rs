//! Carousel Component
//!
//! One slide at a time, arrows and dots, wrapping at both ends.
//! The slide transition itself is a CSS transform (see `.carousel-track`).

use leptos::prelude::*;

use crate::carousel::{CarouselState, PagedContainer};

/// Paged container around `count` slides passed as children
#[component]
pub fn Carousel(count: usize, children: Children) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(count));
    let dots = state.with_untracked(|s| s.item_count());

    let track_style = move || {
        let active = state.with(|s| s.active_index());
        format!("transform: translateX(-{}%);", active * 100)
    };

    view! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style=track_style>
                    {children()}
                </div>
            </div>
            <button class="carousel-arrow prev" on:click=move |_| state.update(PagedContainer::go_prev)>
                "‹"
            </button>
            <button class="carousel-arrow next" on:click=move |_| state.update(PagedContainer::go_next)>
                "›"
            </button>
            <ul class="carousel-dots">
                {(0..dots)
                    .map(|index| {
                        view! {
                            <li class:active=move || state.with(|s| s.active_index() == index)>
                                <button on:click=move |_| state.update(|s| s.go_to(index))>
                                    {index + 1}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
