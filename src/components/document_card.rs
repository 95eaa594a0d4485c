//! Document Card Components
//!
//! Renders the cards built by `documents::render_card` inside the carousel.

use chrono::Local;
use leptos::prelude::*;

use super::{Carousel, SignatureField};
use crate::documents::{render_card, Card, DOCUMENTS, PHOTO_PLACEHOLDER, SIGNATURE_LABEL};
use crate::models::Record;
use crate::store::{store_signature_image, use_page_store};

/// All documents for one record
#[component]
pub fn DocumentCarousel(record: Record) -> impl IntoView {
    view! {
        <Carousel count=DOCUMENTS.len()>
            {(0..DOCUMENTS.len())
                .map(|index| {
                    view! {
                        <div class="slide">
                            <DocumentCard index=index record=record.clone() />
                        </div>
                    }
                })
                .collect_view()}
        </Carousel>
    }
}

/// One card; re-rendered when the saved signature changes
#[component]
pub fn DocumentCard(index: usize, record: Record) -> impl IntoView {
    let store = use_page_store();

    move || {
        let signature = store_signature_image(&store);
        render_card(index, &record, signature.as_deref(), &Local).map(|card| view! { <CardView card=card /> })
    }
}

#[component]
fn CardView(card: Card) -> impl IntoView {
    let Card { title, photo, fields, signature, footer } = card;

    let photo = match photo {
        Some(src) => view! { <img src=src alt="Фото" class="photo" /> }.into_any(),
        None => view! { <span class="photo-placeholder">{PHOTO_PLACEHOLDER}</span> }.into_any(),
    };

    view! {
        <div class="document-card">
            <h2 class="document-title">{title}</h2>
            <div class="document-photo">{photo}</div>
            <div class="document-fields">
                {fields
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label class="field-label">{field.label}</label>
                            <input class="field-input" value=field.value readonly=true />
                        }
                    })
                    .collect_view()}
                {signature
                    .map(|slot| {
                        view! {
                            <label class="field-label">{SIGNATURE_LABEL}</label>
                            <SignatureField slot=slot />
                        }
                    })}
            </div>
            <div class="document-footer">{footer}</div>
        </div>
    }
}
