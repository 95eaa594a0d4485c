//! UI Components
//!
//! Leptos components for the documents page.

mod carousel;
mod document_card;
mod signature_field;
mod status_message;

pub use carousel::Carousel;
pub use document_card::DocumentCarousel;
pub use signature_field::SignatureField;
pub use status_message::{StatusKind, StatusMessage};
