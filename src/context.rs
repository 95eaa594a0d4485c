//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_signature::SignaturePad;

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// The one signature pad on the page (passport card)
    pub pad: SignaturePad,
}

impl PageContext {
    pub fn new(pad: SignaturePad) -> Self {
        Self { pad }
    }
}

/// Get the page context
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
