//! Signature Field Component
//!
//! Saved signature as an image, or the drawing pad with clear/save buttons.

use leptos::prelude::*;
use leptos_signature::SignatureCanvas;

use crate::context::use_page_context;
use crate::documents::{SignatureSlot, SIGNATURE_LABEL};
use crate::store::{store_clear_signature, store_save_signature, use_page_store};

#[component]
pub fn SignatureField(slot: SignatureSlot) -> impl IntoView {
    let store = use_page_store();
    let pad = use_page_context().pad;

    match slot {
        SignatureSlot::Image(src) => view! {
            <img src=src alt=SIGNATURE_LABEL class="signature-image" />
        }
        .into_any(),
        SignatureSlot::Pad => view! {
            <SignatureCanvas pad=pad width=300 height=100 class="signature-pad" />
            <div class="signature-actions">
                <button
                    class="signature-clear"
                    on:click=move |_| {
                        let mut surface = pad;
                        store_clear_signature(&store, &mut surface);
                    }
                >
                    "Очистити"
                </button>
                <button class="signature-save" on:click=move |_| store_save_signature(&store, &pad)>
                    "Зберегти"
                </button>
            </div>
        }
        .into_any(),
    }
}
