//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the carousel only
//! re-renders on loader changes, the signature slot only on signature changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::loader::{LoadTicket, RecordLoader};
use crate::models::{Record, ViewState};
use crate::signature::{exported_image, DrawingSurface, SignatureMode, SignatureStore};
use crate::storage::BrowserStorage;

/// Page-level state owned for the whole session
#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Identifier tracking and view state
    pub loader: RecordLoader,
    /// Saved signature, mirrored to local storage
    pub signature: SignatureStore<BrowserStorage>,
}

impl PageState {
    pub fn new(fallback_message: &str, signature_key: &str) -> Self {
        Self {
            loader: RecordLoader::new(fallback_message),
            signature: SignatureStore::load(BrowserStorage, signature_key),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current view state (tracked)
pub fn store_view_state(store: &PageStore) -> ViewState {
    store.loader().read().state().clone()
}

/// Feed a new identifier to the loader; returns a ticket if a fetch is due
pub fn store_begin_load(store: &PageStore, id: Option<String>) -> Option<LoadTicket> {
    let id = id.filter(|id| !id.is_empty());
    // Unchanged identifier: skip the write so the carousel is not rebuilt
    if store.loader().read_untracked().identifier() == id.as_deref() {
        return None;
    }
    store.loader().write().on_identifier_change(id)
}

/// Apply a fetch outcome (dropped if stale)
pub fn store_finish_load(store: &PageStore, ticket: LoadTicket, outcome: Result<Record, LoadError>) {
    // Stale ticket: skip the write so subscribers are not woken
    if !store.loader().read_untracked().is_current(&ticket) {
        log::debug!("ignoring stale response for '{}'", ticket.identifier());
        return;
    }
    store.loader().write().complete(ticket, outcome);
}

/// Saved signature image (tracked)
pub fn store_signature_image(store: &PageStore) -> Option<String> {
    match store.signature().read().mode() {
        SignatureMode::Display(image) => Some(image.to_string()),
        SignatureMode::Drawing => None,
    }
}

pub fn store_save_signature<S: DrawingSurface + ?Sized>(store: &PageStore, surface: &S) {
    // Nothing to save: skip the write so the slot is not re-rendered
    let Some(image) = exported_image(surface) else {
        return;
    };
    store.signature().write().save_image(image);
}

pub fn store_clear_signature<S: DrawingSurface + ?Sized>(store: &PageStore, surface: &mut S) {
    store.signature().write().clear(surface);
}
