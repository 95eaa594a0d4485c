//! Signature Store
//!
//! Holds the saved signature image and mirrors it to persistent storage.
//! Every operation is total: failures are logged and leave state as it was.

use leptos_signature::SignaturePad;

use crate::storage::KeyValueStore;

/// Freehand drawing widget as seen by the store
pub trait DrawingSurface {
    /// True when no stroke has been drawn
    fn is_empty(&self) -> bool;
    /// Discard any drawn strokes
    fn clear(&mut self);
    /// Encoded image (data URI) of the drawn area, if it can be produced
    fn export_image(&self) -> Option<String>;
}

impl DrawingSurface for SignaturePad {
    fn is_empty(&self) -> bool {
        SignaturePad::is_empty(self)
    }

    fn clear(&mut self) {
        SignaturePad::clear(self);
    }

    fn export_image(&self) -> Option<String> {
        match self.to_trimmed_data_url() {
            Ok(url) => url,
            Err(e) => {
                log::warn!("signature export failed: {:?}", e);
                None
            }
        }
    }
}

/// Image to save from `surface`: `None` when nothing is drawn or the export
/// failed.
pub fn exported_image<S: DrawingSurface + ?Sized>(surface: &S) -> Option<String> {
    if surface.is_empty() {
        return None;
    }
    surface.export_image()
}

/// What the signature slot should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMode<'a> {
    /// Interactive drawing surface
    Drawing,
    /// Saved image as a data URI
    Display(&'a str),
}

#[derive(Debug, Clone)]
pub struct SignatureStore<K> {
    storage: K,
    key: String,
    image: Option<String>,
}

impl<K> SignatureStore<K> {
    /// Store that has not read anything from `storage`
    #[cfg(test)]
    pub fn unloaded(storage: K, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), image: None }
    }
}

impl<K: KeyValueStore> SignatureStore<K> {
    /// Restore whatever was saved under `key`
    pub fn load(storage: K, key: impl Into<String>) -> Self {
        let key = key.into();
        let image = storage.get(&key).filter(|value| !value.is_empty());
        log::debug!("signature store ready, saved image present: {}", image.is_some());
        Self { storage, key, image }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn mode(&self) -> SignatureMode<'_> {
        match self.image() {
            Some(image) => SignatureMode::Display(image),
            None => SignatureMode::Drawing,
        }
    }

    /// Reset the surface and forget the saved image everywhere
    pub fn clear<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.image = None;
        self.storage.remove(&self.key);
    }

    /// Persist an image produced by [`exported_image`]
    pub fn save_image(&mut self, image: String) {
        self.storage.set(&self.key, &image);
        self.image = Some(image);
        log::info!("signature saved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SIGNATURE_KEY;
    use crate::storage::MemoryStore;

    /// Scripted drawing surface
    #[derive(Default)]
    struct FakeSurface {
        strokes: usize,
        clears: usize,
        image: Option<String>,
    }

    impl FakeSurface {
        fn drawn(image: &str) -> Self {
            Self { strokes: 1, clears: 0, image: Some(image.to_string()) }
        }
    }

    impl DrawingSurface for FakeSurface {
        fn is_empty(&self) -> bool {
            self.strokes == 0
        }

        fn clear(&mut self) {
            self.strokes = 0;
            self.clears += 1;
        }

        fn export_image(&self) -> Option<String> {
            self.image.clone()
        }
    }

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    /// Save button: export, then persist. False when nothing was saved.
    fn save<K: KeyValueStore>(store: &mut SignatureStore<K>, surface: &FakeSurface) -> bool {
        match exported_image(surface) {
            Some(image) => {
                store.save_image(image);
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_starts_in_drawing_mode_without_saved_value() {
        let store = SignatureStore::load(MemoryStore::default(), SIGNATURE_KEY);
        assert_eq!(store.mode(), SignatureMode::Drawing);
        assert_eq!(store.image(), None);
    }

    #[test]
    fn test_empty_saved_value_means_drawing() {
        let storage = MemoryStore::default();
        storage.set(SIGNATURE_KEY, "");
        let store = SignatureStore::load(storage, SIGNATURE_KEY);
        assert_eq!(store.mode(), SignatureMode::Drawing);
    }

    #[test]
    fn test_save_on_empty_surface_is_noop() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);

        assert!(!save(&mut store, &FakeSurface::default()));
        assert_eq!(store.image(), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn test_save_on_empty_surface_keeps_previous_signature() {
        let storage = MemoryStore::default();
        storage.set(SIGNATURE_KEY, PNG);
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);

        assert!(!save(&mut store, &FakeSurface::default()));
        assert_eq!(store.image(), Some(PNG));
        assert_eq!(storage.get(SIGNATURE_KEY).as_deref(), Some(PNG));
    }

    #[test]
    fn test_save_persists_and_displays() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);

        assert!(save(&mut store, &FakeSurface::drawn(PNG)));
        assert_eq!(store.mode(), SignatureMode::Display(PNG));
        assert_eq!(storage.get(SIGNATURE_KEY).as_deref(), Some(PNG));
    }

    #[test]
    fn test_save_is_last_write_wins() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);

        save(&mut store, &FakeSurface::drawn("data:image/png;base64,first"));
        save(&mut store, &FakeSurface::drawn("data:image/png;base64,second"));

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(SIGNATURE_KEY).as_deref(), Some("data:image/png;base64,second"));
    }

    #[test]
    fn test_failed_export_changes_nothing() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);
        let surface = FakeSurface { strokes: 3, clears: 0, image: None };

        assert!(!save(&mut store, &surface));
        assert_eq!(store.mode(), SignatureMode::Drawing);
        assert!(!storage.contains(SIGNATURE_KEY));
    }

    #[test]
    fn test_save_then_clear_removes_key() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);
        let mut surface = FakeSurface::drawn(PNG);

        save(&mut store, &surface);
        store.clear(&mut surface);

        assert!(!storage.contains(SIGNATURE_KEY));
        assert_eq!(store.mode(), SignatureMode::Drawing);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_clear_always_resets_surface() {
        let mut store = SignatureStore::load(MemoryStore::default(), SIGNATURE_KEY);
        let mut surface = FakeSurface::default();

        store.clear(&mut surface);
        store.clear(&mut surface);

        assert_eq!(surface.clears, 2);
        assert_eq!(store.mode(), SignatureMode::Drawing);
    }

    #[test]
    fn test_saved_signature_survives_reload() {
        let storage = MemoryStore::default();
        let mut store = SignatureStore::load(storage.clone(), SIGNATURE_KEY);
        save(&mut store, &FakeSurface::drawn(PNG));

        let reloaded = SignatureStore::load(storage, SIGNATURE_KEY);
        assert_eq!(reloaded.mode(), SignatureMode::Display(PNG));
    }
}
