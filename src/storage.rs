//! Key-Value Storage
//!
//! Persistent storage seam used by the signature store.

/// Minimal string key-value capability. Writes never fail from the caller's
/// point of view; implementations log and carry on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("local storage unavailable, '{}' not persisted", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to persist '{}': {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("failed to remove '{}': {:?}", key, e);
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
