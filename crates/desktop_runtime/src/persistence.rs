//! Storage adapter selection for the shell's persisted identity.
//!
//! On the web the identity lives in `localStorage`; everywhere else (tests,
//! native tooling) an in-memory store keeps the same behavior without a
//! browser.

use std::rc::Rc;

use platform_host::KeyValueStore;
#[cfg(not(target_arch = "wasm32"))]
use platform_host::MemoryKeyValueStore;
#[cfg(target_arch = "wasm32")]
use platform_host::NoopKeyValueStore;

/// Returns the identity store for the current target.
pub fn default_identity_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match local_storage() {
            Some(storage) => Rc::new(LocalStorageStore { storage }),
            None => {
                // Storage can be unavailable in private browsing or sandboxed
                // frames; the shell then runs as a fresh session every load.
                leptos::logging::warn!("localStorage unavailable; identity will not persist");
                Rc::new(NoopKeyValueStore)
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryKeyValueStore::default())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
/// [`KeyValueStore`] backed by the browser's `localStorage`.
struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
