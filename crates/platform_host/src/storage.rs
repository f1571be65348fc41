//! Key/value storage contracts and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for string key/value storage.
///
/// Implementations are synchronous by contract; the reference backing store
/// (browser `localStorage`) blocks on access, and everything persisted through
/// this trait is a handful of short strings.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Deletes the value stored under `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests: reads always miss.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string, shared by clone.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_round_trip_and_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        store_obj.set("shell.key", "value");
        assert_eq!(store_obj.get("shell.key"), Some("value".to_string()));
        store_obj.remove("shell.key");
        assert_eq!(store_obj.get("shell.key"), None);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryKeyValueStore::default();
        let alias = store.clone();

        store.set("shared", "1");
        assert_eq!(alias.get("shared"), Some("1".to_string()));
    }

    #[test]
    fn noop_store_is_empty_and_silent() {
        let store = NoopKeyValueStore;
        store.set("k", "v");
        assert_eq!(store.get("k"), None);
        store.remove("k");
    }
}
