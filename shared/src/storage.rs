//! Key/value persistence seam. The browser build backs it with
//! `localStorage`; tests use [`MemoryStore`].

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// String store keyed by name.
pub trait KeyValueStore {
    /// Stored value, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string())),
    }
}

/// Encode `value` as JSON and store it.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Rejected(e.to_string()))?;
    store.set(key, &raw)
}

/// In-memory store. Clones share the same map, which lets tests model a
/// page reload by building a second reader over the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored text under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_helpers_round_trip_and_flag_corruption() {
        let store = MemoryStore::new();
        save_json(&store, "k", &vec![1, 2, 3]).expect("save");
        assert_eq!(load_json::<Vec<u32>, _>(&store, "k").expect("load"), Some(vec![1, 2, 3]));
        assert_eq!(load_json::<Vec<u32>, _>(&store, "missing").expect("load"), None);

        store.set("k", "{not json").expect("set");
        assert!(matches!(
            load_json::<Vec<u32>, _>(&store, "k"),
            Err(StorageError::Corrupt(_))
        ));
    }
}
