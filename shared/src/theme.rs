//! Dark-mode preference, stored as a JSON boolean under `isDarkMode`.

use crate::storage::{load_json, save_json, KeyValueStore};

/// Storage key of the preference.
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Unreadable or missing values mean light mode.
pub fn load_dark_mode<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match load_json::<bool, _>(store, DARK_MODE_KEY) {
        Ok(value) => value.unwrap_or(false),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable dark mode preference");
            false
        },
    }
}

/// Persist the preference; failures are logged and ignored.
pub fn save_dark_mode<S: KeyValueStore + ?Sized>(store: &S, dark: bool) {
    if let Err(err) = save_json(store, DARK_MODE_KEY, &dark) {
        tracing::warn!(error = %err, "failed to persist dark mode preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn round_trips_and_defaults_to_light() {
        let store = MemoryStore::new();
        assert!(!load_dark_mode(&store));
        save_dark_mode(&store, true);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(load_dark_mode(&store));

        store.set(DARK_MODE_KEY, "maybe").expect("set");
        assert!(!load_dark_mode(&store));
    }
}
