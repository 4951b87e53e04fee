//! Client-only favorites.
//!
//! Favorites are denormalised snapshots keyed by article id and persisted to
//! local storage after every mutation. They are never synced with the
//! server, so titles or content can go stale when an article changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    id_from_any,
    storage::{load_json, save_json, KeyValueStore},
    Article,
};

/// Storage key of the favorites envelope.
pub const FAVORITES_KEY: &str = "favorites-v1";
const FAVORITES_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Snapshot of an article taken when it was favorited.
pub struct FavoriteItem {
    /// Article id.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub image_url: String,
    /// Article creation time as sent by the server.
    #[serde(default)]
    pub created_at: String,
    /// Category name at the time the article was favorited.
    #[serde(default)]
    pub category: String,
}

impl From<&Article> for FavoriteItem {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            content: article.content.clone(),
            image_url: article.image_url.clone(),
            created_at: article.created_at.clone(),
            category: article.category_name().unwrap_or_default().to_string(),
        }
    }
}

/// On-disk envelope, `{"state":{"items":{..}},"version":1}`, which is also
/// what earlier builds of the site wrote.
#[derive(Serialize, Deserialize)]
struct Envelope {
    state: EnvelopeState,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct EnvelopeState {
    #[serde(default)]
    items: BTreeMap<String, FavoriteItem>,
}

/// Favorites keyed by article id, written through to `backend`.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    items: BTreeMap<String, FavoriteItem>,
    backend: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load from `backend`; missing or unreadable data starts an empty set.
    pub fn load(backend: S) -> Self {
        let items = match load_json::<Envelope, _>(&backend, FAVORITES_KEY) {
            Ok(Some(envelope)) => envelope.state.items,
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable favorites");
                BTreeMap::new()
            },
        };
        Self {
            items,
            backend,
        }
    }

    /// Whether article `id` is a favorite.
    pub fn is_favorited(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Snapshot stored for `id`.
    pub fn get(&self, id: &str) -> Option<&FavoriteItem> {
        self.items.get(id)
    }

    /// Favorites in id order.
    pub fn items(&self) -> impl Iterator<Item = &FavoriteItem> {
        self.items.values()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add when absent, remove when present. Returns whether the item is a
    /// favorite afterwards.
    pub fn toggle(&mut self, item: FavoriteItem) -> bool {
        let now_favorited = if self.items.remove(&item.id).is_some() {
            false
        } else {
            self.items.insert(item.id.clone(), item);
            true
        };
        self.persist();
        now_favorited
    }

    /// Remove `id`; returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.items.remove(id).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// Remove every favorite.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        let envelope = Envelope {
            state: EnvelopeState {
                items: self.items.clone(),
            },
            version: FAVORITES_VERSION,
        };
        if let Err(err) = save_json(&self.backend, FAVORITES_KEY, &envelope) {
            tracing::warn!(error = %err, "failed to persist favorites");
        }
    }
}

impl<S> PartialEq for FavoritesStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: &str, title: &str) -> FavoriteItem {
        FavoriteItem {
            id: id.into(),
            title: title.into(),
            content: "<p>body</p>".into(),
            image_url: String::new(),
            created_at: "2025-01-01T00:00:00Z".into(),
            category: "News".into(),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        assert!(favorites.toggle(item("1", "first")));
        assert!(favorites.is_favorited("1"));
        assert_eq!(favorites.get("1").map(|i| i.title.as_str()), Some("first"));

        assert!(!favorites.toggle(item("1", "renamed")));
        assert!(!favorites.is_favorited("1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let backend = MemoryStore::new();
        let mut favorites = FavoritesStore::load(backend.clone());
        favorites.toggle(item("1", "a"));
        assert!(backend.raw(FAVORITES_KEY).is_some_and(|raw| raw.contains("\"1\"")));
        favorites.remove("1");
        assert!(backend.raw(FAVORITES_KEY).is_some_and(|raw| !raw.contains("\"a\"")));
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        let backend = MemoryStore::new();
        backend.set(FAVORITES_KEY, "[oops").expect("set");
        assert!(FavoritesStore::load(backend).is_empty());
    }

    #[test]
    fn snapshot_from_article_takes_category_name() {
        let article: Article = serde_json::from_str(
            r#"{"id":5,"title":"T","content":"C","imageUrl":"u","createdAt":"d","category":{"id":"9","name":"Tech"}}"#,
        )
        .expect("decode");
        let snapshot = FavoriteItem::from(&article);
        assert_eq!(snapshot.id, "5");
        assert_eq!(snapshot.category, "Tech");
        assert_eq!(snapshot.image_url, "u");
    }
}
