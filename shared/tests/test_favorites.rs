//! Integration tests for favorites.
use blogdesk_shared::{
    favorites::{FavoriteItem, FavoritesStore, FAVORITES_KEY},
    storage::{KeyValueStore, MemoryStore},
    theme::{load_dark_mode, save_dark_mode},
    Article,
};

fn article(id: u32, title: &str) -> Article {
    serde_json::from_value(serde_json::json!({
        "id": id.to_string(),
        "title": title,
        "content": "<p>text</p>",
        "imageUrl": "https://cdn.example/a.png",
        "createdAt": "2025-03-01T08:00:00.000Z",
        "category": { "id": "c1", "name": "Tech" }
    }))
    .expect("decode article")
}

#[test]
fn favorites_survive_a_reload() {
    let backend = MemoryStore::new();
    {
        let mut favorites = FavoritesStore::load(backend.clone());
        favorites.toggle(FavoriteItem::from(&article(2, "second")));
        favorites.toggle(FavoriteItem::from(&article(1, "first")));
    }

    let reloaded = FavoritesStore::load(backend);
    let titles: Vec<_> = reloaded.items().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
    assert!(reloaded.is_favorited("2"));
}

#[test]
fn reads_data_written_by_the_previous_site() {
    let backend = MemoryStore::new();
    backend
        .set(
            FAVORITES_KEY,
            r#"{"state":{"items":{"17":{"id":17,"title":"Old","content":"<p>x</p>","imageUrl":"","createdAt":"2024-10-10","category":"News"}}},"version":1}"#,
        )
        .expect("seed");

    let favorites = FavoritesStore::load(backend);
    let item = favorites.get("17").expect("migrated item");
    assert_eq!(item.id, "17");
    assert_eq!(item.category, "News");
}

#[test]
fn writes_versioned_envelope() {
    let backend = MemoryStore::new();
    let mut favorites = FavoritesStore::load(backend.clone());
    favorites.toggle(FavoriteItem::from(&article(3, "third")));

    let raw = backend.raw(FAVORITES_KEY).expect("persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["version"], 1);
    assert_eq!(value["state"]["items"]["3"]["title"], "third");
    assert_eq!(value["state"]["items"]["3"]["category"], "Tech");

    favorites.clear();
    let raw = backend.raw(FAVORITES_KEY).expect("persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["state"]["items"], serde_json::json!({}));
}

#[test]
fn dark_mode_shares_the_backend() {
    let backend = MemoryStore::new();
    save_dark_mode(&backend, true);
    FavoritesStore::load(backend.clone()).toggle(FavoriteItem::from(&article(1, "a")));
    assert!(load_dark_mode(&backend));
    assert_eq!(FavoritesStore::load(backend).len(), 1);
}
