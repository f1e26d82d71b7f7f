use frontpage::store::{BookmarkStore, ThemeStore, BOOKMARKS_FILE, THEME_FILE};
use frontpage::types::{Article, Theme};
use std::fs;
use tempfile::tempdir;

fn article(id: &str, title: &str) -> Article {
    Article {
        article_id: Some(id.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_bookmarks_start_empty_without_file() {
    let dir = tempdir().expect("tempdir");
    let store = BookmarkStore::load(dir.path().join(BOOKMARKS_FILE));

    assert!(store.is_empty());
    assert!(!store.is_bookmarked("anything"));
}

#[test]
fn test_bookmark_add_and_duplicate() {
    let dir = tempdir().expect("tempdir");
    let mut store = BookmarkStore::load(dir.path().join(BOOKMARKS_FILE));
    let story = article("a1", "First Story");

    assert!(store.add(&story).expect("add"));
    assert!(!store.add(&story).expect("second add"), "duplicate add should be a no-op");
    assert_eq!(store.len(), 1);
    assert!(store.is_bookmarked("a1"));
}

#[test]
fn test_bookmarks_persist_across_reload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(BOOKMARKS_FILE);

    {
        let mut store = BookmarkStore::load(&path);
        store.add(&article("a1", "First Story")).expect("add");
        store.add(&article("a2", "Second Story")).expect("add");
    }

    let reloaded = BookmarkStore::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_bookmarked("a1"));
    assert!(reloaded.is_bookmarked("a2"));
    assert!(reloaded.bookmarks().iter().all(|saved| {
        saved.bookmarked_at.timestamp() > 0
    }));
}

#[test]
fn test_bookmark_toggle_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(BOOKMARKS_FILE);
    let story = article("a1", "Toggled Story");

    let mut store = BookmarkStore::load(&path);
    assert!(store.toggle(&story).expect("toggle on"));
    assert!(BookmarkStore::load(&path).is_bookmarked("a1"));

    assert!(!store.toggle(&story).expect("toggle off"));
    assert!(!BookmarkStore::load(&path).is_bookmarked("a1"));
}

#[test]
fn test_bookmark_remove_and_clear() {
    let dir = tempdir().expect("tempdir");
    let mut store = BookmarkStore::load(dir.path().join(BOOKMARKS_FILE));

    store.add(&article("a1", "One")).expect("add");
    store.add(&article("a2", "Two")).expect("add");

    assert!(store.remove("a1").expect("remove"));
    assert!(!store.remove("a1").expect("remove again"));
    assert_eq!(store.len(), 1);

    store.clear().expect("clear");
    assert!(store.is_empty());
}

#[test]
fn test_bookmark_identity_falls_back_to_title_slug() {
    let dir = tempdir().expect("tempdir");
    let mut store = BookmarkStore::load(dir.path().join(BOOKMARKS_FILE));

    let no_id = Article {
        title: Some("Markets Rally Again".to_string()),
        ..Default::default()
    };
    store.add(&no_id).expect("add");
    assert!(store.is_bookmarked("markets-rally-again"));
}

#[test]
fn test_corrupt_bookmark_file_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(BOOKMARKS_FILE);
    fs::write(&path, "{ not json").expect("write corrupt file");

    let store = BookmarkStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn test_theme_defaults_to_light() {
    let dir = tempdir().expect("tempdir");
    let store = ThemeStore::load(dir.path().join(THEME_FILE));
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn test_theme_toggle_persists() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(THEME_FILE);

    let mut store = ThemeStore::load(&path);
    assert_eq!(store.toggle().expect("toggle"), Theme::Dark);

    let reloaded = ThemeStore::load(&path);
    assert_eq!(reloaded.theme(), Theme::Dark);

    let mut store = ThemeStore::load(&path);
    assert_eq!(store.toggle().expect("toggle back"), Theme::Light);
}

#[test]
fn test_corrupt_theme_file_defaults_to_light() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(THEME_FILE);
    fs::write(&path, "midnight").expect("write corrupt file");

    let store = ThemeStore::load(&path);
    assert_eq!(store.theme(), Theme::Light);
}
