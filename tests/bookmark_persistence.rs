//! Bookmarks persisted to disk and broadcast to open views.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use toolshelf::bookmarks::{BOOKMARKS_FILE_NAME, BookmarkBackend};
use toolshelf::catalog::{Category, Entry};
use toolshelf::{
	BookmarkStore, EventBus, FavoritesView, JsonFileBackend, RecordStore, SortKey,
};

fn records() -> Arc<RecordStore> {
	Arc::new(RecordStore::from_categories(vec![
		Category::new("chat", "Chat").with_entries(vec![
			Entry::new("Bard").with_slug("bard").with_date("2024-02-01"),
			Entry::new("Claude").with_slug("claude").with_date("2024-05-01"),
		]),
		Category::new("image", "Image").with_entries(vec![
			Entry::new("Canvas").with_slug("canvas").with_date("2024-03-01"),
		]),
	]))
}

#[test]
fn bookmarks_survive_a_new_store() {
	let dir = TempDir::new().expect("temp dir");
	let bus = Arc::new(EventBus::new());

	let mut store = BookmarkStore::new(JsonFileBackend::in_dir(dir.path()), Arc::clone(&bus));
	assert!(store.add("claude"));
	assert!(store.add("canvas"));
	assert!(!store.add("claude"), "adding twice is a no-op");
	drop(store);

	let reopened = BookmarkStore::new(JsonFileBackend::in_dir(dir.path()), bus);
	assert_eq!(reopened.count(), 2);
	assert!(reopened.is_bookmarked("canvas"));

	let raw = fs::read_to_string(dir.path().join(BOOKMARKS_FILE_NAME)).expect("file written");
	let slugs: Vec<String> = serde_json::from_str(&raw).expect("json array");
	assert_eq!(slugs, ["claude", "canvas"]);
}

#[test]
fn toggling_updates_open_favorites_views() {
	let dir = TempDir::new().expect("temp dir");
	let bus = Arc::new(EventBus::new());
	let records = records();

	let mut store = BookmarkStore::new(JsonFileBackend::in_dir(dir.path()), Arc::clone(&bus));
	let mut favorites = FavoritesView::new(Arc::clone(&records), &bus, store.bookmarks());
	favorites.set_sort(SortKey::DateNewest);
	assert!(favorites.is_empty());

	assert!(store.toggle("canvas"));
	assert!(store.toggle("claude"));
	assert!(favorites.pump());
	let titles: Vec<&str> = favorites
		.records()
		.iter()
		.map(|record| record.title.as_str())
		.collect();
	assert_eq!(titles, ["Claude", "Canvas"]);

	assert!(!store.toggle("claude"));
	assert!(favorites.pump());
	assert_eq!(favorites.count(), 1);
}

#[test]
fn unknown_slugs_are_kept_but_not_resolved() {
	let dir = TempDir::new().expect("temp dir");
	let bus = Arc::new(EventBus::new());
	let records = records();

	let mut store = BookmarkStore::new(JsonFileBackend::in_dir(dir.path()), bus);
	assert!(store.add("retired-tool"));
	assert!(store.add("bard"));

	assert_eq!(store.count(), 2);
	let resolved = store.bookmarked_records(&records);
	assert_eq!(resolved.len(), 1);
	assert_eq!(resolved[0].title, "Bard");
}

#[test]
fn corrupt_file_reads_as_empty() {
	let dir = TempDir::new().expect("temp dir");
	fs::write(dir.path().join(BOOKMARKS_FILE_NAME), "{not json").expect("seed file");

	let backend = JsonFileBackend::in_dir(dir.path());
	assert!(backend.load().is_err());

	let store = BookmarkStore::new(backend, Arc::new(EventBus::new()));
	assert_eq!(store.count(), 0);
}
