use std::sync::Arc;

use tracing::{debug, warn};

use super::backend::BookmarkBackend;
use super::set::BookmarkSet;
use crate::catalog::{Record, RecordStore};
use crate::events::{DirectoryEvent, EventBus};

/// Persisted bookmark set with change notifications.
///
/// Every read goes back to the backend, so independent stores over the same
/// storage stay consistent. Successful mutations persist the whole set and
/// then publish [`DirectoryEvent::BookmarksChanged`] on the injected bus.
#[derive(Debug)]
pub struct BookmarkStore<B> {
	backend: B,
	bus: Arc<EventBus>,
}

impl<B: BookmarkBackend> BookmarkStore<B> {
	#[must_use]
	pub fn new(backend: B, bus: Arc<EventBus>) -> Self {
		Self { backend, bus }
	}

	#[must_use]
	pub fn backend(&self) -> &B {
		&self.backend
	}

	#[must_use]
	pub fn bus(&self) -> &Arc<EventBus> {
		&self.bus
	}

	/// Current set; unreadable or corrupt storage reads as empty.
	#[must_use]
	pub fn bookmarks(&self) -> BookmarkSet {
		match self.backend.load() {
			Ok(set) => set,
			Err(err) => {
				warn!(error = %err, "failed to read bookmarks; treating as empty");
				BookmarkSet::new()
			}
		}
	}

	#[must_use]
	pub fn count(&self) -> usize {
		self.bookmarks().len()
	}

	#[must_use]
	pub fn is_bookmarked(&self, slug: &str) -> bool {
		self.bookmarks().contains(slug)
	}

	/// Bookmark `slug`. Returns false for empty or already-present slugs.
	pub fn add(&mut self, slug: &str) -> bool {
		if slug.is_empty() {
			return false;
		}
		let mut set = self.bookmarks();
		if !set.insert(slug) {
			return false;
		}
		self.commit(set)
	}

	/// Drop `slug`. Returns false for empty or absent slugs.
	pub fn remove(&mut self, slug: &str) -> bool {
		if slug.is_empty() {
			return false;
		}
		let mut set = self.bookmarks();
		if !set.remove(slug) {
			return false;
		}
		self.commit(set)
	}

	/// Flip membership of `slug` and return the resulting state.
	pub fn toggle(&mut self, slug: &str) -> bool {
		if self.is_bookmarked(slug) {
			let removed = self.remove(slug);
			!removed
		} else {
			self.add(slug)
		}
	}

	/// Resolve bookmarks against `store`, in dataset order.
	///
	/// Slugs that no longer exist are skipped.
	#[must_use]
	pub fn bookmarked_records<'a>(&self, store: &'a RecordStore) -> Vec<&'a Record> {
		resolve_bookmarks(&self.bookmarks(), store)
	}

	fn commit(&mut self, set: BookmarkSet) -> bool {
		if let Err(err) = self.backend.save(&set) {
			warn!(error = %err, "failed to persist bookmarks");
			return false;
		}
		debug!(count = set.len(), "bookmarks persisted");
		self.bus.publish(DirectoryEvent::BookmarksChanged(set));
		true
	}
}

/// Join `set` back to full records in dataset order, dropping dangling slugs.
#[must_use]
pub fn resolve_bookmarks<'a>(set: &BookmarkSet, store: &'a RecordStore) -> Vec<&'a Record> {
	store
		.records()
		.iter()
		.filter(|record| record.slug().is_some_and(|slug| set.contains(slug)))
		.collect()
}
