use std::sync::Arc;

use crate::bookmarks::{BookmarkSet, resolve_bookmarks};
use crate::catalog::{Record, RecordStore};
use crate::events::{DirectoryEvent, EventBus, EventKind, Subscription};
use crate::ordering::{SortKey, sort_records};

/// Bookmarked records, kept in sync through [`DirectoryEvent::BookmarksChanged`].
#[derive(Debug)]
pub struct FavoritesView {
	store: Arc<RecordStore>,
	bookmarks: BookmarkSet,
	sort: SortKey,
	events: Subscription,
}

impl FavoritesView {
	/// Start from `initial` and follow later changes published on `bus`.
	#[must_use]
	pub fn new(store: Arc<RecordStore>, bus: &EventBus, initial: BookmarkSet) -> Self {
		Self {
			store,
			bookmarks: initial,
			sort: SortKey::NameAsc,
			events: bus.subscribe(&[EventKind::BookmarksChanged]),
		}
	}

	#[must_use]
	pub fn sort(&self) -> SortKey {
		self.sort
	}

	/// Random order is not offered here and maps to name order.
	pub fn set_sort(&mut self, sort: SortKey) {
		self.sort = sort.deterministic();
	}

	/// Adopt the newest broadcast set; returns whether anything changed.
	pub fn pump(&mut self) -> bool {
		let latest = self
			.events
			.drain()
			.into_iter()
			.filter_map(|event| match event {
				DirectoryEvent::BookmarksChanged(set) => Some(set),
				_ => None,
			})
			.last();
		match latest {
			Some(set) if set != self.bookmarks => {
				self.bookmarks = set;
				true
			}
			_ => false,
		}
	}

	/// Resolved, sorted records; dangling slugs are left out.
	#[must_use]
	pub fn records(&self) -> Vec<&Record> {
		let resolved = resolve_bookmarks(&self.bookmarks, &self.store);
		sort_records(&resolved, self.sort)
	}

	/// Number of bookmarks that resolve to a record.
	#[must_use]
	pub fn count(&self) -> usize {
		resolve_bookmarks(&self.bookmarks, &self.store).len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}
}
