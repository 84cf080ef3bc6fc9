//! Typed in-process publish/subscribe between views.
//!
//! Each subscriber owns the receiving half of an [`mpsc`] channel and names
//! the [`EventKind`]s it cares about. Publishing enqueues the event on every
//! interested channel synchronously; subscribers drain their receiver when
//! they next run. Dropping a [`Subscription`] unsubscribes it: the bus prunes
//! disconnected channels on the next publish.
//!
//! [`mpsc`]: std::sync::mpsc

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::bookmarks::BookmarkSet;

/// Signals exchanged between the search box, filter controls, listings and
/// bookmark buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEvent {
	/// The persisted bookmark set changed; carries the set as written.
	BookmarksChanged(BookmarkSet),
	/// The free-text query changed.
	SearchQueryChanged(String),
	/// The "recently added only" toggle changed.
	RecencyFilterChanged(bool),
	/// The user is navigating away from a listing.
	SaveViewState,
	/// The user returned to a listing.
	RestoreViewState,
}

impl DirectoryEvent {
	#[must_use]
	pub fn kind(&self) -> EventKind {
		match self {
			DirectoryEvent::BookmarksChanged(_) => EventKind::BookmarksChanged,
			DirectoryEvent::SearchQueryChanged(_) => EventKind::SearchQueryChanged,
			DirectoryEvent::RecencyFilterChanged(_) => EventKind::RecencyFilterChanged,
			DirectoryEvent::SaveViewState => EventKind::SaveViewState,
			DirectoryEvent::RestoreViewState => EventKind::RestoreViewState,
		}
	}
}

/// Payload-free discriminant of [`DirectoryEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	BookmarksChanged,
	SearchQueryChanged,
	RecencyFilterChanged,
	SaveViewState,
	RestoreViewState,
}

impl EventKind {
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			EventKind::BookmarksChanged => "bookmarks-changed",
			EventKind::SearchQueryChanged => "search-query-changed",
			EventKind::RecencyFilterChanged => "recency-filter-changed",
			EventKind::SaveViewState => "save-view-state",
			EventKind::RestoreViewState => "restore-view-state",
		}
	}

	#[must_use]
	pub const fn all() -> [EventKind; 5] {
		[
			EventKind::BookmarksChanged,
			EventKind::SearchQueryChanged,
			EventKind::RecencyFilterChanged,
			EventKind::SaveViewState,
			EventKind::RestoreViewState,
		]
	}
}

struct Subscriber {
	kinds: Vec<EventKind>,
	tx: Sender<DirectoryEvent>,
}

/// Fan-out hub for [`DirectoryEvent`]s.
#[derive(Default)]
pub struct EventBus {
	subscribers: Mutex<Vec<Subscriber>>,
}

impl EventBus {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register interest in `kinds` and return the receiving end.
	#[must_use]
	pub fn subscribe(&self, kinds: &[EventKind]) -> Subscription {
		let (tx, rx) = mpsc::channel();
		self.lock().push(Subscriber {
			kinds: kinds.to_vec(),
			tx,
		});
		Subscription { rx }
	}

	/// Deliver `event` to every live subscriber interested in its kind.
	///
	/// Returns how many subscribers received it.
	pub fn publish(&self, event: DirectoryEvent) -> usize {
		let kind = event.kind();
		let mut subscribers = self.lock();
		let mut delivered = 0;
		subscribers.retain(|subscriber| {
			if !subscriber.kinds.contains(&kind) {
				return true;
			}
			match subscriber.tx.send(event.clone()) {
				Ok(()) => {
					delivered += 1;
					true
				}
				Err(_) => false,
			}
		});
		trace!(event = kind.id(), delivered, "published event");
		delivered
	}

	/// Number of registered subscribers, including ones not yet pruned.
	#[must_use]
	pub fn subscriber_count(&self) -> usize {
		self.lock().len()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Subscriber>> {
		self.subscribers
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}
}

impl std::fmt::Debug for EventBus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventBus")
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

/// Receiving side of an [`EventBus`] registration.
#[derive(Debug)]
pub struct Subscription {
	rx: Receiver<DirectoryEvent>,
}

impl Subscription {
	/// Next queued event, if any, without blocking.
	pub fn try_next(&self) -> Option<DirectoryEvent> {
		match self.rx.try_recv() {
			Ok(event) => Some(event),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	/// Every queued event, oldest first.
	pub fn drain(&self) -> Vec<DirectoryEvent> {
		self.rx.try_iter().collect()
	}
}
