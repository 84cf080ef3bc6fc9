use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::{Record, RecordStore};
use crate::events::{DirectoryEvent, EventBus, EventKind, Subscription};
use crate::ordering::SortKey;
use crate::query::{
	LOAD_MORE_DELAY, Pagination, QueryOutcome, QueryParams, SCROLL_RESTORE_DELAY, run_query,
};
use crate::search::FuzzyIndex;
use crate::session::{DeferredQueue, NavigationContext, ViewSessionState};

/// Work a listing defers until its deadline passes.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewTask {
	RevealNextPage,
	RestoreScroll(f64),
}

const LISTING_EVENTS: [EventKind; 4] = [
	EventKind::SearchQueryChanged,
	EventKind::RecencyFilterChanged,
	EventKind::SaveViewState,
	EventKind::RestoreViewState,
];

/// Controller behind one paginated listing.
///
/// The view owns its bus subscription and its deferred tasks; dropping it
/// unsubscribes and discards anything still pending.
#[derive(Debug)]
pub struct ListingView {
	store: Arc<RecordStore>,
	index: Arc<FuzzyIndex>,
	params: QueryParams,
	pagination: Pagination,
	events: Subscription,
	deferred: DeferredQueue<ViewTask>,
	scroll_y: f64,
	reference_time: DateTime<Utc>,
}

impl ListingView {
	/// Build a view over `store` and subscribe it to listing events on `bus`.
	///
	/// `index` must be built from `store.records()`.
	#[must_use]
	pub fn new(
		store: Arc<RecordStore>,
		index: Arc<FuzzyIndex>,
		bus: &EventBus,
		params: QueryParams,
	) -> Self {
		let mut view = Self {
			store,
			index,
			params,
			pagination: Pagination::new(),
			events: bus.subscribe(&LISTING_EVENTS),
			deferred: DeferredQueue::new(),
			scroll_y: 0.0,
			reference_time: Utc::now(),
		};
		view.sync_window();
		view
	}

	/// Evaluate recency against `now` instead of the wall clock.
	#[must_use]
	pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
		self.reference_time = now;
		self
	}

	#[must_use]
	pub fn params(&self) -> &QueryParams {
		&self.params
	}

	#[must_use]
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	#[must_use]
	pub fn scroll_y(&self) -> f64 {
		self.scroll_y
	}

	pub fn set_scroll(&mut self, scroll_y: f64) {
		self.scroll_y = scroll_y;
	}

	#[must_use]
	pub fn pending_tasks(&self) -> usize {
		self.deferred.len()
	}

	/// Full pipeline result for the current inputs.
	#[must_use]
	pub fn outcome(&self) -> QueryOutcome<'_> {
		run_query(&self.store, &self.index, &self.params, self.reference_time)
	}

	/// Records currently revealed.
	#[must_use]
	pub fn visible(&self) -> Vec<&Record> {
		self.outcome().into_page()
	}

	pub fn set_filter(&mut self, filter: impl Into<String>) {
		let filter = filter.into();
		if self.params.filter != filter {
			self.params.filter = filter;
			self.reset_window();
		}
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		if self.params.search_query != query {
			self.params.search_query = query;
			self.reset_window();
		}
	}

	pub fn set_recent(&mut self, enabled: bool) {
		if self.params.recent_only != enabled {
			self.params.recent_only = enabled;
			self.reset_window();
		}
	}

	/// Change the order; the revealed window is kept.
	pub fn set_sort(&mut self, sort: SortKey, seed: Option<u32>) {
		self.params.sort = sort;
		self.params.seed = seed;
	}

	/// The end-of-list sentinel came into view.
	///
	/// Schedules the next page unless a load is running or everything is
	/// shown; returns whether a load was scheduled.
	pub fn on_sentinel_visible(&mut self, now: Instant) -> bool {
		let total = self.outcome().total();
		if !self.pagination.begin_load(total) {
			return false;
		}
		self.deferred.schedule(now + LOAD_MORE_DELAY, ViewTask::RevealNextPage);
		true
	}

	/// Run every deferred task due at `now` and return what ran.
	pub fn tick(&mut self, now: Instant) -> Vec<ViewTask> {
		let due = self.deferred.drain_due(now);
		for task in &due {
			match task {
				ViewTask::RevealNextPage => {
					let total = self.outcome().total();
					self.pagination.finish_load(total);
					self.sync_window();
				}
				ViewTask::RestoreScroll(scroll_y) => self.scroll_y = *scroll_y,
			}
		}
		due
	}

	/// Handle queued bus events, then run due tasks.
	///
	/// Returns how many events were handled.
	pub fn pump(&mut self, now: Instant, navigation: &mut NavigationContext) -> usize {
		let events = self.events.drain();
		for event in &events {
			match event {
				DirectoryEvent::SearchQueryChanged(query) => self.set_query(query.clone()),
				DirectoryEvent::RecencyFilterChanged(enabled) => self.set_recent(*enabled),
				DirectoryEvent::SaveViewState => navigation.stash(self.save_state()),
				DirectoryEvent::RestoreViewState => {
					self.restore_state(navigation, now);
				}
				DirectoryEvent::BookmarksChanged(_) => {}
			}
		}
		self.tick(now);
		events.len()
	}

	/// Snapshot for the navigation context.
	#[must_use]
	pub fn save_state(&self) -> ViewSessionState {
		ViewSessionState::new(
			self.params.filter.clone(),
			self.pagination.displayed_count(),
			self.scroll_y,
		)
	}

	/// Consume the stashed state and apply it if it belongs to this filter.
	///
	/// The window grows immediately; the scroll offset follows after
	/// [`SCROLL_RESTORE_DELAY`].
	pub fn restore_state(&mut self, navigation: &mut NavigationContext, now: Instant) -> bool {
		let Some(state) = navigation.take_matching(&self.params.filter) else {
			return false;
		};
		if self.pagination.apply_restored(state.displayed_count) {
			self.sync_window();
		}
		self.deferred
			.schedule(now + SCROLL_RESTORE_DELAY, ViewTask::RestoreScroll(state.scroll_y));
		debug!(filter = %state.filter, displayed = state.displayed_count, "restored view state");
		true
	}

	fn reset_window(&mut self) {
		self.pagination.reset();
		let dropped = self
			.deferred
			.cancel_where(|task| matches!(task, ViewTask::RevealNextPage));
		self.sync_window();
		debug!(dropped, "listing window reset");
	}

	fn sync_window(&mut self) {
		self.params.displayed_count = self.pagination.displayed_count();
	}
}
