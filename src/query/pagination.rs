use std::time::Duration;

/// Records revealed per increment.
pub const PAGE_SIZE: usize = 32;

/// Delay between the sentinel becoming visible and the next page appearing.
pub const LOAD_MORE_DELAY: Duration = Duration::from_millis(300);

/// Delay before a restored scroll offset is applied.
pub const SCROLL_RESTORE_DELAY: Duration = Duration::from_millis(50);

/// Revealed-window state for incremental loading.
///
/// A load is two-phase: [`Pagination::begin_load`] marks the window busy, and
/// [`Pagination::finish_load`] reveals one more page once the delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	displayed_count: usize,
	loading: bool,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			displayed_count: PAGE_SIZE,
			loading: false,
		}
	}
}

impl Pagination {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn displayed_count(&self) -> usize {
		self.displayed_count
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn has_more(&self, total: usize) -> bool {
		self.displayed_count < total
	}

	/// Back to a single page with no load in flight.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Start revealing another page.
	///
	/// Returns false, changing nothing, when a load is already running or
	/// every record of `total` is already shown.
	pub fn begin_load(&mut self, total: usize) -> bool {
		if self.loading || !self.has_more(total) {
			return false;
		}
		self.loading = true;
		true
	}

	/// Reveal one more page, clamped to `total`, and clear the busy flag.
	pub fn finish_load(&mut self, total: usize) {
		self.displayed_count = self
			.displayed_count
			.saturating_add(PAGE_SIZE)
			.min(total)
			.max(self.displayed_count);
		self.loading = false;
	}

	/// Extend the window to a restored size; smaller values are ignored.
	///
	/// Returns whether the window grew.
	pub fn apply_restored(&mut self, count: usize) -> bool {
		if count > self.displayed_count {
			self.displayed_count = count;
			true
		} else {
			false
		}
	}
}
