//! Per-navigation view state and the deferred actions of a view.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of a listing taken when the user navigates away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSessionState {
	pub filter: String,
	pub displayed_count: usize,
	#[serde(default)]
	pub scroll_y: f64,
}

impl ViewSessionState {
	#[must_use]
	pub fn new(filter: impl Into<String>, displayed_count: usize, scroll_y: f64) -> Self {
		Self {
			filter: filter.into(),
			displayed_count,
			scroll_y,
		}
	}
}

/// Single-slot carrier for [`ViewSessionState`] across one navigation.
///
/// Whatever is stashed is consumed by the next [`NavigationContext::take_matching`],
/// whether or not it applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationContext {
	slot: Option<ViewSessionState>,
}

impl NavigationContext {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `state`, replacing anything stashed earlier.
	pub fn stash(&mut self, state: ViewSessionState) {
		debug!(filter = %state.filter, displayed = state.displayed_count, "stashed view state");
		self.slot = Some(state);
	}

	#[must_use]
	pub fn peek(&self) -> Option<&ViewSessionState> {
		self.slot.as_ref()
	}

	/// Clear the slot and return its state if it was captured under `filter`.
	pub fn take_matching(&mut self, filter: &str) -> Option<ViewSessionState> {
		let state = self.slot.take()?;
		if state.filter == filter {
			Some(state)
		} else {
			debug!(stored = %state.filter, current = filter, "discarded view state for another filter");
			None
		}
	}

	/// Encode as a history-state payload.
	///
	/// # Errors
	///
	/// Returns an error if serialisation fails.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Decode a history-state payload; malformed input yields an empty context.
	#[must_use]
	pub fn from_json_lossy(raw: &str) -> Self {
		serde_json::from_str(raw).unwrap_or_default()
	}
}

/// Time-ordered queue of actions owned by a single view.
///
/// Nothing runs by itself: the owner drains due tasks from its tick. Dropping
/// the queue drops every pending task.
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
	pending: Vec<(Instant, T)>,
}

impl<T> Default for DeferredQueue<T> {
	fn default() -> Self {
		Self {
			pending: Vec::new(),
		}
	}
}

impl<T> DeferredQueue<T> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn schedule(&mut self, due: Instant, task: T) {
		self.pending.push((due, task));
	}

	/// Remove and return every task due at `now`, earliest first.
	///
	/// Tasks sharing a deadline keep their scheduling order.
	pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
		let mut due = Vec::new();
		let mut index = 0;
		while index < self.pending.len() {
			if self.pending[index].0 <= now {
				due.push(self.pending.remove(index));
			} else {
				index += 1;
			}
		}
		due.sort_by_key(|(when, _)| *when);
		due.into_iter().map(|(_, task)| task).collect()
	}

	/// Drop pending tasks matching `predicate`; returns how many were dropped.
	pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
		let before = self.pending.len();
		self.pending.retain(|(_, task)| !predicate(task));
		before - self.pending.len()
	}

	/// Earliest pending deadline.
	#[must_use]
	pub fn next_due(&self) -> Option<Instant> {
		self.pending.iter().map(|(when, _)| *when).min()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn state_is_consumed_exactly_once() {
		let mut context = NavigationContext::new();
		context.stash(ViewSessionState::new("chat", 96, 1200.0));
		assert_eq!(
			context.take_matching("chat"),
			Some(ViewSessionState::new("chat", 96, 1200.0))
		);
		assert_eq!(context.take_matching("chat"), None);
	}

	#[test]
	fn mismatched_filter_clears_without_applying() {
		let mut context = NavigationContext::new();
		context.stash(ViewSessionState::new("chat", 96, 0.0));
		assert_eq!(context.take_matching("image"), None);
		assert!(context.peek().is_none());
	}

	#[test]
	fn context_travels_as_json() {
		let mut context = NavigationContext::new();
		context.stash(ViewSessionState::new("all", 64, 10.5));
		let raw = context.to_json().expect("encode");
		assert!(raw.contains("\"displayedCount\":64"));
		assert_eq!(NavigationContext::from_json_lossy(&raw), context);
		assert_eq!(NavigationContext::from_json_lossy("garbage"), NavigationContext::new());
	}

	#[test]
	fn only_due_tasks_are_drained_in_deadline_order() {
		let start = Instant::now();
		let mut queue = DeferredQueue::new();
		queue.schedule(start + Duration::from_millis(300), "late");
		queue.schedule(start + Duration::from_millis(50), "early");
		queue.schedule(start + Duration::from_millis(50), "early-too");

		assert!(queue.drain_due(start).is_empty());
		assert_eq!(queue.next_due(), Some(start + Duration::from_millis(50)));
		assert_eq!(
			queue.drain_due(start + Duration::from_millis(100)),
			vec!["early", "early-too"]
		);
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.drain_due(start + Duration::from_secs(1)), vec!["late"]);
		assert!(queue.is_empty());
	}

	#[test]
	fn cancelled_tasks_never_fire() {
		let start = Instant::now();
		let mut queue = DeferredQueue::new();
		queue.schedule(start, 1);
		queue.schedule(start, 2);
		assert_eq!(queue.cancel_where(|task| *task == 1), 1);
		assert_eq!(queue.drain_due(start), vec![2]);
	}
}
