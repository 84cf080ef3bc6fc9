use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pagination::PAGE_SIZE;
use crate::catalog::{ALL_CATEGORIES, Record, RecordStore};
use crate::dates::{DEFAULT_RECENCY_DAYS, is_recently_added};
use crate::ordering::{DEFAULT_SEED, SortKey, seeded_shuffle, sort_records};
use crate::search::{FuzzyIndex, is_effective_query};

/// Every input the listing pipeline depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
	/// Category key, or `all`.
	pub filter: String,
	pub search_query: String,
	pub recent_only: bool,
	pub recency_days: u32,
	pub sort: SortKey,
	/// Shuffle seed for [`SortKey::Random`]; `None` and `0` use [`DEFAULT_SEED`].
	pub seed: Option<u32>,
	/// Size of the revealed window.
	pub displayed_count: usize,
}

impl Default for QueryParams {
	fn default() -> Self {
		Self {
			filter: ALL_CATEGORIES.to_string(),
			search_query: String::new(),
			recent_only: false,
			recency_days: DEFAULT_RECENCY_DAYS,
			sort: SortKey::default(),
			seed: None,
			displayed_count: PAGE_SIZE,
		}
	}
}

impl QueryParams {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	#[must_use]
	pub fn with_search(mut self, query: impl Into<String>) -> Self {
		self.search_query = query.into();
		self
	}

	#[must_use]
	pub fn with_recent_only(mut self, enabled: bool) -> Self {
		self.recent_only = enabled;
		self
	}

	#[must_use]
	pub fn with_recency_days(mut self, days: u32) -> Self {
		self.recency_days = days;
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: SortKey) -> Self {
		self.sort = sort;
		self
	}

	#[must_use]
	pub fn with_seed(mut self, seed: u32) -> Self {
		self.seed = Some(seed);
		self
	}

	#[must_use]
	pub fn with_displayed_count(mut self, count: usize) -> Self {
		self.displayed_count = count;
		self
	}

	/// Whether the search query is long enough to run the fuzzy index.
	#[must_use]
	pub fn is_searching(&self) -> bool {
		is_effective_query(&self.search_query)
	}

	/// Seed actually used for random order.
	#[must_use]
	pub fn effective_seed(&self) -> u32 {
		match self.seed {
			Some(seed) if seed != 0 => seed,
			_ => DEFAULT_SEED,
		}
	}
}

/// Ordered result of one pipeline run plus its revealed window.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
	items: Vec<&'a Record>,
	displayed_count: usize,
	/// The fuzzy index produced the base set.
	pub searched: bool,
	/// A search inside a single category matched nothing.
	pub empty_search_in_category: bool,
}

impl<'a> QueryOutcome<'a> {
	/// Every matching record, fully ordered.
	#[must_use]
	pub fn items(&self) -> &[&'a Record] {
		&self.items
	}

	/// The first `displayed_count` records.
	#[must_use]
	pub fn page(&self) -> &[&'a Record] {
		&self.items[..self.visible_len()]
	}

	#[must_use]
	pub fn total(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.displayed_count.min(self.items.len())
	}

	#[must_use]
	pub fn has_more(&self) -> bool {
		self.displayed_count < self.items.len()
	}

	#[must_use]
	pub fn into_page(mut self) -> Vec<&'a Record> {
		let visible = self.visible_len();
		self.items.truncate(visible);
		self.items
	}
}

/// Run the listing pipeline: select, narrow by recency, order, paginate.
///
/// `index` must have been built from `store.records()`; hits pointing past
/// the store are ignored.
#[must_use]
pub fn run_query<'a>(
	store: &'a RecordStore,
	index: &FuzzyIndex,
	params: &QueryParams,
	now: DateTime<Utc>,
) -> QueryOutcome<'a> {
	let searched = params.is_searching();
	let mut base: Vec<&'a Record> = if searched {
		let records = store.records();
		index
			.search(&params.search_query)
			.into_iter()
			.filter_map(|hit| records.get(hit.index))
			.filter(|record| RecordStore::matches_filter(record, &params.filter))
			.collect()
	} else {
		store.in_category(&params.filter)
	};

	if params.recent_only {
		base.retain(|record| is_recently_added(record.added_at(), params.recency_days, now));
	}

	let items = match params.sort {
		SortKey::Random => seeded_shuffle(&base, params.effective_seed()),
		key => sort_records(&base, key),
	};

	let empty_search_in_category =
		searched && params.filter != ALL_CATEGORIES && items.is_empty();
	debug!(
		filter = %params.filter,
		sort = params.sort.id(),
		searched,
		total = items.len(),
		displayed = params.displayed_count,
		"query evaluated"
	);

	QueryOutcome {
		items,
		displayed_count: params.displayed_count,
		searched,
		empty_search_in_category,
	}
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;
	use crate::catalog::{Category, Entry};
	use crate::search::SearchTuning;

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("valid date")
	}

	fn store() -> RecordStore {
		RecordStore::from_categories(vec![
			Category::new("chat", "Chat").with_entries(vec![
				Entry::new("Zebra").with_date("2024-06-10"),
				Entry::new("GPT-4 Assistant")
					.with_body("General chat helper")
					.with_date("2024-03-01"),
			]),
			Category::new("image", "Images").with_entries(vec![
				Entry::new("Apple").with_date("2024-06-01"),
				Entry::new("Mango").with_date("2024-07-01"),
				Entry::new("Undated"),
			]),
		])
	}

	fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
		records.iter().map(|record| record.title.as_str()).collect()
	}

	fn run(store: &RecordStore, params: &QueryParams) -> Vec<String> {
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		titles(run_query(store, &index, params, now()).items())
			.into_iter()
			.map(str::to_owned)
			.collect()
	}

	#[test]
	fn default_params_list_everything_by_name() {
		let store = store();
		assert_eq!(
			run(&store, &QueryParams::new()),
			vec!["Apple", "GPT-4 Assistant", "Mango", "Undated", "Zebra"]
		);
	}

	#[test]
	fn filter_narrows_to_one_category() {
		let store = store();
		let params = QueryParams::new()
			.with_filter("chat")
			.with_sort(SortKey::DateNewest);
		assert_eq!(run(&store, &params), vec!["Zebra", "GPT-4 Assistant"]);
	}

	#[test]
	fn recency_drops_future_old_and_undated_records() {
		let store = store();
		let params = QueryParams::new().with_recent_only(true);
		assert_eq!(run(&store, &params), vec!["Apple", "Zebra"]);

		let narrow = params.with_recency_days(7);
		assert_eq!(run(&store, &narrow), vec!["Zebra"]);
	}

	#[test]
	fn short_queries_bypass_search() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		let outcome = run_query(&store, &index, &QueryParams::new().with_search(" g "), now());
		assert!(!outcome.searched);
		assert_eq!(outcome.total(), 5);
	}

	#[test]
	fn search_results_respect_the_category_filter() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());

		let everywhere = run_query(&store, &index, &QueryParams::new().with_search("gpt"), now());
		assert!(everywhere.searched);
		assert_eq!(titles(everywhere.items()), vec!["GPT-4 Assistant"]);

		let elsewhere = QueryParams::new().with_search("gpt").with_filter("image");
		let outcome = run_query(&store, &index, &elsewhere, now());
		assert_eq!(outcome.total(), 0);
		assert!(outcome.empty_search_in_category);
	}

	#[test]
	fn random_order_is_reproducible_and_defaults_its_seed() {
		let store = store();
		let random = QueryParams::new().with_sort(SortKey::Random);
		let unseeded = run(&store, &random);
		assert_eq!(unseeded, run(&store, &random.clone().with_seed(0)));
		assert_eq!(unseeded, run(&store, &random.clone().with_seed(DEFAULT_SEED)));
		assert_eq!(run(&store, &random.clone().with_seed(7)), run(&store, &random.with_seed(7)));
	}

	#[test]
	fn window_controls_page_and_has_more() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		let outcome = run_query(&store, &index, &QueryParams::new().with_displayed_count(2), now());
		assert_eq!(titles(outcome.page()), vec!["Apple", "GPT-4 Assistant"]);
		assert!(outcome.has_more());
		assert_eq!(outcome.total(), 5);

		let full = run_query(&store, &index, &QueryParams::new(), now());
		assert!(!full.has_more());
		assert_eq!(full.into_page().len(), 5);
	}

	#[test]
	fn pipeline_leaves_the_store_untouched() {
		let store = store();
		let before: Vec<_> = store.records().to_vec();
		let _ = run(&store, &QueryParams::new().with_sort(SortKey::NameDesc));
		assert_eq!(store.records(), before.as_slice());
	}
}
