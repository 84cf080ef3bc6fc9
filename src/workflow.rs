use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use toolshelf::catalog::{CategoryInfo, DataReport, check_categories};
use toolshelf::{
	ALL_CATEGORIES, BookmarkStore, EventBus, FuzzyIndex, JsonFileBackend, QueryParams, Record,
	RecordStore, SortKey, PAGE_SIZE, run_query, sort_records,
};
use tracing::debug;

use crate::cli::{BookmarkAction, Command, ListArgs, SearchArgs};
use crate::settings::ResolvedConfig;

/// What a command produced, ready for printing.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Report {
	Listing(ListingReport),
	Search(SearchReport),
	Bookmarks(BookmarksReport),
	BookmarkChange(BookmarkChange),
	Categories { categories: Vec<CategoryInfo> },
	Check(DataReport),
}

impl Report {
	/// Whether the process should exit successfully.
	pub(crate) fn is_success(&self) -> bool {
		match self {
			Report::Check(report) => report.is_clean(),
			_ => true,
		}
	}
}

#[derive(Debug, Serialize)]
pub(crate) struct ListingReport {
	pub(crate) filter: String,
	pub(crate) query: Option<String>,
	pub(crate) sort: SortKey,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) seed: Option<u32>,
	pub(crate) total: usize,
	pub(crate) has_more: bool,
	pub(crate) empty_search_in_category: bool,
	pub(crate) records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoredRecord {
	pub(crate) score: u32,
	#[serde(flatten)]
	pub(crate) record: Record,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchReport {
	pub(crate) query: String,
	pub(crate) filter: String,
	pub(crate) total: usize,
	pub(crate) hits: Vec<ScoredRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BookmarksReport {
	pub(crate) count: usize,
	/// Stored slugs with no matching record.
	pub(crate) dangling: usize,
	pub(crate) records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum BookmarkOp {
	Add,
	Remove,
	Toggle,
}

#[derive(Debug, Serialize)]
pub(crate) struct BookmarkChange {
	pub(crate) op: BookmarkOp,
	pub(crate) slug: String,
	/// Whether the stored set changed.
	pub(crate) changed: bool,
	pub(crate) bookmarked: bool,
	pub(crate) known: bool,
}

/// Loads the dataset and bookmarks once and runs commands against them.
pub(crate) struct Workflow {
	config: ResolvedConfig,
	store: Arc<RecordStore>,
	index: FuzzyIndex,
	bookmarks: BookmarkStore<JsonFileBackend>,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let store = RecordStore::load(&config.dataset)
			.with_context(|| format!("failed to load dataset {}", config.dataset.display()))?;
		let index = FuzzyIndex::new(store.records(), config.search);
		let bus = Arc::new(EventBus::new());
		let bookmarks = BookmarkStore::new(JsonFileBackend::new(config.bookmarks.clone()), bus);
		debug!(records = store.len(), "workflow ready");
		Ok(Self {
			config,
			store: Arc::new(store),
			index,
			bookmarks,
		})
	}

	pub(crate) fn run(&mut self, command: &Command) -> Result<Report> {
		let report = match command {
			Command::List(args) => Report::Listing(self.list(args)),
			Command::Search(args) => Report::Search(self.search(args)),
			Command::Bookmarks { action } => self.bookmarks(action),
			Command::Categories => Report::Categories {
				categories: self.store.category_infos(),
			},
			Command::Check => Report::Check(check_categories(
				self.store.categories(),
				&self.config.check,
			)),
		};
		Ok(report)
	}

	fn list(&self, args: &ListArgs) -> ListingReport {
		let listing = &self.config.listing;
		let sort = args.sort.map_or(listing.sort, SortKey::from);
		let seed = args.seed.or(listing.seed);
		let mut params = QueryParams::new()
			.with_filter(args.category.as_deref().unwrap_or(ALL_CATEGORIES))
			.with_search(args.query.clone().unwrap_or_default())
			.with_recent_only(args.recent)
			.with_recency_days(args.recent_days.unwrap_or(listing.recency_days))
			.with_sort(sort)
			.with_displayed_count(PAGE_SIZE.saturating_mul(args.pages.max(1)));
		if let Some(seed) = seed {
			params = params.with_seed(seed);
		}

		let outcome = run_query(&self.store, &self.index, &params, Utc::now());
		ListingReport {
			filter: params.filter.clone(),
			query: args.query.clone().filter(|_| outcome.searched),
			sort,
			seed: (sort == SortKey::Random).then(|| params.effective_seed()),
			total: outcome.total(),
			has_more: outcome.has_more(),
			empty_search_in_category: outcome.empty_search_in_category,
			records: outcome.page().iter().map(|record| (*record).clone()).collect(),
		}
	}

	fn search(&self, args: &SearchArgs) -> SearchReport {
		let filter = args.category.as_deref().unwrap_or(ALL_CATEGORIES);
		let records = self.store.records();
		let matched: Vec<ScoredRecord> = self
			.index
			.search(&args.query)
			.into_iter()
			.filter_map(|hit| {
				let record = records.get(hit.index)?;
				RecordStore::matches_filter(record, filter).then(|| ScoredRecord {
					score: hit.score,
					record: record.clone(),
				})
			})
			.collect();
		let total = matched.len();
		let hits = match args.limit {
			Some(limit) => matched.into_iter().take(limit).collect(),
			None => matched,
		};
		SearchReport {
			query: args.query.trim().to_string(),
			filter: filter.to_string(),
			total,
			hits,
		}
	}

	fn bookmarks(&mut self, action: &BookmarkAction) -> Report {
		match action {
			BookmarkAction::List { sort } => {
				let sort = sort.map_or(SortKey::NameAsc, SortKey::from).deterministic();
				let resolved = self.bookmarks.bookmarked_records(&self.store);
				let count = self.bookmarks.count();
				Report::Bookmarks(BookmarksReport {
					count: resolved.len(),
					dangling: count.saturating_sub(resolved.len()),
					records: sort_records(&resolved, sort)
						.into_iter()
						.cloned()
						.collect(),
				})
			}
			BookmarkAction::Add { slug } => {
				let changed = self.bookmarks.add(slug);
				Report::BookmarkChange(self.change(BookmarkOp::Add, slug, changed))
			}
			BookmarkAction::Remove { slug } => {
				let changed = self.bookmarks.remove(slug);
				Report::BookmarkChange(self.change(BookmarkOp::Remove, slug, changed))
			}
			BookmarkAction::Toggle { slug } => {
				let before = self.bookmarks.is_bookmarked(slug);
				let after = self.bookmarks.toggle(slug);
				Report::BookmarkChange(self.change(BookmarkOp::Toggle, slug, before != after))
			}
		}
	}

	fn change(&self, op: BookmarkOp, slug: &str, changed: bool) -> BookmarkChange {
		BookmarkChange {
			op,
			slug: slug.to_string(),
			changed,
			bookmarked: self.bookmarks.is_bookmarked(slug),
			known: self.store.find_by_slug(slug).is_some(),
		}
	}
}
