//! Deterministic querying for a curated directory of tools and articles.
//!
//! Records come from a [`RecordStore`], flow through [`run_query`] (category
//! and recency filters, fuzzy search, ordering, pagination) and end up in a
//! [`ListingView`]. Bookmarks live in a [`BookmarkStore`] that announces every
//! change on an [`EventBus`], so independent views stay in sync.

pub mod app_dirs;
pub mod bookmarks;
pub mod catalog;
pub mod dates;
pub mod events;
pub mod logging;
pub mod ordering;
pub mod query;
pub mod search;
pub mod session;
pub mod view;

pub use bookmarks::{BookmarkBackend, BookmarkSet, BookmarkStore, JsonFileBackend, MemoryBackend};
pub use catalog::{ALL_CATEGORIES, Category, Entry, Record, RecordStore};
pub use events::{DirectoryEvent, EventBus, EventKind, Subscription};
pub use ordering::{DEFAULT_SEED, Mulberry32, SortKey, seeded_shuffle, sort_records};
pub use query::{PAGE_SIZE, Pagination, QueryOutcome, QueryParams, run_query};
pub use search::{FuzzyIndex, SearchHit, SearchTuning};
pub use session::{NavigationContext, ViewSessionState};
pub use view::{FavoritesView, ListingView};
