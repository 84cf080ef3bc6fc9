//! Weighted fuzzy search over records, built on frizbee.

mod aggregator;
mod config;
mod distance;
mod index;
mod tuning;

pub use aggregator::SearchHit;
pub use config::config_for_query;
pub use index::{Dataset, FuzzyIndex, SearchField};
pub use tuning::{
	MATCH_CHUNK_SIZE, MAX_TYPOS, MIN_QUERY_CHARS, PREFILTER_ENABLE_THRESHOLD, SearchTuning,
	is_effective_query,
};
