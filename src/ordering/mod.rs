//! Deterministic orderings: comparators, the mulberry32 generator and the
//! seeded shuffle built on top of it.

pub mod rng;
pub mod shuffle;
pub mod sort;

pub use rng::Mulberry32;
pub use shuffle::{DEFAULT_SEED, normalize_seed, seeded_shuffle};
pub use sort::{
	Comparator, SortKey, UnknownSortKey, compare_titles, date_newest, date_oldest, name_asc,
	name_desc, sort_by_comparator, sort_records,
};
