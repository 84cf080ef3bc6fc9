use frizbee::match_list;
use tracing::debug;

use super::aggregator::{ScoreAggregator, SearchHit};
use super::config::config_for_query;
use super::distance::{folded, within_budget};
use super::tuning::{MATCH_CHUNK_SIZE, SearchTuning, is_effective_query};
use crate::catalog::Record;

/// Represents a collection that can be searched via fuzzy matching.
pub trait Dataset {
	/// Total number of entries in the dataset.
	fn len(&self) -> usize;

	/// Returns true if the dataset contains no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Return the searchable key associated with `index`.
	fn key_for(&self, index: usize) -> &str;
}

impl<T> Dataset for &T
where
	T: Dataset + ?Sized,
{
	fn len(&self) -> usize {
		<T as Dataset>::len(*self)
	}

	fn key_for(&self, index: usize) -> &str {
		<T as Dataset>::key_for(*self, index)
	}
}

/// Searchable record fields, in weight order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
	Title,
	Body,
	Category,
	Tag,
}

impl SearchField {
	pub const ALL: [SearchField; 4] = [
		SearchField::Title,
		SearchField::Body,
		SearchField::Category,
		SearchField::Tag,
	];

	fn extract(self, record: &Record) -> &str {
		match self {
			SearchField::Title => &record.title,
			SearchField::Body => &record.body,
			SearchField::Category => &record.category,
			SearchField::Tag => record.tag.as_deref().unwrap_or_default(),
		}
	}
}

/// One field's haystacks across all records.
#[derive(Debug, Clone)]
struct FieldColumn {
	field: SearchField,
	values: Vec<String>,
}

impl Dataset for FieldColumn {
	fn len(&self) -> usize {
		self.values.len()
	}

	fn key_for(&self, index: usize) -> &str {
		&self.values[index]
	}
}

/// Weighted multi-field fuzzy index over a fixed slice of records.
///
/// Hit indices refer to positions in the slice the index was built from.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
	columns: Vec<FieldColumn>,
	len: usize,
	tuning: SearchTuning,
}

impl FuzzyIndex {
	#[must_use]
	pub fn new(records: &[Record], tuning: SearchTuning) -> Self {
		let columns = SearchField::ALL
			.iter()
			.map(|field| FieldColumn {
				field: *field,
				values: records
					.iter()
					.map(|record| field.extract(record).to_owned())
					.collect(),
			})
			.collect();
		Self {
			columns,
			len: records.len(),
			tuning: tuning.sanitized(),
		}
	}

	#[must_use]
	pub fn tuning(&self) -> &SearchTuning {
		&self.tuning
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Rank records against `query`, best first.
	///
	/// Returns nothing for queries shorter than two characters once trimmed,
	/// and for empty indexes.
	#[must_use]
	pub fn search(&self, query: &str) -> Vec<SearchHit> {
		let trimmed = query.trim();
		if !is_effective_query(trimmed) || self.is_empty() {
			return Vec::new();
		}

		let query = FieldQuery::new(trimmed, &self.tuning);
		let weights = self.tuning.weights();
		let mut aggregator = ScoreAggregator::new(self.len);
		for (column, weight) in self.columns.iter().zip(weights) {
			if weight <= 0.0 {
				continue;
			}
			score_column(column, &query, weight, &mut aggregator);
		}

		let hits = aggregator.finish(self.tuning.min_score);
		debug!(
			query = trimmed,
			typo_budget = query.budget,
			hits = hits.len(),
			"fuzzy search ranked records"
		);
		hits
	}
}

/// A trimmed query with its folded form and edit budget.
struct FieldQuery<'q> {
	text: &'q str,
	folded: Vec<char>,
	budget: usize,
	tuning: SearchTuning,
}

impl<'q> FieldQuery<'q> {
	fn new(text: &'q str, tuning: &SearchTuning) -> Self {
		Self {
			text,
			folded: folded(text),
			budget: tuning.typo_budget(text.chars().count()),
			tuning: *tuning,
		}
	}

	fn accepts(&self, haystack: &str) -> bool {
		within_budget(&self.folded, haystack, self.budget)
	}
}

/// frizbee ranks the field; only hits close enough in edit distance count.
fn score_column(
	column: &FieldColumn,
	query: &FieldQuery<'_>,
	weight: f32,
	aggregator: &mut ScoreAggregator,
) {
	let total = column.len();
	let config = config_for_query(query.text, total, &query.tuning);
	let mut haystacks = Vec::with_capacity(MATCH_CHUNK_SIZE.min(total));
	let mut offset = 0;
	let mut rejected = 0usize;
	while offset < total {
		let end = (offset + MATCH_CHUNK_SIZE).min(total);
		haystacks.clear();
		for index in offset..end {
			haystacks.push(column.key_for(index));
		}
		for entry in match_list(query.text, &haystacks, &config) {
			if entry.score == 0 {
				continue;
			}
			let index = entry.index as usize;
			if !query.accepts(haystacks[index]) {
				rejected += 1;
				continue;
			}
			aggregator.push(offset + index, entry.score, weight);
		}
		offset = end;
	}
	debug!(field = ?column.field, rejected, "scored search field");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{Category, Entry, RecordStore};

	fn store() -> RecordStore {
		RecordStore::from_categories(vec![
			Category::new("chat", "Chat").with_entries(vec![
				Entry::new("GPT-4 Assistant")
					.with_body("General chat helper")
					.with_tag("llm"),
			]),
			Category::new("media", "Media").with_entries(vec![
				Entry::new("Color Mixer")
					.with_body("Blend colors on a canvas")
					.with_tag("color"),
				Entry::new("Mailbox")
					.with_body("Email inbox")
					.with_tag("mail"),
			]),
		])
	}

	#[test]
	fn exact_query_finds_title() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		let hits = index.search("gpt");
		assert_eq!(hits.first().map(|hit| hit.index), Some(0));
	}

	#[test]
	fn transposed_query_still_ranks_title_first() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		let hits = index.search("gtp");
		assert_eq!(hits.first().map(|hit| hit.index), Some(0));
	}

	fn described_store() -> RecordStore {
		RecordStore::from_categories(vec![
			Category::new("chat", "Chat").with_entries(vec![
				Entry::new("GPT-4 Assistant").with_body("Conversational AI for drafting"),
			]),
			Category::new("writing", "Writing").with_entries(vec![
				Entry::new("Grammarly").with_body("Writing assistant that helps with grammar"),
			]),
			Category::new("design", "Design").with_entries(vec![
				Entry::new("Canva").with_body("Graphic design platform with templates"),
			]),
			Category::new("audio", "Audio").with_entries(vec![
				Entry::new("Audacity").with_body("Free audio editor"),
			]),
		])
	}

	#[test]
	fn scattered_letters_in_descriptions_do_not_match() {
		let store = described_store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		for query in ["gpt", "gtp", "GPT"] {
			let hits: Vec<usize> = index.search(query).iter().map(|hit| hit.index).collect();
			assert_eq!(hits, vec![0], "query {query}");
		}
	}

	#[test]
	fn two_character_queries_need_a_contiguous_match() {
		let store = described_store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		let hits: Vec<usize> = index.search("ai").iter().map(|hit| hit.index).collect();
		assert_eq!(hits, vec![0]);
		assert!(index.search("zq").is_empty());
	}

	#[test]
	fn a_looser_error_ratio_widens_matches() {
		let store = described_store();
		let strict = FuzzyIndex::new(
			store.records(),
			SearchTuning {
				max_error_ratio: 0.0,
				..SearchTuning::default()
			},
		);
		assert!(strict.search("gtp").is_empty());
		assert_eq!(strict.search("gpt").len(), 1);
	}

	#[test]
	fn short_and_blank_queries_bypass_search() {
		let store = store();
		let index = FuzzyIndex::new(store.records(), SearchTuning::default());
		assert!(index.search("g").is_empty());
		assert!(index.search("   ").is_empty());
		assert!(index.search("").is_empty());
	}

	#[test]
	fn empty_index_never_fails() {
		let index = FuzzyIndex::new(&[], SearchTuning::default());
		assert!(index.search("anything").is_empty());
	}

	#[test]
	fn zero_weights_disable_fields() {
		let store = store();
		let tuning = SearchTuning {
			title_weight: 0.0,
			body_weight: 0.0,
			category_weight: 0.0,
			tag_weight: 1.0,
			..SearchTuning::default()
		};
		let index = FuzzyIndex::new(store.records(), tuning);
		let hits = index.search("llm");
		assert_eq!(hits.first().map(|hit| hit.index), Some(0));
	}
}
