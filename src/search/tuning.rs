use serde::{Deserialize, Serialize};

/// Dataset size from which frizbee prefiltering kicks in.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Number of haystacks handed to frizbee per call.
pub const MATCH_CHUNK_SIZE: usize = 512;

/// Queries shorter than this (after trimming) bypass search entirely.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on the typo budget, whatever the query length.
pub const MAX_TYPOS: usize = 4;

/// Relative field weights and the acceptance threshold for fuzzy matches.
///
/// These are tuning knobs rather than contracts; the defaults favour titles,
/// then descriptions, then the category key, then the tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
	pub title_weight: f32,
	pub body_weight: f32,
	pub category_weight: f32,
	pub tag_weight: f32,
	/// Minimum weighted score a record needs to be returned.
	pub min_score: u32,
	/// Share of the query's characters that may be edited in a field match.
	///
	/// `0.35` allows one typo from three characters on and keeps two-character
	/// queries exact.
	pub max_error_ratio: f32,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			title_weight: 0.4,
			body_weight: 0.3,
			category_weight: 0.2,
			tag_weight: 0.1,
			min_score: 1,
			max_error_ratio: 0.35,
		}
	}
}

impl SearchTuning {
	/// Weights in field order: title, body, category, tag.
	#[must_use]
	pub fn weights(&self) -> [f32; 4] {
		[
			self.title_weight,
			self.body_weight,
			self.category_weight,
			self.tag_weight,
		]
	}

	/// Edits a field match may need for a query of `query_chars` characters.
	///
	/// Never reaches the query length, so at least one character always has
	/// to line up.
	#[must_use]
	pub fn typo_budget(&self, query_chars: usize) -> usize {
		let scaled = (query_chars as f32 * self.max_error_ratio).floor() as usize;
		scaled
			.min(MAX_TYPOS)
			.min(query_chars.saturating_sub(1))
	}

	/// Negative or non-finite weights are clamped to zero; the error ratio is
	/// kept within `0..=1`.
	#[must_use]
	pub fn sanitized(mut self) -> Self {
		for weight in [
			&mut self.title_weight,
			&mut self.body_weight,
			&mut self.category_weight,
			&mut self.tag_weight,
		] {
			if !weight.is_finite() || *weight < 0.0 {
				*weight = 0.0;
			}
		}
		self.max_error_ratio = if self.max_error_ratio.is_finite() {
			self.max_error_ratio.clamp(0.0, 1.0)
		} else {
			0.0
		};
		self
	}
}

/// Whether `query` is long enough to trigger a search.
#[must_use]
pub fn is_effective_query(query: &str) -> bool {
	query.trim().chars().count() >= MIN_QUERY_CHARS
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_queries_are_not_effective() {
		assert!(!is_effective_query(""));
		assert!(!is_effective_query("   "));
		assert!(!is_effective_query(" a "));
		assert!(is_effective_query("ab"));
	}

	#[test]
	fn sanitizing_clamps_bad_weights() {
		let tuning = SearchTuning {
			title_weight: -1.0,
			body_weight: f32::NAN,
			..SearchTuning::default()
		}
		.sanitized();
		assert_eq!(tuning.weights(), [0.0, 0.0, 0.2, 0.1]);
	}

	#[test]
	fn typo_budget_scales_with_query_length() {
		let tuning = SearchTuning::default();
		let budgets: Vec<usize> = [2, 3, 5, 6, 9, 12, 40]
			.into_iter()
			.map(|chars| tuning.typo_budget(chars))
			.collect();
		assert_eq!(budgets, vec![0, 1, 1, 2, 3, 4, 4]);
	}

	#[test]
	fn typo_budget_keeps_one_character_anchored() {
		let tuning = SearchTuning {
			max_error_ratio: 1.0,
			..SearchTuning::default()
		};
		assert_eq!(tuning.typo_budget(3), 2);
		assert_eq!(tuning.typo_budget(1), 0);
		assert_eq!(tuning.typo_budget(0), 0);
	}

	#[test]
	fn sanitizing_bounds_the_error_ratio() {
		let high = SearchTuning {
			max_error_ratio: 3.0,
			..SearchTuning::default()
		}
		.sanitized();
		assert_eq!(high.max_error_ratio, 1.0);

		let broken = SearchTuning {
			max_error_ratio: f32::INFINITY,
			..SearchTuning::default()
		}
		.sanitized();
		assert_eq!(broken.max_error_ratio, 0.0);
	}
}
