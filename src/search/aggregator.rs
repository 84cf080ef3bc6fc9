use std::cmp::Ordering as CmpOrdering;

use serde::Serialize;

/// A record position in the store together with its weighted match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchHit {
	pub index: usize,
	pub score: u32,
}

impl Ord for SearchHit {
	/// Best hits first; equal scores fall back to dataset order.
	fn cmp(&self, other: &Self) -> CmpOrdering {
		other
			.score
			.cmp(&self.score)
			.then_with(|| self.index.cmp(&other.index))
	}
}

impl PartialOrd for SearchHit {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

/// Accumulates weighted per-field scores for every record of one query.
pub(super) struct ScoreAggregator {
	totals: Vec<f32>,
	matched: Vec<bool>,
}

impl ScoreAggregator {
	pub(super) fn new(len: usize) -> Self {
		Self {
			totals: vec![0.0; len],
			matched: vec![false; len],
		}
	}

	/// Adds the contribution of one field match.
	pub(super) fn push(&mut self, index: usize, score: u16, weight: f32) {
		if score == 0 || weight <= 0.0 {
			return;
		}
		if let Some(total) = self.totals.get_mut(index) {
			*total += f32::from(score) * weight;
			self.matched[index] = true;
		}
	}

	/// Ranks every matched record whose rounded score reaches `min_score`.
	pub(super) fn finish(self, min_score: u32) -> Vec<SearchHit> {
		let mut hits: Vec<SearchHit> = self
			.totals
			.into_iter()
			.zip(self.matched)
			.enumerate()
			.filter(|(_, (_, matched))| *matched)
			.map(|(index, (total, _))| SearchHit {
				index,
				score: total.round() as u32,
			})
			.filter(|hit| hit.score > 0 && hit.score >= min_score)
			.collect();
		hits.sort_unstable();
		hits
	}
}
