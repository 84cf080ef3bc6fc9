use frizbee::Config;

use super::PREFILTER_ENABLE_THRESHOLD;
use super::tuning::SearchTuning;

/// Builds fuzzy matching options for the provided query and dataset size.
///
/// The typo budget comes from [`SearchTuning::typo_budget`]; the prefilter
/// only pays off on large datasets.
pub fn config_for_query(query: &str, dataset_len: usize, tuning: &SearchTuning) -> Config {
	let budget = tuning.typo_budget(query.chars().count());
	Config {
		prefilter: dataset_len >= PREFILTER_ENABLE_THRESHOLD,
		max_typos: Some(u16::try_from(budget).unwrap_or(u16::MAX)),
		sort: false,
		..Config::default()
	}
}
