use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.listing.recency_days == 0 {
		return Err(ConfigError::invalid(
			"listing.recency_days",
			"0",
			sources.source_for_recency_days(),
			"must be at least 1",
		));
	}

	let search = &config.search;
	let weights = [
		("search.title_weight", search.title_weight),
		("search.body_weight", search.body_weight),
		("search.category_weight", search.category_weight),
		("search.tag_weight", search.tag_weight),
	];
	for (key, weight) in weights {
		if !weight.is_finite() || weight < 0.0 {
			return Err(ConfigError::invalid(
				key,
				weight.to_string(),
				sources.source_for_search(key),
				"must be a non-negative number",
			));
		}
	}

	if weights.iter().all(|(_, weight)| *weight == 0.0) {
		return Err(ConfigError::invalid(
			"search.title_weight",
			search.title_weight.to_string(),
			sources.source_for_search("search.title_weight"),
			"at least one search weight must be positive",
		));
	}

	let ratio = search.max_error_ratio;
	if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
		return Err(ConfigError::invalid(
			"search.max_error_ratio",
			ratio.to_string(),
			sources.source_for_search("search.max_error_ratio"),
			"must be between 0 and 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use toolshelf::SearchTuning;
	use toolshelf::catalog::CheckOptions;

	use super::super::{ListingDefaults, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			dataset: PathBuf::from("/tmp/tools.json"),
			bookmarks: PathBuf::from("/tmp/bookmarks.json"),
			listing: ListingDefaults::default(),
			search: SearchTuning::default(),
			check: CheckOptions::default(),
			log_file: None,
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_recency_window() {
		let mut config = config();
		config.listing.recency_days = 0;
		let sources = ConfigSources {
			listing_recency_days: Some(SettingSource::Environment(
				"TOOLSHELF__LISTING__RECENCY_DAYS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "listing.recency_days");
		let message = err.to_string();
		assert!(message.contains("= \"0\""));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_negative_weights() {
		let mut config = config();
		config.search.body_weight = -1.0;
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "search.body_weight");
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_bounds_the_error_ratio() {
		let mut config = config();
		config.search.max_error_ratio = 1.5;
		let sources = ConfigSources {
			max_error_ratio: Some(SettingSource::Environment(
				"TOOLSHELF__SEARCH__MAX_ERROR_RATIO",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.max_error_ratio");
		assert!(err.to_string().contains("between 0 and 1"));

		config.search.max_error_ratio = 0.0;
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_requires_one_positive_weight() {
		let mut config = config();
		config.search = SearchTuning {
			title_weight: 0.0,
			body_weight: 0.0,
			category_weight: 0.0,
			tag_weight: 0.0,
			..SearchTuning::default()
		};
		assert!(validate(&config, &ConfigSources::default()).is_err());
	}
}
