use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;
use toolshelf::{SearchTuning, SortKey};
use toolshelf::catalog::CheckOptions;
use toolshelf::dates::DEFAULT_RECENCY_DAYS;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ListingDefaults, ResolvedConfig, SettingSource};
use super::util::{DEFAULT_DATASET_FILE, absolutize, default_bookmarks_path, non_empty};

mod sections;

use sections::{
	BookmarksSection, CheckSection, DatasetSection, ListingSection, LoggingSection, SearchSection,
};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dataset: DatasetSection,
	bookmarks: BookmarksSection,
	listing: ListingSection,
	search: SearchSection,
	check: CheckSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.dataset.path = Some(path);
		}
		if let Some(path) = cli.bookmarks.clone() {
			self.bookmarks.path = Some(path);
		}
		if let Some(path) = cli.log_file.clone() {
			self.logging.file = Some(path);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			listing_sort: detect_source(
				self.listing.sort.is_some(),
				"TOOLSHELF__LISTING__SORT",
				"listing.sort",
			),
			listing_recency_days: detect_source(
				self.listing.recency_days.is_some(),
				"TOOLSHELF__LISTING__RECENCY_DAYS",
				"listing.recency_days",
			),
			title_weight: detect_source(
				self.search.title_weight.is_some(),
				"TOOLSHELF__SEARCH__TITLE_WEIGHT",
				"search.title_weight",
			),
			body_weight: detect_source(
				self.search.body_weight.is_some(),
				"TOOLSHELF__SEARCH__BODY_WEIGHT",
				"search.body_weight",
			),
			category_weight: detect_source(
				self.search.category_weight.is_some(),
				"TOOLSHELF__SEARCH__CATEGORY_WEIGHT",
				"search.category_weight",
			),
			tag_weight: detect_source(
				self.search.tag_weight.is_some(),
				"TOOLSHELF__SEARCH__TAG_WEIGHT",
				"search.tag_weight",
			),
			max_error_ratio: detect_source(
				self.search.max_error_ratio.is_some(),
				"TOOLSHELF__SEARCH__MAX_ERROR_RATIO",
				"search.max_error_ratio",
			),
		};

		let sort = match self.listing.sort.as_deref().map(str::trim) {
			None | Some("") => SortKey::default(),
			Some(value) => value.parse::<SortKey>().map_err(|err| {
				Error::new(ConfigError::invalid(
					"listing.sort",
					value,
					sources.source_for_sort(),
					err.to_string(),
				))
			})?,
		};

		let dataset = absolutize(
			&self
				.dataset
				.path
				.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE)),
		)?;
		let bookmarks = match self.bookmarks.path {
			Some(path) => absolutize(&path)?,
			None => default_bookmarks_path()?,
		};
		let log_file = self.logging.file.map(|path| absolutize(&path)).transpose()?;

		let defaults = SearchTuning::default();
		let search = SearchTuning {
			title_weight: self.search.title_weight.unwrap_or(defaults.title_weight),
			body_weight: self.search.body_weight.unwrap_or(defaults.body_weight),
			category_weight: self.search.category_weight.unwrap_or(defaults.category_weight),
			tag_weight: self.search.tag_weight.unwrap_or(defaults.tag_weight),
			min_score: self.search.min_score.unwrap_or(defaults.min_score),
			max_error_ratio: self
				.search
				.max_error_ratio
				.unwrap_or(defaults.max_error_ratio),
		};

		let config = ResolvedConfig {
			dataset,
			bookmarks,
			listing: ListingDefaults {
				sort,
				seed: self.listing.seed,
				recency_days: self.listing.recency_days.unwrap_or(DEFAULT_RECENCY_DAYS),
			},
			search,
			check: CheckOptions {
				required_ref: non_empty(self.check.required_ref),
			},
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Where a config-only value came from; CLI overrides are per command.
fn detect_source(
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
