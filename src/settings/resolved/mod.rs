use std::path::PathBuf;

use toolshelf::catalog::CheckOptions;
use toolshelf::dates::DEFAULT_RECENCY_DAYS;
use toolshelf::{SearchTuning, SortKey};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Defaults applied to `list` when its flags are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingDefaults {
	pub(crate) sort: SortKey,
	pub(crate) seed: Option<u32>,
	pub(crate) recency_days: u32,
}

impl Default for ListingDefaults {
	fn default() -> Self {
		Self {
			sort: SortKey::default(),
			seed: None,
			recency_days: DEFAULT_RECENCY_DAYS,
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) dataset: PathBuf,
	pub(crate) bookmarks: PathBuf,
	pub(crate) listing: ListingDefaults,
	pub(crate) search: SearchTuning,
	pub(crate) check: CheckOptions,
	pub(crate) log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
