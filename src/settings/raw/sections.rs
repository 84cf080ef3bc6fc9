use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
	pub(super) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BookmarksSection {
	pub(super) path: Option<PathBuf>,
}

/// Defaults for the `list` command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ListingSection {
	pub(super) sort: Option<String>,
	pub(super) seed: Option<u32>,
	pub(super) recency_days: Option<u32>,
}

/// Fuzzy search tuning; unset fields keep the built-in weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) title_weight: Option<f32>,
	pub(super) body_weight: Option<f32>,
	pub(super) category_weight: Option<f32>,
	pub(super) tag_weight: Option<f32>,
	pub(super) min_score: Option<u32>,
	pub(super) max_error_ratio: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CheckSection {
	pub(super) required_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
}
