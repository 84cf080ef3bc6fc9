use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toolshelf::app_dirs;
use toolshelf::bookmarks::BOOKMARKS_FILE_NAME;

/// Dataset file looked up in the working directory when none is configured.
pub(super) const DEFAULT_DATASET_FILE: &str = "tools.json";

/// Make `path` absolute against the working directory.
pub(super) fn absolutize(path: &Path) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path.to_path_buf());
	}
	let current = env::current_dir().context("failed to determine working directory")?;
	Ok(current.join(path))
}

/// Bookmark file inside the data directory.
pub(super) fn default_bookmarks_path() -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir().context("failed to resolve data directory")?;
	Ok(dir.join(BOOKMARKS_FILE_NAME))
}

/// Trim `value` and drop it when nothing is left.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
