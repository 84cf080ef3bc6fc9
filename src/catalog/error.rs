use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The dataset file could not be read.
	#[error("failed to read dataset {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The dataset text is not valid JSON for the expected layout.
	#[error("invalid dataset: {0}")]
	Parse(#[source] serde_json::Error),

	/// Same as [`CatalogError::Parse`], with the offending file attached.
	#[error("invalid dataset {path}: {source}")]
	ParseFile {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl CatalogError {
	/// Attach the file path to a parse error.
	pub(crate) fn at(self, path: &Path) -> Self {
		match self {
			Self::Parse(source) => Self::ParseFile {
				path: path.to_path_buf(),
				source,
			},
			other => other,
		}
	}
}
