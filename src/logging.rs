//! Tracing subscriber initialisation.
//!
//! Logs go to stderr unless a log file is configured. `RUST_LOG` selects the
//! level and defaults to `warn`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("failed to create log directory at {path:?}: {source}")]
	DirectoryCreation {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The log path has no file name component.
	#[error("invalid log file path: {0:?}")]
	InvalidPath(PathBuf),

	#[error("tracing subscriber already initialized")]
	SubscriberAlreadySet,
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to `log_file` when given.
///
/// The parent directory of `log_file` is created if needed.
///
/// # Errors
///
/// Fails when the log directory cannot be created, the path has no file
/// name, or a subscriber is already installed.
pub fn init(log_file: Option<&Path>) -> Result<(), LoggingError> {
	let Some(log_file) = log_file else {
		return tracing_subscriber::fmt()
			.with_env_filter(env_filter())
			.with_writer(std::io::stderr)
			.try_init()
			.map_err(|_| LoggingError::SubscriberAlreadySet);
	};

	let directory = match log_file.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
		path: directory.to_path_buf(),
		source,
	})?;

	let file_name = log_file
		.file_name()
		.ok_or_else(|| LoggingError::InvalidPath(log_file.to_path_buf()))?;
	let appender = tracing_appender::rolling::never(directory, file_name);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(appender)
		.with_ansi(false)
		.try_init()
		.map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;
	use tempfile::tempdir;

	#[test]
	#[serial(tracing_init)]
	fn file_logging_creates_missing_directories() {
		let dir = tempdir().expect("tempdir");
		let log_file = dir.path().join("nested").join("toolshelf.log");

		// A subscriber may already be installed by another test.
		let _ = init(Some(&log_file));

		assert!(log_file.parent().is_some_and(Path::exists));
	}

	#[test]
	#[serial(tracing_init)]
	fn second_initialisation_is_rejected() {
		let _ = init(None);
		assert!(matches!(init(None), Err(LoggingError::SubscriberAlreadySet)));
	}

	#[test]
	#[serial(tracing_init)]
	fn root_path_is_invalid() {
		let result = init(Some(Path::new("/")));
		assert!(matches!(
			result,
			Err(LoggingError::InvalidPath(_) | LoggingError::DirectoryCreation { .. })
		));
	}
}
