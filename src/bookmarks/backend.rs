use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::set::BookmarkSet;

/// File name used for bookmarks inside the data directory.
pub const BOOKMARKS_FILE_NAME: &str = "bookmarks.json";

/// Failures surfaced by a [`BookmarkBackend`].
#[derive(Debug, Error)]
pub enum BookmarkError {
	/// Stored data exists but is not a JSON array of strings.
	#[error("stored bookmarks are malformed: {0}")]
	Malformed(#[source] serde_json::Error),

	/// The bookmark set could not be encoded.
	#[error("failed to encode bookmarks: {0}")]
	Encode(#[source] serde_json::Error),

	/// Reading or writing the storage failed.
	#[error("bookmark storage I/O failed at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Device-local storage for a single bookmark set.
pub trait BookmarkBackend {
	/// Load the stored set; a store that was never written is empty.
	///
	/// # Errors
	///
	/// Returns an error when the stored data cannot be read or decoded.
	fn load(&self) -> Result<BookmarkSet, BookmarkError>;

	/// Replace the stored set with `set`.
	///
	/// # Errors
	///
	/// Returns an error when the set cannot be written.
	fn save(&mut self, set: &BookmarkSet) -> Result<(), BookmarkError>;
}

fn decode(raw: &str) -> Result<BookmarkSet, BookmarkError> {
	if raw.trim().is_empty() {
		return Ok(BookmarkSet::new());
	}
	serde_json::from_str(raw).map_err(BookmarkError::Malformed)
}

/// In-memory backend holding the raw serialised value, like a key-value slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
	raw: Option<String>,
}

impl MemoryBackend {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from an arbitrary stored value, valid or not.
	#[must_use]
	pub fn with_raw(raw: impl Into<String>) -> Self {
		Self {
			raw: Some(raw.into()),
		}
	}

	#[must_use]
	pub fn raw(&self) -> Option<&str> {
		self.raw.as_deref()
	}
}

impl BookmarkBackend for MemoryBackend {
	fn load(&self) -> Result<BookmarkSet, BookmarkError> {
		match &self.raw {
			Some(raw) => decode(raw),
			None => Ok(BookmarkSet::new()),
		}
	}

	fn save(&mut self, set: &BookmarkSet) -> Result<(), BookmarkError> {
		self.raw = Some(serde_json::to_string(set).map_err(BookmarkError::Encode)?);
		Ok(())
	}
}

/// Stores the set as a JSON array in a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so readers never observe a half-written set.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
	path: PathBuf,
}

impl JsonFileBackend {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Backend at the default file name inside `dir`.
	#[must_use]
	pub fn in_dir(dir: &Path) -> Self {
		Self::new(dir.join(BOOKMARKS_FILE_NAME))
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

fn io_error(path: &Path, source: io::Error) -> BookmarkError {
	BookmarkError::Io {
		path: path.to_path_buf(),
		source,
	}
}

impl BookmarkBackend for JsonFileBackend {
	fn load(&self) -> Result<BookmarkSet, BookmarkError> {
		match fs::read_to_string(&self.path) {
			Ok(raw) => decode(&raw),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BookmarkSet::new()),
			Err(err) => Err(io_error(&self.path, err)),
		}
	}

	fn save(&mut self, set: &BookmarkSet) -> Result<(), BookmarkError> {
		if let Some(dir) = self.path.parent()
			&& !dir.as_os_str().is_empty()
		{
			fs::create_dir_all(dir).map_err(|err| io_error(dir, err))?;
		}

		let data = serde_json::to_vec(set).map_err(BookmarkError::Encode)?;
		let tmp_path = self.path.with_extension("tmp");
		let written = write_synced(&tmp_path, &data)
			.map_err(|err| io_error(&tmp_path, err))
			.and_then(|()| {
				fs::rename(&tmp_path, &self.path).map_err(|err| io_error(&self.path, err))
			});
		if written.is_err() {
			let _ = fs::remove_file(&tmp_path);
		}
		written
	}
}

/// Write `data` to `path` and flush it to disk before returning.
fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
	let mut file = fs::File::create(path)?;
	file.write_all(data)?;
	file.sync_all()
}
