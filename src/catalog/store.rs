use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CatalogError;
use super::record::{Category, Record};

/// Filter value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// On-disk layout of the dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFile {
	#[serde(default)]
	pub tools: Vec<Category>,
}

/// Display metadata for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
	pub key: String,
	pub title: String,
	pub count: usize,
}

/// Immutable, flattened view of the dataset.
///
/// Records keep the dataset order: categories in file order, entries in
/// category order. The source categories are retained untouched for
/// consumers that need them.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
	categories: Vec<Category>,
	records: Vec<Record>,
}

impl RecordStore {
	/// Flatten `categories` into a queryable store.
	#[must_use]
	pub fn from_categories(categories: Vec<Category>) -> Self {
		let records = categories
			.iter()
			.flat_map(|category| {
				category
					.content
					.iter()
					.map(|entry| Record::from_entry(entry, &category.category))
			})
			.collect();
		Self {
			categories,
			records,
		}
	}

	/// Parse a dataset from its JSON text.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Parse`] when the text is not a valid dataset.
	pub fn from_json(text: &str) -> Result<Self, CatalogError> {
		let file: DatasetFile = serde_json::from_str(text).map_err(CatalogError::Parse)?;
		Ok(Self::from_categories(file.tools))
	}

	/// Load and flatten the dataset stored at `path`.
	///
	/// # Errors
	///
	/// Returns an error when the file cannot be read or parsed.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let store = Self::from_json(&text).map_err(|err| err.at(path))?;
		debug!(
			path = %path.display(),
			categories = store.categories.len(),
			records = store.records.len(),
			"loaded dataset"
		);
		Ok(store)
	}

	/// All records, in dataset order.
	#[must_use]
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Source categories as loaded.
	#[must_use]
	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Category keys, titles and record counts in dataset order.
	#[must_use]
	pub fn category_infos(&self) -> Vec<CategoryInfo> {
		self.categories
			.iter()
			.map(|category| CategoryInfo {
				key: category.category.clone(),
				title: category.title.clone(),
				count: category.content.len(),
			})
			.collect()
	}

	/// Whether `filter` selects `record`.
	#[must_use]
	pub fn matches_filter(record: &Record, filter: &str) -> bool {
		filter == ALL_CATEGORIES || record.category == filter
	}

	/// Records in the category named by `filter`, or every record for `all`.
	#[must_use]
	pub fn in_category(&self, filter: &str) -> Vec<&Record> {
		self.records
			.iter()
			.filter(|record| Self::matches_filter(record, filter))
			.collect()
	}

	/// First record carrying `slug`.
	#[must_use]
	pub fn find_by_slug(&self, slug: &str) -> Option<&Record> {
		if slug.is_empty() {
			return None;
		}
		self.records.iter().find(|record| record.slug() == Some(slug))
	}
}
