use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of bookmarked slugs.
///
/// Insertion order is preserved and membership is idempotent. Serialises as
/// a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
	slugs: IndexSet<String>,
}

impl BookmarkSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn contains(&self, slug: &str) -> bool {
		self.slugs.contains(slug)
	}

	/// Add `slug`; returns false if it was already present.
	pub fn insert(&mut self, slug: impl Into<String>) -> bool {
		self.slugs.insert(slug.into())
	}

	/// Remove `slug`, keeping the order of the rest; returns false if absent.
	pub fn remove(&mut self, slug: &str) -> bool {
		self.slugs.shift_remove(slug)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.slugs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.slugs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.slugs.iter().map(String::as_str)
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<String> {
		self.slugs.iter().cloned().collect()
	}
}

impl<S: Into<String>> FromIterator<S> for BookmarkSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			slugs: iter.into_iter().map(Into::into).collect(),
		}
	}
}
