use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::{parse_date, timestamp_millis_or_epoch};

/// One listed item as it appears inside a category of the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	pub title: String,
	#[serde(default)]
	pub body: String,
	#[serde(default)]
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	#[serde(
		rename = "date-added",
		alias = "dateAdded",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub date_added: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
}

impl Entry {
	/// Build an entry with only a title; the remaining fields are empty.
	#[must_use]
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			body: String::new(),
			url: String::new(),
			tag: None,
			date_added: None,
			slug: None,
		}
	}

	#[must_use]
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	#[must_use]
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	#[must_use]
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	#[must_use]
	pub fn with_date(mut self, date: impl Into<String>) -> Self {
		self.date_added = Some(date.into());
		self
	}

	#[must_use]
	pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
		self.slug = Some(slug.into());
		self
	}
}

/// A named group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	/// Machine key used for filtering.
	pub category: String,
	/// Display name.
	pub title: String,
	#[serde(default)]
	pub content: Vec<Entry>,
}

impl Category {
	#[must_use]
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			category: key.into(),
			title: title.into(),
			content: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
		self.content = entries;
		self
	}
}

/// An entry flattened out of its category, ready for querying.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
	pub title: String,
	pub body: String,
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	#[serde(rename = "date-added", skip_serializing_if = "Option::is_none")]
	pub date_added: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
	pub category: String,
	#[serde(skip)]
	added_at: Option<DateTime<Utc>>,
}

impl Record {
	/// Flatten `entry` and tag it with the owning category key.
	#[must_use]
	pub fn from_entry(entry: &Entry, category: &str) -> Self {
		let added_at = entry.date_added.as_deref().and_then(parse_date);
		Self {
			title: entry.title.clone(),
			body: entry.body.clone(),
			url: entry.url.clone(),
			tag: entry.tag.clone(),
			date_added: entry.date_added.clone(),
			slug: entry.slug.clone(),
			category: category.to_string(),
			added_at,
		}
	}

	/// Parsed `date-added`, or `None` when missing or invalid.
	#[must_use]
	pub fn added_at(&self) -> Option<&DateTime<Utc>> {
		self.added_at.as_ref()
	}

	/// Sort key for date ordering; undated records sit at the epoch.
	#[must_use]
	pub fn added_millis(&self) -> i64 {
		timestamp_millis_or_epoch(self.added_at())
	}

	/// Non-empty slug, if the record has one.
	#[must_use]
	pub fn slug(&self) -> Option<&str> {
		self.slug.as_deref().filter(|slug| !slug.is_empty())
	}
}

impl AsRef<Record> for Record {
	fn as_ref(&self) -> &Record {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entries_accept_both_date_spellings() {
		let dashed: Entry =
			serde_json::from_str(r#"{"title":"A","date-added":"2024-01-01"}"#).expect("parse");
		let camel: Entry =
			serde_json::from_str(r#"{"title":"A","dateAdded":"2024-01-01"}"#).expect("parse");
		assert_eq!(dashed.date_added.as_deref(), Some("2024-01-01"));
		assert_eq!(dashed, camel);
	}

	#[test]
	fn invalid_dates_flatten_to_epoch() {
		let record = Record::from_entry(&Entry::new("A").with_date("someday"), "misc");
		assert!(record.added_at().is_none());
		assert_eq!(record.added_millis(), 0);
		assert_eq!(record.category, "misc");
	}

	#[test]
	fn empty_slugs_are_ignored() {
		let record = Record::from_entry(&Entry::new("A").with_slug(""), "misc");
		assert_eq!(record.slug(), None);
	}
}
