use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Record;

/// Total order over records.
pub type Comparator = fn(&Record, &Record) -> Ordering;

/// Named orderings understood by the listing pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
	#[default]
	NameAsc,
	NameDesc,
	DateNewest,
	DateOldest,
	Random,
}

impl SortKey {
	/// Stable identifier used in configuration and on the command line.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			SortKey::NameAsc => "nameAsc",
			SortKey::NameDesc => "nameDesc",
			SortKey::DateNewest => "dateNewest",
			SortKey::DateOldest => "dateOldest",
			SortKey::Random => "random",
		}
	}

	/// Every key in menu order.
	#[must_use]
	pub const fn all() -> [SortKey; 5] {
		[
			SortKey::NameAsc,
			SortKey::NameDesc,
			SortKey::DateNewest,
			SortKey::DateOldest,
			SortKey::Random,
		]
	}

	/// Parse a key, falling back to [`SortKey::NameAsc`] for anything unknown.
	#[must_use]
	pub fn parse_lenient(value: &str) -> Self {
		value.parse().unwrap_or_default()
	}

	/// Comparator for this key; `None` for [`SortKey::Random`].
	#[must_use]
	pub fn comparator(self) -> Option<Comparator> {
		match self {
			SortKey::NameAsc => Some(name_asc),
			SortKey::NameDesc => Some(name_desc),
			SortKey::DateNewest => Some(date_newest),
			SortKey::DateOldest => Some(date_oldest),
			SortKey::Random => None,
		}
	}

	/// Same key, with [`SortKey::Random`] replaced by the default order.
	///
	/// Used by views that only offer deterministic orderings.
	#[must_use]
	pub fn deterministic(self) -> Self {
		match self {
			SortKey::Random => SortKey::NameAsc,
			other => other,
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Error returned by the strict [`FromStr`] implementation of [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
	type Err = UnknownSortKey;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized: String = value
			.trim()
			.chars()
			.filter(|ch| *ch != '-' && *ch != '_')
			.collect::<String>()
			.to_ascii_lowercase();
		match normalized.as_str() {
			"nameasc" | "name" => Ok(SortKey::NameAsc),
			"namedesc" => Ok(SortKey::NameDesc),
			"datenewest" | "newest" => Ok(SortKey::DateNewest),
			"dateoldest" | "oldest" => Ok(SortKey::DateOldest),
			"random" | "shuffle" => Ok(SortKey::Random),
			_ => Err(UnknownSortKey(value.to_string())),
		}
	}
}

/// Locale-style title comparison.
///
/// Compares case-insensitively first, then puts lowercase ahead of uppercase,
/// then falls back to raw order so distinct titles never tie.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
	let folded = a
		.chars()
		.flat_map(char::to_lowercase)
		.cmp(b.chars().flat_map(char::to_lowercase));
	folded
		.then_with(|| {
			a.chars()
				.map(char::is_uppercase)
				.cmp(b.chars().map(char::is_uppercase))
		})
		.then_with(|| a.cmp(b))
}

pub fn name_asc(a: &Record, b: &Record) -> Ordering {
	compare_titles(&a.title, &b.title)
}

pub fn name_desc(a: &Record, b: &Record) -> Ordering {
	compare_titles(&b.title, &a.title)
}

pub fn date_newest(a: &Record, b: &Record) -> Ordering {
	b.added_millis().cmp(&a.added_millis())
}

pub fn date_oldest(a: &Record, b: &Record) -> Ordering {
	a.added_millis().cmp(&b.added_millis())
}

/// Stable sort of `items` with `comparator`, returned as a new vector.
#[must_use]
pub fn sort_by_comparator<T>(items: &[T], comparator: Comparator) -> Vec<T>
where
	T: AsRef<Record> + Clone,
{
	let mut sorted = items.to_vec();
	sorted.sort_by(|a, b| comparator(a.as_ref(), b.as_ref()));
	sorted
}

/// Stable sort of `items` by a deterministic `key`.
///
/// [`SortKey::Random`] has no comparator here and falls back to
/// [`SortKey::NameAsc`]; use the shuffle engine for random order.
#[must_use]
pub fn sort_records<T>(items: &[T], key: SortKey) -> Vec<T>
where
	T: AsRef<Record> + Clone,
{
	let comparator = key.comparator().unwrap_or(name_asc);
	sort_by_comparator(items, comparator)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Entry;

	fn record(title: &str, date: Option<&str>) -> Record {
		let mut entry = Entry::new(title)
			.with_body(format!("Description for {title}"))
			.with_url(format!("https://example.com/{}", title.to_lowercase()));
		if let Some(date) = date {
			entry = entry.with_date(date);
		}
		Record::from_entry(&entry, "misc")
	}

	fn fruit() -> Vec<Record> {
		vec![
			record("Zebra", Some("2024-03-01")),
			record("Apple", Some("2024-01-15")),
			record("Mango", Some("2024-02-20")),
		]
	}

	fn titles(records: &[Record]) -> Vec<&str> {
		records.iter().map(|record| record.title.as_str()).collect()
	}

	#[test]
	fn name_orders() {
		let records = fruit();
		assert_eq!(titles(&sort_records(&records, SortKey::NameAsc)), ["Apple", "Mango", "Zebra"]);
		assert_eq!(titles(&sort_records(&records, SortKey::NameDesc)), ["Zebra", "Mango", "Apple"]);
	}

	#[test]
	fn date_orders() {
		let records = fruit();
		assert_eq!(titles(&sort_records(&records, SortKey::DateNewest)), ["Zebra", "Mango", "Apple"]);
		assert_eq!(titles(&sort_records(&records, SortKey::DateOldest)), ["Apple", "Mango", "Zebra"]);
	}

	#[test]
	fn undated_records_sort_as_oldest() {
		let records = vec![
			record("Dated", Some("2020-01-01")),
			record("Undated", None),
			record("Garbled", Some("soon")),
		];
		assert_eq!(
			titles(&sort_records(&records, SortKey::DateNewest)),
			["Dated", "Undated", "Garbled"]
		);
		assert_eq!(
			titles(&sort_records(&records, SortKey::DateOldest)),
			["Undated", "Garbled", "Dated"]
		);
	}

	#[test]
	fn equal_dates_keep_input_order() {
		let records = vec![
			record("B", Some("2024-01-01")),
			record("A", Some("2024-01-01")),
			record("C", Some("2024-01-01")),
		];
		assert_eq!(titles(&sort_records(&records, SortKey::DateNewest)), ["B", "A", "C"]);
	}

	#[test]
	fn sorting_returns_new_vector_and_leaves_input() {
		let records = vec![record("Beta", None), record("Alpha", None), record("Gamma", None)];
		let before = titles(&records).iter().map(|t| t.to_string()).collect::<Vec<_>>();
		let sorted = sort_records(&records, SortKey::NameDesc);
		assert_eq!(titles(&records), before);
		assert_eq!(titles(&sorted), ["Gamma", "Beta", "Alpha"]);
	}

	#[test]
	fn sorts_borrowed_records() {
		let records = fruit();
		let borrowed: Vec<&Record> = records.iter().collect();
		let sorted = sort_records(&borrowed, SortKey::NameAsc);
		assert_eq!(sorted[0].title, "Apple");
	}

	#[test]
	fn titles_compare_case_insensitively() {
		assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
		assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
		assert_eq!(compare_titles("Apple", "Apple"), Ordering::Equal);
	}

	#[test]
	fn keys_parse_leniently() {
		assert_eq!(SortKey::parse_lenient("dateNewest"), SortKey::DateNewest);
		assert_eq!(SortKey::parse_lenient("date-oldest"), SortKey::DateOldest);
		assert_eq!(SortKey::parse_lenient("RANDOM"), SortKey::Random);
		assert_eq!(SortKey::parse_lenient("bogus"), SortKey::NameAsc);
		assert!("bogus".parse::<SortKey>().is_err());
	}

	#[test]
	fn ids_round_trip() {
		for key in SortKey::all() {
			assert_eq!(key.id().parse::<SortKey>(), Ok(key));
		}
	}
}
