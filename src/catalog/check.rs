//! Consistency checks over a dataset before it is published.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{Category, Entry};
use crate::ordering::compare_titles;

/// Kinds of problems reported by [`check_categories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
	MissingUrl,
	MissingProtocol,
	MissingRef,
	MissingSlug,
	DuplicateSlug,
	OutOfOrder,
}

impl IssueKind {
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			IssueKind::MissingUrl => "missing_url",
			IssueKind::MissingProtocol => "missing_protocol",
			IssueKind::MissingRef => "missing_ref",
			IssueKind::MissingSlug => "missing_slug",
			IssueKind::DuplicateSlug => "duplicate_slug",
			IssueKind::OutOfOrder => "out_of_order",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			IssueKind::MissingUrl => "Missing URLs",
			IssueKind::MissingProtocol => "Missing protocol (http/https)",
			IssueKind::MissingRef => "Missing ref parameter",
			IssueKind::MissingSlug => "Missing slugs",
			IssueKind::DuplicateSlug => "Duplicate slugs",
			IssueKind::OutOfOrder => "Out of alphabetical order",
		}
	}
}

/// One finding, located by category key and entry title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataIssue {
	pub kind: IssueKind,
	pub category: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl fmt::Display for DataIssue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.title, self.category)?;
		if let Some(detail) = &self.detail {
			write!(f, ": {detail}")?;
		}
		Ok(())
	}
}

/// Knobs for [`check_categories`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
	/// Value every URL must carry in its `ref` query parameter, when set.
	pub required_ref: Option<String>,
}

/// Result of checking a whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataReport {
	pub total: usize,
	pub issues: Vec<DataIssue>,
}

impl DataReport {
	#[must_use]
	pub fn is_clean(&self) -> bool {
		self.issues.is_empty()
	}

	/// Issues of one kind, in discovery order.
	pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &DataIssue> {
		self.issues.iter().filter(move |issue| issue.kind == kind)
	}
}

/// Check every entry of `categories`.
#[must_use]
pub fn check_categories(categories: &[Category], options: &CheckOptions) -> DataReport {
	let mut report = DataReport::default();
	let mut seen_slugs: HashMap<&str, &str> = HashMap::new();

	for category in categories {
		let key = category.category.as_str();
		let mut previous: Option<&Entry> = None;
		for entry in &category.content {
			report.total += 1;
			check_entry(entry, key, options, &mut report.issues);

			if let Some(slug) = entry.slug.as_deref().filter(|slug| !slug.is_empty()) {
				if let Some(first) = seen_slugs.get(slug) {
					report.issues.push(issue(
						IssueKind::DuplicateSlug,
						key,
						entry,
						Some(format!("slug `{slug}` already used by {first}")),
					));
				} else {
					seen_slugs.insert(slug, entry.title.as_str());
				}
			}

			if let Some(last) = previous
				&& compare_titles(&entry.title, &last.title) == Ordering::Less
			{
				report.issues.push(issue(
					IssueKind::OutOfOrder,
					key,
					entry,
					Some(format!("should be before {}", last.title)),
				));
			}
			previous = Some(entry);
		}
	}

	report
}

fn check_entry(entry: &Entry, category: &str, options: &CheckOptions, issues: &mut Vec<DataIssue>) {
	if entry.url.is_empty() {
		issues.push(issue(IssueKind::MissingUrl, category, entry, None));
	} else {
		if !has_http_scheme(&entry.url) {
			issues.push(issue(IssueKind::MissingProtocol, category, entry, None));
		}
		if let Some(required) = options.required_ref.as_deref()
			&& query_param(&entry.url, "ref") != Some(required)
		{
			issues.push(issue(
				IssueKind::MissingRef,
				category,
				entry,
				Some(format!("expected ref={required}")),
			));
		}
	}

	if entry.slug.as_deref().is_none_or(str::is_empty) {
		issues.push(issue(IssueKind::MissingSlug, category, entry, None));
	}
}

fn issue(kind: IssueKind, category: &str, entry: &Entry, detail: Option<String>) -> DataIssue {
	DataIssue {
		kind,
		category: category.to_string(),
		title: entry.title.clone(),
		detail,
	}
}

fn has_http_scheme(url: &str) -> bool {
	url.starts_with("http://") || url.starts_with("https://")
}

/// First value of `name` in the query string of `url`.
fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
	let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
	let (_, query) = without_fragment.split_once('?')?;
	query.split('&').find_map(|pair| {
		let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
		(key == name).then_some(value)
	})
}
