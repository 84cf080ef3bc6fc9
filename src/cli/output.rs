use std::fmt::Write;

use anyhow::Result;
use toolshelf::Record;
use toolshelf::catalog::{DataReport, IssueKind};
use unicode_width::UnicodeWidthStr;

use crate::workflow::{
	BookmarkChange, BookmarkOp, BookmarksReport, ListingReport, Report, SearchReport,
};

/// Print a plain-text representation of a command report.
pub(crate) fn print_plain(report: &Report) {
	print!("{}", format_plain(report));
}

/// Render a command report as human readable text.
pub(crate) fn format_plain(report: &Report) -> String {
	let mut out = String::new();
	match report {
		Report::Listing(listing) => write_listing(&mut out, listing),
		Report::Search(search) => write_search(&mut out, search),
		Report::Bookmarks(bookmarks) => write_bookmarks(&mut out, bookmarks),
		Report::BookmarkChange(change) => write_change(&mut out, change),
		Report::Categories { categories } => {
			let width = column_width(categories.iter().map(|info| info.key.as_str()));
			for info in categories {
				let _ = writeln!(out, "{}  {} ({})", pad(&info.key, width), info.title, info.count);
			}
		}
		Report::Check(check) => write_check(&mut out, check),
	}
	out
}

/// Format a command report as a JSON string.
pub(crate) fn format_json(report: &Report) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of a command report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
	println!("{}", format_json(report)?);
	Ok(())
}

fn write_listing(out: &mut String, listing: &ListingReport) {
	if listing.empty_search_in_category {
		let query = listing.query.as_deref().unwrap_or_default();
		let _ = writeln!(
			out,
			"No results found for \"{query}\" in {}. Try searching all categories.",
			listing.filter
		);
		return;
	}

	write_records(out, &listing.records);
	let _ = write!(out, "Showing {} of {}", listing.records.len(), listing.total);
	if let Some(seed) = listing.seed {
		let _ = write!(out, " (seed {seed})");
	}
	if listing.has_more {
		let _ = write!(out, "; use --pages to reveal more");
	}
	out.push('\n');
}

fn write_search(out: &mut String, search: &SearchReport) {
	if search.hits.is_empty() {
		let _ = writeln!(out, "No results found for \"{}\"", search.query);
		return;
	}
	let width = column_width(search.hits.iter().map(|hit| hit.record.title.as_str()));
	for hit in &search.hits {
		let _ = writeln!(
			out,
			"{:>5}  {}  {}",
			hit.score,
			pad(&hit.record.title, width),
			hit.record.category
		);
	}
	let _ = writeln!(out, "{} of {} hits", search.hits.len(), search.total);
}

fn write_bookmarks(out: &mut String, bookmarks: &BookmarksReport) {
	if bookmarks.records.is_empty() {
		out.push_str("No saved tools yet. Bookmark one with `toolshelf bookmarks add <slug>`.\n");
	} else {
		write_records(out, &bookmarks.records);
		let noun = if bookmarks.count == 1 { "tool" } else { "tools" };
		let _ = writeln!(out, "{} {noun} saved", bookmarks.count);
	}
	if bookmarks.dangling > 0 {
		let _ = writeln!(out, "{} bookmark(s) no longer match a record", bookmarks.dangling);
	}
}

fn write_change(out: &mut String, change: &BookmarkChange) {
	let slug = &change.slug;
	let message = match (change.op, change.changed) {
		(BookmarkOp::Add, true) => format!("Bookmarked {slug}"),
		(BookmarkOp::Add, false) if change.bookmarked => format!("{slug} is already bookmarked"),
		(BookmarkOp::Remove, true) => format!("Removed bookmark {slug}"),
		(BookmarkOp::Remove, false) if !change.bookmarked => format!("{slug} is not bookmarked"),
		(BookmarkOp::Toggle, true) if change.bookmarked => format!("Bookmarked {slug}"),
		(BookmarkOp::Toggle, true) => format!("Removed bookmark {slug}"),
		_ => format!("Bookmarks unchanged for {slug}"),
	};
	let _ = writeln!(out, "{message}");
	if !change.known {
		let _ = writeln!(out, "note: no record currently uses the slug {slug}");
	}
}

fn write_check(out: &mut String, check: &DataReport) {
	let _ = writeln!(out, "Total records processed: {}", check.total);
	let _ = writeln!(out, "Issues found: {}", check.issues.len());

	let mut kinds: Vec<IssueKind> = check.issues.iter().map(|issue| issue.kind).collect();
	kinds.sort();
	kinds.dedup();
	for kind in kinds {
		let _ = writeln!(out, "\n{}:", kind.label());
		for issue in check.of_kind(kind) {
			let _ = writeln!(out, "   - {issue}");
		}
	}
}

fn write_records(out: &mut String, records: &[Record]) {
	let title_width = column_width(records.iter().map(|record| record.title.as_str()));
	let category_width = column_width(records.iter().map(|record| record.category.as_str()));
	for record in records {
		let date = record.date_added.as_deref().unwrap_or("-");
		let _ = writeln!(
			out,
			"{}  {}  {:<10}  {}",
			pad(&record.title, title_width),
			pad(&record.category, category_width),
			date,
			record.url
		);
	}
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
	values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align `value` to `width` terminal columns.
fn pad(value: &str, width: usize) -> String {
	let fill = width.saturating_sub(value.width());
	format!("{value}{}", " ".repeat(fill))
}
