//! Date parsing and recency checks for the `date-added` field.
//!
//! Dates arrive as loosely formatted strings. Anything that fails to parse is
//! treated as absent: it sorts as the Unix epoch and never counts as recent.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Default size of the recency window, in days.
pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// Parse a `date-added` value.
///
/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates (midnight UTC) and
/// `YYYY-MM-DDTHH:MM:SS` without an offset (UTC). Returns `None` for empty or
/// unparseable input.
#[must_use]
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return None;
	}

	if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
		return Some(parsed.with_timezone(&Utc));
	}
	if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
		return Some(parsed.and_utc());
	}
	NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.map(|midnight| midnight.and_utc())
}

/// Milliseconds since the Unix epoch, with missing dates pinned to zero.
#[must_use]
pub fn timestamp_millis_or_epoch(date: Option<&DateTime<Utc>>) -> i64 {
	date.map_or(0, DateTime::timestamp_millis)
}

/// Whether `added` falls inside the trailing `days`-day window ending at `now`.
///
/// Future dates are never recent, and neither are missing ones.
#[must_use]
pub fn is_recently_added(added: Option<&DateTime<Utc>>, days: u32, now: DateTime<Utc>) -> bool {
	let Some(added) = added else {
		return false;
	};
	let elapsed = now.signed_duration_since(*added);
	if elapsed < Duration::zero() {
		return false;
	}
	elapsed <= Duration::days(i64::from(days))
}

/// String flavour of [`is_recently_added`] for callers holding raw values.
#[must_use]
pub fn is_recently_added_str(value: Option<&str>, days: u32, now: DateTime<Utc>) -> bool {
	let parsed = value.and_then(parse_date);
	is_recently_added(parsed.as_ref(), days, now)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn now() -> DateTime<Utc> {
		parse_date("2024-06-15").expect("fixture date")
	}

	#[test]
	fn undefined_date_is_not_recent() {
		assert!(!is_recently_added_str(None, DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn today_is_recent() {
		assert!(is_recently_added_str(Some("2024-06-15"), DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn dates_within_window_are_recent() {
		assert!(is_recently_added_str(Some("2024-06-01"), DEFAULT_RECENCY_DAYS, now()));
		assert!(is_recently_added_str(Some("2024-05-20"), DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn dates_outside_window_are_not_recent() {
		assert!(!is_recently_added_str(Some("2024-05-01"), DEFAULT_RECENCY_DAYS, now()));
		assert!(!is_recently_added_str(Some("2024-01-01"), DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn custom_window_is_respected() {
		assert!(is_recently_added_str(Some("2024-06-10"), 7, now()));
		assert!(!is_recently_added_str(Some("2024-06-01"), 7, now()));
	}

	#[test]
	fn future_dates_are_not_recent() {
		assert!(!is_recently_added_str(Some("2024-06-16"), DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn window_boundary_is_inclusive() {
		assert!(is_recently_added_str(Some("2024-05-16"), DEFAULT_RECENCY_DAYS, now()));
		assert!(!is_recently_added_str(Some("2024-05-15T23:59:59Z"), DEFAULT_RECENCY_DAYS, now()));
	}

	#[test]
	fn invalid_strings_do_not_parse() {
		assert_eq!(parse_date("not-a-date"), None);
		assert_eq!(parse_date(""), None);
		assert_eq!(parse_date("   "), None);
	}

	#[test]
	fn bare_dates_parse_to_utc_midnight() {
		let parsed = parse_date("2024-06-15").expect("valid date");
		assert_eq!(parsed.to_rfc3339(), "2024-06-15T00:00:00+00:00");
	}

	#[test]
	fn full_timestamps_parse() {
		assert!(parse_date("2024-06-15T12:30:00Z").is_some());
		assert!(parse_date("2024-06-15T12:30:00").is_some());
		assert!(parse_date("2024-06-15T12:30:00+02:00").is_some());
	}

	#[test]
	fn missing_dates_sort_as_epoch() {
		assert_eq!(timestamp_millis_or_epoch(None), 0);
		let parsed = parse_date("1970-01-02").expect("valid date");
		assert_eq!(timestamp_millis_or_epoch(Some(&parsed)), 86_400_000);
	}
}
