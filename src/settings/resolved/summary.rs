use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Dataset: {}", config.dataset.display());
	let _ = writeln!(out, "  Bookmarks: {}", config.bookmarks.display());
	let _ = writeln!(out, "  Default sort: {}", config.listing.sort);
	match config.listing.seed {
		Some(seed) => {
			let _ = writeln!(out, "  Shuffle seed: {seed}");
		}
		None => {
			let _ = writeln!(out, "  Shuffle seed: (default)");
		}
	}
	let _ = writeln!(out, "  Recency window: {} days", config.listing.recency_days);
	let search = &config.search;
	let _ = writeln!(
		out,
		"  Search weights: title {} / body {} / category {} / tag {}",
		search.title_weight, search.body_weight, search.category_weight, search.tag_weight
	);
	let _ = writeln!(out, "  Search min score: {}", search.min_score);
	let _ = writeln!(out, "  Search max error ratio: {}", search.max_error_ratio);
	let _ = writeln!(
		out,
		"  Required ref: {}",
		config.check.required_ref.as_deref().unwrap_or("(not checked)")
	);
	match &config.log_file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Log file: (stderr)");
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use toolshelf::SearchTuning;
	use toolshelf::catalog::CheckOptions;

	use super::super::ListingDefaults;
	use super::*;

	#[test]
	fn summary_lists_every_section() {
		let config = ResolvedConfig {
			dataset: PathBuf::from("/srv/tools.json"),
			bookmarks: PathBuf::from("/srv/bookmarks.json"),
			listing: ListingDefaults {
				seed: Some(7),
				..ListingDefaults::default()
			},
			search: SearchTuning::default(),
			check: CheckOptions {
				required_ref: Some("shelf".into()),
			},
			log_file: None,
		};

		let summary = format_summary(&config);
		assert!(summary.contains("Dataset: /srv/tools.json"));
		assert!(summary.contains("Default sort: nameAsc"));
		assert!(summary.contains("Shuffle seed: 7"));
		assert!(summary.contains("Recency window: 30 days"));
		assert!(summary.contains("title 0.4 / body 0.3"));
		assert!(summary.contains("Search max error ratio: 0.35"));
		assert!(summary.contains("Required ref: shelf"));
		assert!(summary.contains("Log file: (stderr)"));
	}
}
