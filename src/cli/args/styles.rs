use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use toolshelf::app_dirs;
use toolshelf::bookmarks::BOOKMARKS_FILE_NAME;

/// `--version` banner listing where toolshelf looks for its files.
pub(super) fn long_version() -> &'static str {
	let mut banner = String::from(env!("CARGO_PKG_VERSION"));
	let _ = writeln!(banner);
	let _ = writeln!(
		banner,
		"config: {}",
		describe(app_dirs::get_config_dir().map(|dir| dir.join("config.toml")))
	);
	let _ = writeln!(
		banner,
		"bookmarks: {}",
		describe(app_dirs::get_data_dir().map(|dir| dir.join(BOOKMARKS_FILE_NAME)))
	);
	Box::leak(banner.into_boxed_str())
}

fn describe(path: Result<PathBuf>) -> String {
	path.map_or_else(
		|err| format!("unresolved ({err})"),
		|path| path.display().to_string(),
	)
}

/// Help colours: bold green headings, cyan flags, yellow placeholders.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
