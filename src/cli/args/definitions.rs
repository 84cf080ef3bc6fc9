use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, SortArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `toolshelf` binary.
#[derive(Parser, Debug)]
#[command(
	name = "toolshelf",
	version,
	long_version = long_version(),
	about = "Query a curated directory of tools and articles",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TOOLSHELF_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		global = true,
		help = "Dataset file to load (default: ./tools.json)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'b',
		long = "bookmarks",
		value_name = "FILE",
		global = true,
		help = "Bookmark file to read and update (default: bookmarks.json in the data directory)"
	)]
	pub(crate) bookmarks: Option<PathBuf>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		global = true,
		help = "Write logs to this file instead of stderr (default: stderr)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
	/// List records page by page.
	List(ListArgs),
	/// Fuzzy-search every record.
	Search(SearchArgs),
	/// Show or change bookmarks.
	Bookmarks {
		#[command(subcommand)]
		action: BookmarkAction,
	},
	/// List categories with their record counts.
	Categories,
	/// Validate the dataset; exits non-zero when issues are found.
	Check,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ListArgs {
	#[arg(
		short = 'C',
		long,
		value_name = "KEY",
		help = "Only list one category (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short,
		long,
		value_enum,
		help = "Order of the listing (default: listing.sort)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Seed for random order (default: listing.seed, then 42)"
	)]
	pub(crate) seed: Option<u32>,
	#[arg(
		short,
		long,
		value_name = "QUERY",
		help = "Fuzzy query applied before ordering (default: none)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long,
		help = "Only show recently added records (default: disabled)"
	)]
	pub(crate) recent: bool,
	#[arg(
		long = "recent-days",
		value_name = "DAYS",
		help = "Length of the recency window (default: listing.recency_days)"
	)]
	pub(crate) recent_days: Option<u32>,
	#[arg(
		long,
		value_name = "NUM",
		default_value_t = 1,
		help = "Number of pages to reveal"
	)]
	pub(crate) pages: usize,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SearchArgs {
	#[arg(value_name = "QUERY", help = "Text to search for")]
	pub(crate) query: String,
	#[arg(
		short = 'C',
		long,
		value_name = "KEY",
		help = "Only search one category (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short,
		long,
		value_name = "NUM",
		help = "Maximum number of hits to print (default: unlimited)"
	)]
	pub(crate) limit: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum BookmarkAction {
	/// Print bookmarked records.
	List {
		#[arg(
			short,
			long,
			value_enum,
			help = "Order of the bookmarks (default: name-asc)"
		)]
		sort: Option<SortArg>,
	},
	/// Bookmark a record by slug.
	Add { slug: String },
	/// Remove a bookmark by slug.
	Remove { slug: String },
	/// Flip a bookmark by slug.
	Toggle { slug: String },
}
