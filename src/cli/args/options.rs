use clap::ValueEnum;
use toolshelf::SortKey;

/// Sort orders accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	NameAsc,
	NameDesc,
	DateNewest,
	DateOldest,
	Random,
}

impl From<SortArg> for SortKey {
	fn from(value: SortArg) -> Self {
		match value {
			SortArg::NameAsc => SortKey::NameAsc,
			SortArg::NameDesc => SortKey::NameDesc,
			SortArg::DateNewest => SortKey::DateNewest,
			SortArg::DateOldest => SortKey::DateOldest,
			SortArg::Random => SortKey::Random,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
