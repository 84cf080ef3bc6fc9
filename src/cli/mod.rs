mod args;
mod output;

pub(crate) use args::{
	BookmarkAction, CliArgs, Command, ListArgs, OutputFormat, SearchArgs, parse_cli,
};
pub(crate) use output::{print_json, print_plain};
