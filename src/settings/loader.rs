use anyhow::{Context, Result};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the toolshelf configuration for one invocation.
///
/// Config files and `TOOLSHELF__*` variables are merged first; the dataset,
/// bookmark and log paths given on the command line win over both.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the toolshelf settings layout")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve()?;
	debug!(
		dataset = %resolved.dataset.display(),
		bookmarks = %resolved.bookmarks.display(),
		"configuration resolved"
	);
	Ok(resolved)
}
