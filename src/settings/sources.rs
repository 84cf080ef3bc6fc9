use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use toolshelf::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "toolshelf";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".toolshelf.toml"));
		files.push(current_dir.join("toolshelf.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".toolshelf.toml")));
		assert!(files.iter().any(|path| path.ends_with("toolshelf.toml")));
	}

	#[test]
	fn explicit_files_are_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("extra.toml");
		fs::write(&path, "[listing]\nsort = \"dateNewest\"\nseed = 9\n").expect("write config");

		let cli = CliArgs::parse_from([
			"toolshelf",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
			"categories",
		]);
		let config = build_config(&cli).expect("config builds");
		assert_eq!(config.get_string("listing.sort").expect("sort"), "dateNewest");
		assert_eq!(config.get_int("listing.seed").expect("seed"), 9);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"toolshelf",
			"--no-config",
			"--config",
			"/definitely/not/here.toml",
			"categories",
		]);
		assert!(build_config(&cli).is_err());
	}
}
