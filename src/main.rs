mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::{Report, Workflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	toolshelf::logging::init(resolved.log_file.as_deref())
		.context("failed to initialise logging")?;

	if cli.print_config {
		resolved.print_summary();
	}

	let mut workflow = Workflow::from_config(resolved)?;
	let report = workflow.run(&cli.command)?;
	emit(cli.output, &report)?;

	Ok(if report.is_success() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn emit(format: OutputFormat, report: &Report) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(report),
		OutputFormat::Json => print_json(report)?,
	}
	Ok(())
}
