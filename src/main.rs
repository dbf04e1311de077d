//! tfmod - Terraform module source classifier CLI tool
//!
//! This tool scans Terraform configuration for `module` blocks and reports,
//! for each one, the datasource that can resolve it:
//! - GitHub tags (`github.com/owner/repo?ref=...`)
//! - Git tags (`git::https://host/path.git?ref=...`)
//! - Terraform Registry (`namespace/name/provider`)

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tfmod::cli::CliArgs;
use tfmod::output::{create_formatter, OutputConfig};
use tfmod::scanner::Scanner;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "tfmod=debug" } else { "tfmod=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("tfmod v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    let scanner = Scanner::new(args.clone())?;
    let result = scanner.run();

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if args.verbose && !result.errors.is_empty() {
        eprintln!();
        eprintln!("Errors encountered:");
        for error in &result.errors {
            eprintln!("  - {}", error);
        }
    }

    if result.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Partial success - some files could not be parsed
        Ok(ExitCode::from(2))
    }
}
