//! # docfx-api-docs
//!
//! Generates static API documentation for the .NET projects in the current
//! directory.
//!
//! Every immediate subdirectory `Foo` holding a `Foo/Foo.csproj` is treated as
//! a project, except test projects (`*.Tests`) and directories named in
//! `.gitignore`. docfx extracts their API metadata and renders it with the
//! `statictoc` template; the site then replaces the `--output` directory.
//!
//! ## Usage
//!
//! ```bash
//! # docfx on PATH
//! docfx-api-docs --output docs/api
//!
//! # Explicit docfx location
//! docfx-api-docs --docfx-path ~/tools/docfx/docfx.exe --output docs/api
//!
//! # Show what would run
//! docfx-api-docs --output docs/api --dry-run
//! ```

use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use docfx_api_docs::{Pipeline, cli::Cli, config::FileConfig};
use tracing_subscriber::{EnvFilter, fmt};

/// Entry point for the docfx-api-docs application.
///
/// This function handles all errors by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and sets up logging
/// 2. Loads the persistent configuration file (if present)
/// 3. Layers CLI arguments over the config file
/// 4. Runs the documentation pipeline from the current directory
///
/// # Errors
///
/// This function can return errors from:
/// - Missing `--output`
/// - Resolving the current directory
/// - docfx resolution, project discovery, docfx itself, or moving the output
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose() { "debug" } else { "warn" })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let file_config = FileConfig::load().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        FileConfig::default()
    });

    let output = args.output(&file_config)?;
    let root = std::env::current_dir().context("Failed to read the current directory")?;

    let pipeline = Pipeline::new(root, output)
        .with_docfx_path(args.docfx_path(&file_config))
        .with_docfx_options(args.docfx_options(&file_config))
        .with_discovery_options(args.discovery_options(&file_config))
        .with_execution_options(args.execution_options());

    pipeline.run()?;

    Ok(())
}
