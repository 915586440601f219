//! Command-line interface definition.
//!
//! Flags are layered over the persistent config file:
//! **CLI argument > config file > hardcoded default**.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::config::{
    DiscoveryOptions, DocfxOptions, ExecutionOptions, FileConfig, file::expand_tilde,
};

#[derive(Parser, Debug)]
struct DocfxArgs {
    /// Path to the docfx executable (searched on PATH when omitted)
    #[arg(long, value_name = "PATH")]
    docfx_path: Option<PathBuf>,

    /// docfx site template
    #[arg(long, value_name = "NAME")]
    template: Option<String>,

    /// Markdown engine passed to docfx build
    #[arg(long, value_name = "NAME")]
    markdown_engine: Option<String>,
}

#[derive(Parser, Debug)]
struct ExecutionArgs {
    /// Only list discovered projects and the docfx commands that would run
    #[arg(long)]
    dry_run: bool,

    /// Suppress status output
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Show debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "docfx-api-docs")]
#[command(version)]
#[command(about = "Generate API documentation for the .NET projects in the current directory using docfx")]
pub struct Cli {
    /// Path to the generated API documentation (replaced if it exists)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// docfx options
    #[command(flatten)]
    docfx: DocfxArgs,

    /// Execution options
    #[command(flatten)]
    execution: ExecutionArgs,
}

impl Cli {
    /// Destination directory for the generated site.
    ///
    /// # Errors
    ///
    /// Returns an error when neither `--output` nor the config file sets it.
    pub fn output(&self, config: &FileConfig) -> Result<PathBuf> {
        self.output
            .clone()
            .or_else(|| config.output.as_deref().map(expand_tilde))
            .ok_or_else(|| anyhow!("--output is required (or set `output` in the config file)"))
    }

    #[must_use]
    pub fn docfx_path(&self, config: &FileConfig) -> Option<PathBuf> {
        self.docfx
            .docfx_path
            .clone()
            .or_else(|| config.docfx_path.as_deref().map(expand_tilde))
    }

    #[must_use]
    pub fn docfx_options(&self, config: &FileConfig) -> DocfxOptions {
        let defaults = DocfxOptions::default();

        DocfxOptions {
            template: self
                .docfx
                .template
                .clone()
                .or_else(|| config.docfx.template.clone())
                .unwrap_or(defaults.template),
            markdown_engine: self
                .docfx
                .markdown_engine
                .clone()
                .or_else(|| config.docfx.markdown_engine.clone())
                .unwrap_or(defaults.markdown_engine),
        }
    }

    #[must_use]
    pub fn discovery_options(&self, config: &FileConfig) -> DiscoveryOptions {
        let defaults = DiscoveryOptions::default();

        DiscoveryOptions {
            ignore_file: config
                .discovery
                .ignore_file
                .clone()
                .unwrap_or(defaults.ignore_file),
            test_suffix: config
                .discovery
                .test_suffix
                .clone()
                .unwrap_or(defaults.test_suffix),
            descriptor_extension: defaults.descriptor_extension,
        }
    }

    #[must_use]
    pub const fn execution_options(&self) -> ExecutionOptions {
        ExecutionOptions {
            dry_run: self.execution.dry_run,
            quiet: self.execution.quiet,
        }
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.execution.verbose
    }
}
