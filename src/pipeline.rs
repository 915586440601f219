//! End-to-end documentation run.
//!
//! The stages run strictly in order: resolve docfx, discover projects, run
//! both docfx phases in a temporary workspace, then replace the destination.
//! The destination is only touched once every earlier stage has succeeded.

use std::{ffi::OsString, path::PathBuf};

use colored::Colorize;

use crate::{
    config::{DiscoveryOptions, DocfxOptions, ExecutionOptions},
    discovery::Discoverer,
    docfx::{Docfx, Workspace},
    error::Result,
    output::finalize,
    project::Projects,
    resolver::resolve_tool,
};

/// What a completed run did.
#[derive(Debug)]
pub struct Report {
    /// docfx executable that was (or would have been) run
    pub tool: PathBuf,

    /// Projects passed to `docfx metadata`
    pub projects: Projects,

    /// Where the site was written, `None` for a dry run
    pub output: Option<PathBuf>,
}

/// A configured documentation run.
pub struct Pipeline {
    root: PathBuf,
    output: PathBuf,
    docfx_path: Option<PathBuf>,
    path_var: Option<OsString>,
    temp_root: Option<PathBuf>,
    docfx_options: DocfxOptions,
    discovery_options: DiscoveryOptions,
    execution_options: ExecutionOptions,
}

impl Pipeline {
    /// Create a run scanning `root` and writing the site to `output`.
    ///
    /// docfx is looked up on the process's `PATH` unless a path is set with
    /// [`Pipeline::with_docfx_path`].
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            docfx_path: None,
            path_var: std::env::var_os("PATH"),
            temp_root: None,
            docfx_options: DocfxOptions::default(),
            discovery_options: DiscoveryOptions::default(),
            execution_options: ExecutionOptions::default(),
        }
    }

    #[must_use]
    pub fn with_docfx_path(mut self, path: Option<PathBuf>) -> Self {
        self.docfx_path = path;
        self
    }

    /// Override the `PATH` value used to find docfx.
    #[must_use]
    pub fn with_path_var(mut self, path_var: Option<OsString>) -> Self {
        self.path_var = path_var;
        self
    }

    /// Create the temporary workspace under `dir` rather than the system temp directory.
    #[must_use]
    pub fn with_temp_root(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_root = dir;
        self
    }

    #[must_use]
    pub fn with_docfx_options(mut self, options: DocfxOptions) -> Self {
        self.docfx_options = options;
        self
    }

    #[must_use]
    pub fn with_discovery_options(mut self, options: DiscoveryOptions) -> Self {
        self.discovery_options = options;
        self
    }

    #[must_use]
    pub fn with_execution_options(mut self, options: ExecutionOptions) -> Self {
        self.execution_options = options;
        self
    }

    /// Execute the run.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage. docfx resolution happens
    /// before the filesystem is scanned, and the workspace is removed before
    /// the error is returned.
    pub fn run(&self) -> Result<Report> {
        let tool = resolve_tool(self.docfx_path.as_deref(), self.path_var.as_deref())?;
        let quiet = self.execution_options.quiet;

        let projects = Discoverer::new(self.discovery_options.clone()).discover(&self.root)?;

        if !quiet {
            println!("Found {} projects", projects.len());
            projects.print_summary();
            if projects.is_empty() {
                println!("{}", "⚠️  No projects to document".yellow());
            }
        }

        let docfx = Docfx::new(tool, self.docfx_options.clone()).with_quiet(quiet);

        if self.execution_options.dry_run {
            if !quiet {
                println!("\n{}", "🧪 Dry run, would run:".yellow());
                println!("  {}", docfx.command_line(&Docfx::metadata_args(&projects)));
                println!("  {}", docfx.command_line(&docfx.build_args()));
            }

            return Ok(Report {
                tool: docfx.tool().to_path_buf(),
                projects,
                output: None,
            });
        }

        let workspace = match &self.temp_root {
            Some(dir) => Workspace::create_in(dir)?,
            None => Workspace::create()?,
        };
        tracing::debug!("Working directory {}", workspace.path().display());

        let site = docfx.generate(&projects, &workspace)?;
        finalize(&site, &self.output)?;

        if !quiet {
            println!(
                "\n{} {}",
                "✅ Documentation written to".green(),
                self.output.display().to_string().bright_white()
            );
        }

        Ok(Report {
            tool: docfx.tool().to_path_buf(),
            projects,
            output: Some(self.output.clone()),
        })
    }
}
