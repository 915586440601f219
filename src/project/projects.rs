//! The ordered list of discovered projects.
//!
//! This module provides the `Projects` struct which wraps the project list
//! produced by discovery and exposes what the docfx invocation and the status
//! output need from it.

use std::path::Path;

use colored::Colorize;

use super::Project;

/// The project list, in the order projects are passed to docfx.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projects(Vec<Project>);

impl From<Vec<Project>> for Projects {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

impl Projects {
    /// Number of projects in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no project was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying projects.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
    }

    /// Descriptor paths, in list order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(|p| p.descriptor.as_path())
    }

    /// Print the discovered projects, one per line.
    pub fn print_summary(&self) {
        for project in &self.0 {
            println!(
                "  {} {}",
                project.name.bold(),
                format!("({})", project.descriptor.display()).dimmed()
            );
        }
    }
}
