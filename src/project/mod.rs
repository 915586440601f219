//! Discovered project representation.
//!
//! This module contains the data structures describing the projects that are
//! handed to `docfx metadata`.
//!
//! ## Main Parts
//!
//! - [`Project`] - A single project directory and its descriptor file
//! - [`Projects`] - The ordered project list with reporting helpers

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use project::Project;
pub use projects::Projects;
