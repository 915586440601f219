//! # docfx-api-docs
//!
//! A small CLI tool that generates static API documentation for the .NET
//! projects in a directory by driving docfx.
//!
//! This library provides the pieces the CLI strings together: locating docfx,
//! discovering project descriptors, running docfx's metadata and build phases
//! in a temporary workspace, and moving the rendered site into place.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod docfx;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod resolver;

pub use error::{DocgenError, Result};
pub use pipeline::{Pipeline, Report};
