//! Configuration types and options for the application.
//!
//! This module contains the option structures used throughout the pipeline,
//! covering project discovery, the docfx invocations and run behavior, plus
//! the persistent configuration file.

pub mod discovery;
pub mod docfx;
pub mod execution;
pub mod file;

pub use discovery::DiscoveryOptions;
pub use docfx::DocfxOptions;
pub use execution::ExecutionOptions;
pub use file::FileConfig;
