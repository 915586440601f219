//! Error types for the documentation pipeline.
//!
//! Every failure is fatal: nothing here is recovered from, errors only travel
//! up to `main` after the temporary working directory has been dropped.

use std::{io, path::PathBuf, process::ExitStatus};

/// Errors raised while resolving docfx, discovering projects, running docfx or
/// moving its output.
#[derive(Debug, thiserror::Error)]
pub enum DocgenError {
    /// No `--docfx-path` was given and `docfx` is not on `PATH`.
    #[error(
        "Unable to find docfx. Specify the docfx executable location with --docfx-path if it is not on PATH."
    )]
    ToolNotFound,

    /// The ignore file listing excluded directories could not be read.
    #[error("Failed to read ignore file {}: {source}", .path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// docfx could not be started at all.
    #[error("Failed to start {}: {source}", .path.display())]
    ToolSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// docfx ran but exited unsuccessfully.
    #[error("docfx {step} failed ({status})")]
    ToolInvocation {
        step: &'static str,
        status: ExitStatus,
    },

    /// Any other filesystem failure.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl DocgenError {
    /// Wrap an I/O error with a short description of what was being done.
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, DocgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_mentions_flag() {
        let message = DocgenError::ToolNotFound.to_string();

        assert!(message.contains("--docfx-path"));
    }

    #[test]
    fn test_ignore_file_message_includes_path() {
        let err = DocgenError::IgnoreFile {
            path: PathBuf::from("/repo/.gitignore"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };

        let message = err.to_string();
        assert!(message.contains("/repo/.gitignore"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_io_helper_keeps_context() {
        let err = DocgenError::io(
            "Failed to write docfx.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "Failed to write docfx.json: denied");
    }
}
