//! Execution configuration for a documentation run.
//!
//! This module defines the options that control how a run behaves once the
//! inputs are known, including dry-run mode and status output.

/// Configuration for run behavior.
#[derive(Clone, Debug, Default)]
pub struct ExecutionOptions {
    /// Whether to stop after discovery and only print what would be run
    pub dry_run: bool,

    /// Whether to suppress the colored status lines
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_options_default() {
        let exec_opts = ExecutionOptions::default();

        assert!(!exec_opts.dry_run);
        assert!(!exec_opts.quiet);
    }

    #[test]
    fn test_execution_options_clone() {
        let original = ExecutionOptions {
            dry_run: true,
            quiet: false,
        };
        let cloned = original.clone();

        assert_eq!(original.dry_run, cloned.dry_run);
        assert_eq!(original.quiet, cloned.quiet);
    }
}
