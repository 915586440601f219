//! Discovery configuration for locating projects.
//!
//! This module defines which files and names drive project discovery: the
//! ignore file that feeds the exclusion set, the suffix marking test projects,
//! and the extension of the per-project descriptor file.

/// Ignore file read from the scan root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Directories whose name ends with this suffix are test projects.
pub const DEFAULT_TEST_SUFFIX: &str = ".Tests";

/// Extension of the `<name>/<name>.<ext>` descriptor file.
pub const DEFAULT_DESCRIPTOR_EXTENSION: &str = "csproj";

/// Configuration for project discovery.
#[derive(Clone, Debug)]
pub struct DiscoveryOptions {
    /// Ignore file name, relative to the scan root
    pub ignore_file: String,

    /// Suffix identifying test projects, which are never documented
    pub test_suffix: String,

    /// Descriptor file extension (without the leading dot)
    pub descriptor_extension: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
            descriptor_extension: DEFAULT_DESCRIPTOR_EXTENSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_options_default() {
        let opts = DiscoveryOptions::default();

        assert_eq!(opts.ignore_file, ".gitignore");
        assert_eq!(opts.test_suffix, ".Tests");
        assert_eq!(opts.descriptor_extension, "csproj");
    }
}
