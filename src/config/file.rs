//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/docfx-api-docs/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! docfx_path = "~/tools/docfx/docfx"
//! output = "docs/api"
//!
//! [docfx]
//! template = "statictoc"
//! markdown_engine = "markdig"
//!
//! [discovery]
//! ignore_file = ".gitignore"
//! test_suffix = ".Tests"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the docfx executable, skipping the `PATH` lookup
    pub docfx_path: Option<PathBuf>,

    /// Default destination for the generated site
    pub output: Option<PathBuf>,

    /// docfx build options
    #[serde(default)]
    pub docfx: FileDocfxConfig,

    /// Project discovery options
    #[serde(default)]
    pub discovery: FileDiscoveryConfig,
}

/// docfx options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDocfxConfig {
    /// Site template name
    pub template: Option<String>,

    /// Markdown engine name
    pub markdown_engine: Option<String>,
}

/// Discovery options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDiscoveryConfig {
    /// Ignore file name relative to the scan root
    pub ignore_file: Option<String>,

    /// Suffix marking test projects
    pub test_suffix: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/docfx-api-docs/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docfx-api-docs").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, returning defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        tracing::debug!("Loaded config from {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.docfx_path.is_none());
        assert!(config.output.is_none());
        assert!(config.docfx.template.is_none());
        assert!(config.docfx.markdown_engine.is_none());
        assert!(config.discovery.ignore_file.is_none());
        assert!(config.discovery.test_suffix.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
docfx_path = "/opt/docfx/docfx"
output = "docs/api"

[docfx]
template = "default"
markdown_engine = "dfm"

[discovery]
ignore_file = ".docignore"
test_suffix = ".UnitTests"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.docfx_path, Some(PathBuf::from("/opt/docfx/docfx")));
        assert_eq!(config.output, Some(PathBuf::from("docs/api")));
        assert_eq!(config.docfx.template, Some("default".to_string()));
        assert_eq!(config.docfx.markdown_engine, Some("dfm".to_string()));
        assert_eq!(config.discovery.ignore_file, Some(".docignore".to_string()));
        assert_eq!(config.discovery.test_suffix, Some(".UnitTests".to_string()));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[docfx]
template = "modern"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.docfx_path.is_none());
        assert!(config.output.is_none());
        assert_eq!(config.docfx.template, Some("modern".to_string()));
        assert!(config.docfx.markdown_engine.is_none());
        assert!(config.discovery.ignore_file.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.docfx_path.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[docfx]
template = 42
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        let result = toml::from_str::<FileConfig>("docfx_exe = \"docfx\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("docfx-api-docs/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = FileConfig::load_from(&tmp.path().join("config.toml")).unwrap();

        assert!(config.docfx_path.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_load_from_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "output = \"site-out\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("site-out")));
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "output = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/tools"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("tools"));
        }
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&path), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_tilde_relative_path_unchanged() {
        let path = PathBuf::from("relative/path");
        assert_eq!(expand_tilde(&path), PathBuf::from("relative/path"));
    }
}
