//! Project discovery.
//!
//! Projects live directly under the scan root, one per directory, following
//! the `<name>/<name>.<ext>` descriptor convention. Directories named in the
//! ignore file and test projects are skipped.

use std::{
    collections::HashSet,
    fs,
    path::{self, Path},
};

use walkdir::WalkDir;

use crate::{
    config::DiscoveryOptions,
    error::{DocgenError, Result},
    project::{Project, Projects},
};

/// Directory names listed in the ignore file.
///
/// Only simple names are kept: entries containing a path separator or a
/// wildcard can never equal a single directory name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// Build the set from ignore-file content.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.contains(['/', '*']))
                .map(str::to_string)
                .collect(),
        )
    }

    /// Read and parse an ignore file.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::IgnoreFile`] if the file is missing or unreadable.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DocgenError::IgnoreFile {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Finds documentable projects directly under a root directory.
pub struct Discoverer {
    options: DiscoveryOptions,
}

impl Discoverer {
    /// Create a new discoverer with the specified options.
    #[must_use]
    pub const fn new(options: DiscoveryOptions) -> Self {
        Self { options }
    }

    /// Discover projects under `root`.
    ///
    /// The ignore file is read from `root` first; its absence aborts discovery.
    /// Immediate subdirectories are then visited in file-name order and kept
    /// when they are neither test projects nor excluded, and contain their
    /// descriptor file.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::IgnoreFile`] if the ignore file cannot be read,
    /// or [`DocgenError::Io`] if `root` cannot be made absolute.
    pub fn discover(&self, root: &Path) -> Result<Projects> {
        let root = path::absolute(root)
            .map_err(|e| DocgenError::io(format!("Failed to resolve {}", root.display()), e))?;

        let exclusions = ExclusionSet::from_file(&root.join(&self.options.ignore_file))?;
        tracing::debug!("Loaded {} excluded names", exclusions.len());

        let projects = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                self.detect_project(entry.path(), name, &exclusions)
            })
            .collect::<Vec<_>>();

        Ok(projects.into())
    }

    /// Check a single directory against the exclusion rules and descriptor convention.
    fn detect_project(&self, dir: &Path, name: &str, exclusions: &ExclusionSet) -> Option<Project> {
        if self.is_excluded(name, exclusions) {
            tracing::debug!("Excluding {name}");
            return None;
        }

        let descriptor = dir.join(format!("{name}.{}", self.options.descriptor_extension));
        if !descriptor.exists() {
            return None;
        }

        Some(Project::new(name.to_string(), descriptor))
    }

    fn is_excluded(&self, name: &str, exclusions: &ExclusionSet) -> bool {
        name.ends_with(&self.options.test_suffix) || exclusions.contains(name)
    }
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new(DiscoveryOptions::default())
    }
}
