//! Core project data structure.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

/// A project whose API surface will be documented.
///
/// A directory `Foo` is a project when it contains `Foo/Foo.<ext>`, the
/// descriptor file. Only the descriptor path is passed on to docfx.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// Name of the project directory, which is also the descriptor's stem
    pub name: String,

    /// Absolute path to the descriptor file
    pub descriptor: PathBuf,
}

impl Project {
    /// Create a new project.
    #[must_use]
    pub const fn new(name: String, descriptor: PathBuf) -> Self {
        Self { name, descriptor }
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.descriptor.display())
    }
}
