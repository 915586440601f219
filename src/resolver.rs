//! Locating the docfx executable.
//!
//! An explicit path always wins. Without one, every directory on `PATH` is
//! searched in order for an executable named `docfx`.

use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::docfx::TOOL_NAME,
    error::{DocgenError, Result},
};

/// Extensions tried on Windows when searching `PATH`.
#[cfg(windows)]
const WINDOWS_EXTENSIONS: &[&str] = &["exe", "cmd", "bat"];

/// Check whether a file is an executable binary.
///
/// On Unix, this inspects the permission bits for the executable flag.
/// On Windows, being a regular file found under a known extension is enough.
#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

#[cfg(windows)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    metadata.is_file()
}

/// Candidate file names for `name` inside a single `PATH` directory.
#[cfg(unix)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    std::iter::once(dir.join(name))
        .chain(
            WINDOWS_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{name}.{ext}"))),
        )
        .collect()
}

/// Search a `PATH`-style variable for an executable called `name`.
///
/// Returns the first match in search order, or `None`.
#[must_use]
pub fn find_in_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|candidate| fs::metadata(candidate).is_ok_and(|m| is_executable(&m)))
}

/// Resolve the docfx executable to run.
///
/// docfx is started from inside the temporary workspace, so any path with a
/// directory part is made absolute against the current directory first. A
/// bare name such as `docfx` is left for the process spawner to look up.
///
/// # Arguments
///
/// * `explicit` - Path from `--docfx-path` or the config file
/// * `path_var` - Value of the `PATH` variable to search otherwise
///
/// # Errors
///
/// Returns [`DocgenError::ToolNotFound`] when no explicit path is given and
/// no `docfx` executable exists on `path_var`, or [`DocgenError::Io`] if the
/// current directory cannot be determined.
pub fn resolve_tool(explicit: Option<&Path>, path_var: Option<&OsStr>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = anchor(path)?;
        tracing::debug!("Using docfx from {}", path.display());
        return Ok(path);
    }

    let found = path_var
        .and_then(|var| find_in_path(TOOL_NAME, var))
        .ok_or(DocgenError::ToolNotFound)?;
    let found = anchor(&found)?;

    tracing::debug!("Found docfx on PATH at {}", found.display());

    Ok(found)
}

fn anchor(path: &Path) -> Result<PathBuf> {
    if path.components().nth(1).is_none() && path.is_relative() {
        return Ok(path.to_path_buf());
    }

    std::path::absolute(path)
        .map_err(|e| DocgenError::io(format!("Failed to resolve {}", path.display()), e))
}
