//! Moving generated output into place.
//!
//! The destination is replaced wholesale: whatever was there before is
//! deleted, then the new site is moved in. There is no backup and no merge.

use std::{fs, io, path::Path};

use walkdir::WalkDir;

use crate::error::{DocgenError, Result};

/// Replace `destination` with the contents of `site`.
///
/// # Errors
///
/// Returns [`DocgenError::Io`] if the old destination cannot be removed or
/// the site cannot be moved.
pub fn finalize(site: &Path, destination: &Path) -> Result<()> {
    remove_existing(destination)?;

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| DocgenError::io(format!("Failed to create {}", parent.display()), e))?;
    }

    move_dir(site, destination)
}

/// Delete whatever sits at `path`, if anything.
fn remove_existing(path: &Path) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    tracing::debug!("Removing existing {}", path.display());

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    removed.map_err(|e| DocgenError::io(format!("Failed to remove {}", path.display()), e))
}

/// Move a directory tree from `from` to `to`.
///
/// A plain rename is tried first. When that fails, for instance because the
/// two paths are on different filesystems, the tree is copied and the source
/// removed.
///
/// # Errors
///
/// Returns [`DocgenError::Io`] if `from` is missing or neither strategy works.
pub fn move_dir(from: &Path, to: &Path) -> Result<()> {
    let context = || format!("Failed to move {} to {}", from.display(), to.display());

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DocgenError::io(context(), e)),
        Err(e) => {
            tracing::debug!("Rename failed ({e}), falling back to copy");
            copy_dir(from, to).map_err(|e| DocgenError::io(context(), e))?;
            fs::remove_dir_all(from).map_err(|e| DocgenError::io(context(), e))
        }
    }
}

fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let target = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Recreate a symlink without following it; dangling links are copied as-is.
#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(link)?, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, _target: &Path) -> io::Result<()> {
    tracing::debug!("Skipping symlink {}", link.display());
    Ok(())
}
