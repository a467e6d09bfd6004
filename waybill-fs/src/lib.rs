//! Filesystem helpers for reading planning inputs and writing plans.
//!
//! Paths are UTF-8 (`camino`) and every access goes through a `cap-std`
//! directory handle opened on the path's parent, so callers never touch
//! ambient `std::fs` directly.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the directory containing `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` is a regular file rather than a directory or other
/// entry.
///
/// # Errors
/// Fails with [`io::ErrorKind::NotFound`] when `path` or its parent does not
/// exist, and with the underlying error when it cannot be inspected.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Read a UTF-8 file into a string.
///
/// # Errors
/// Fails when the file cannot be opened or is not valid UTF-8.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent_dir(path)?;
    dir.read_to_string(name.as_str())
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// # Errors
/// Fails when a parent directory cannot be created or the write fails.
pub fn write_string(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent_dir(path)?;
    dir.write(name.as_str(), contents)
}

/// Create the parent directory of `path` if it does not exist.
///
/// The deepest existing ancestor is opened as the base directory and the
/// missing remainder is created beneath it.
///
/// # Errors
/// Fails when an ancestor exists but is not a directory, or when the
/// directory tree cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    for existing in parent.ancestors() {
        let base = if existing.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            existing
        };
        match fs_utf8::Dir::open_ambient_dir(base, ambient_authority()) {
            Ok(dir) => {
                let missing = parent.strip_prefix(existing).map_err(io::Error::other)?;
                if missing.as_str().is_empty() {
                    return Ok(());
                }
                return dir.create_dir_all(missing);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no existing ancestor of {parent}"),
    ))
}
