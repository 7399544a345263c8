//! Filesystem helpers for reading Go sources.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::GenpropError;

/// Reads `path` as UTF-8 text through a capability handle on its directory.
///
/// # Errors
///
/// Returns [`GenpropError::Read`] when the directory cannot be opened, the
/// path has no file name, or the file cannot be read.
pub fn read_source(path: &Utf8Path) -> Result<String, GenpropError> {
    let read_error = |source| GenpropError::Read {
        path: path.to_path_buf(),
        source,
    };
    let Some(file_name) = path.file_name() else {
        return Err(read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path does not name a file",
        )));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(file_name).map_err(read_error)
}
