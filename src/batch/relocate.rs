//! Output naming and the move/copy of matched files

use crate::error::RelocateError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Token replaced with the original file name minus its extension
pub const ORIGINAL_NAME_TOKEN: &str = "<o>";
/// Token replaced with the original extension, leading dot included
pub const EXTENSION_TOKEN: &str = "<e>";

/// Build the output file name for `source`.
///
/// Without a template the original file name is kept. Any text other than
/// the two tokens passes through unchanged.
pub fn apply_template(template: Option<&str>, source: &Path) -> String {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(template) = template else {
        return file_name;
    };

    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    template
        .replace(ORIGINAL_NAME_TOKEN, &stem)
        .replace(EXTENSION_TOKEN, &extension)
}

/// Copy or move `source` to `output_folder/file_name`.
///
/// An existing destination is never overwritten. A move across filesystems
/// falls back to [`copy_then_remove`].
pub fn relocate(
    source: &Path,
    output_folder: &Path,
    file_name: &str,
    copy: bool,
) -> Result<PathBuf, RelocateError> {
    let destination = output_folder.join(file_name);
    if destination.exists() {
        return Err(RelocateError::DestinationExists { path: destination });
    }

    let io_error = |action: &'static str, source_err: io::Error| RelocateError::Io {
        action,
        from: source.to_path_buf(),
        to: destination.clone(),
        source: source_err,
    };

    if copy {
        fs::copy(source, &destination).map_err(|e| io_error("copy", e))?;
        log::debug!("Copied {} -> {}", source.display(), destination.display());
        return Ok(destination);
    }

    match fs::rename(source, &destination) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!("Rename crosses filesystems, copying {}", source.display());
            copy_then_remove(source, &destination).map_err(|(action, e)| io_error(action, e))?;
        }
        Err(e) => return Err(io_error("move", e)),
    }
    log::debug!("Moved {} -> {}", source.display(), destination.display());
    Ok(destination)
}

/// Move by copying `source` to `destination` and deleting `source`.
///
/// When the source cannot be removed the fresh copy is deleted again, so a
/// failed move leaves only the source behind. The error carries the step
/// that failed.
pub fn copy_then_remove(
    source: &Path,
    destination: &Path,
) -> Result<(), (&'static str, io::Error)> {
    fs::copy(source, destination).map_err(|e| ("copy", e))?;
    if let Err(e) = fs::remove_file(source) {
        if let Err(cleanup) = fs::remove_file(destination) {
            log::warn!(
                "Could not remove partial copy {}: {}",
                destination.display(),
                cleanup
            );
        }
        return Err(("remove", e));
    }
    Ok(())
}
