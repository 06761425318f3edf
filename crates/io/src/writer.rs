//! Raw signal writer.

use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Write `data` as bare native-endian `f64` values.
///
/// Emits exactly `data.len() * 8` bytes. Missing parent directories are
/// created; an existing file is truncated.
///
/// # Errors
///
/// Returns [`IoError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_signal(path: &Path, data: &[f64]) -> Result<(), IoError> {
    write_bytes(path, bytemuck::cast_slice::<f64, u8>(data))?;
    debug!(path = %path.display(), n_samples = data.len(), "wrote signal");
    Ok(())
}

/// Write raw bytes to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`IoError::Io`] on any filesystem failure.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IoError::Io {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    std::fs::write(path, bytes).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
