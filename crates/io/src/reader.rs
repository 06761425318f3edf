//! Raw signal reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Size in bytes of one stored sample.
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

/// Read the first `length` samples of a stored signal.
///
/// The file is a bare run of native-endian IEEE-754 `f64` values with no
/// header. Bytes past `length * 8` are ignored.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::LengthOverflow`] | `length * 8` does not fit in `usize` |
/// | [`IoError::StorageSizeMismatch`] | file is shorter than `length * 8` bytes |
/// | [`IoError::Io`] | any other read failure |
pub fn read_signal(path: &Path, length: usize) -> Result<Vec<f64>, IoError> {
    let n_bytes = length
        .checked_mul(SAMPLE_BYTES)
        .ok_or_else(|| IoError::LengthOverflow {
            path: path.to_path_buf(),
            length,
        })?;
    let mut file = File::open(path).map_err(|e| IoError::from_std(path, e))?;
    let got = file
        .metadata()
        .map_err(|e| IoError::from_std(path, e))?
        .len();
    let expected = n_bytes as u64;
    if got < expected {
        return Err(IoError::StorageSizeMismatch {
            path: path.to_path_buf(),
            expected,
            got,
        });
    }

    let mut bytes = vec![0u8; n_bytes];
    file.read_exact(&mut bytes)
        .map_err(|e| IoError::from_std(path, e))?;

    let samples: Vec<f64> = bytemuck::pod_collect_to_vec(&bytes);
    debug!(path = %path.display(), n_samples = samples.len(), "read signal");
    Ok(samples)
}
