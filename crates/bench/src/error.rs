//! Benchmark driver error types.

use wavelift_io::IoError;
use wavelift_lifting::LiftingError;

/// Errors raised while running or comparing benchmark combinations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BenchError {
    /// Scheme construction failed (unknown wavelet or boundary name).
    #[error(transparent)]
    Lifting(#[from] LiftingError),

    /// Reading an input or writing an output failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Input shape is not one-dimensional.
    #[error("input '{input}' has shape {dims:?}; only one-dimensional inputs are supported")]
    ShapeUnsupported { input: String, dims: Vec<usize> },

    /// Candidate and reference sequences differ in length.
    #[error("length mismatch: expected {expected} samples, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// The worker pool could not be started.
    #[error("failed to build thread pool: {reason}")]
    ThreadPool { reason: String },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
