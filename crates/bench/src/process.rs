//! Single-signal precision benchmark.

use tracing::debug;
use wavelift_io::Subband;
use wavelift_lifting::{HasPrecision, Precision, bf16, create_scheme};

use crate::error::BenchError;
use crate::polyphase::{interleave, split_polyphase};
use crate::stats::ErrorStats;

/// Subbands and reconstruction of one forward/inverse round trip, widened
/// to `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    detail: Vec<f64>,
    approximation: Vec<f64>,
    reconstructed: Vec<f64>,
}

impl BenchmarkResult {
    /// High-pass output of the forward transform (`floor(n / 2)` samples).
    pub fn detail(&self) -> &[f64] {
        &self.detail
    }

    /// Low-pass output of the forward transform (`ceil(n / 2)` samples).
    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    /// Signal rebuilt by the inverse transform (`n` samples).
    pub fn reconstructed(&self) -> &[f64] {
        &self.reconstructed
    }

    /// Returns the array stored under `subband`.
    pub fn subband(&self, subband: Subband) -> &[f64] {
        match subband {
            Subband::Detail => &self.detail,
            Subband::Approximation => &self.approximation,
            Subband::Reconstructed => &self.reconstructed,
        }
    }

    /// Error of the reconstruction against the original input.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::LengthMismatch`] if `original` is not the
    /// signal this result was computed from.
    pub fn reconstruction_stats(&self, original: &[f64]) -> Result<ErrorStats, BenchError> {
        ErrorStats::between(&self.reconstructed, original)
    }
}

/// Run `wavelet` with `boundary` handling on `signal` at `precision`.
///
/// The signal is split into polyphase channels, narrowed, transformed
/// forward and back, then interleaved. Odd lengths are fine: the odd
/// channel is one sample shorter.
///
/// # Errors
///
/// Returns [`BenchError::Lifting`] if either name is unknown.
///
/// # Example
///
/// ```
/// use wavelift_bench::process_1d;
/// use wavelift_lifting::Precision;
///
/// let x = [5.0, 7.0, 3.0, 9.0, 1.0, 4.0, 8.0, 6.0];
/// let result = process_1d(&x, "haar", "zero", Precision::Float64)?;
/// assert_eq!(result.detail(), &[2.0, 6.0, 3.0, -2.0]);
/// assert_eq!(result.approximation(), &[6.0, 6.0, 2.5, 7.0]);
/// assert_eq!(result.reconstructed(), &x);
/// # Ok::<(), wavelift_bench::BenchError>(())
/// ```
pub fn process_1d(
    signal: &[f64],
    wavelet: &str,
    boundary: &str,
    precision: Precision,
) -> Result<BenchmarkResult, BenchError> {
    match precision {
        Precision::BFloat16 => process_at::<bf16>(signal, wavelet, boundary),
        Precision::Float32 => process_at::<f32>(signal, wavelet, boundary),
        Precision::Float64 => process_at::<f64>(signal, wavelet, boundary),
    }
}

fn process_at<T: HasPrecision>(
    signal: &[f64],
    wavelet: &str,
    boundary: &str,
) -> Result<BenchmarkResult, BenchError> {
    let scheme = create_scheme::<T>(wavelet, boundary)?;
    let (mut even, mut odd) = split_polyphase::<T>(signal);

    scheme.forward(&mut odd, &mut even);
    let detail = odd.to_f64_vec();
    let approximation = even.to_f64_vec();

    scheme.inverse(&mut odd, &mut even);
    let reconstructed = interleave(&even, &odd);

    debug!(
        wavelet,
        boundary,
        precision = %T::PRECISION,
        n_samples = signal.len(),
        "processed signal"
    );
    Ok(BenchmarkResult {
        detail,
        approximation,
        reconstructed,
    })
}
