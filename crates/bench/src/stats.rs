//! Element-wise error statistics between a candidate and a reference.

use serde::Serialize;

use crate::error::BenchError;

/// Summary of the element-wise error of a candidate sequence.
///
/// Relative error `|c - r| / |r|` is only taken where the reference is
/// non-zero; if every reference sample is zero both relative fields are 0.
/// A NaN anywhere in the candidate propagates into `max_abs`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ErrorStats {
    /// Largest absolute error.
    pub max_abs: f64,
    /// Largest relative error.
    pub max_rel: f64,
    /// Mean relative error.
    pub mean_rel: f64,
    /// Number of samples compared.
    pub n: usize,
}

impl ErrorStats {
    /// Compares `candidate` against `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::LengthMismatch`] if the lengths differ.
    pub fn between(candidate: &[f64], reference: &[f64]) -> Result<Self, BenchError> {
        if candidate.len() != reference.len() {
            return Err(BenchError::LengthMismatch {
                expected: reference.len(),
                got: candidate.len(),
            });
        }

        let mut max_abs = 0.0;
        let mut max_rel = 0.0;
        let mut sum_rel = 0.0;
        let mut n_rel = 0usize;
        for (&c, &r) in candidate.iter().zip(reference) {
            let abs = (c - r).abs();
            max_abs = nan_max(max_abs, abs);
            if r != 0.0 {
                let rel = abs / r.abs();
                max_rel = nan_max(max_rel, rel);
                sum_rel += rel;
                n_rel += 1;
            }
        }

        Ok(Self {
            max_abs,
            max_rel,
            mean_rel: if n_rel > 0 { sum_rel / n_rel as f64 } else { 0.0 },
            n: candidate.len(),
        })
    }

    /// Whether the largest absolute error is within `tolerance`.
    pub fn within(&self, tolerance: f64) -> bool {
        self.max_abs <= tolerance
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
