//! Named wavelet constructions.

use std::fmt::{self, Display};
use std::str::FromStr;

use tracing::debug;

use crate::boundary::BoundaryMode;
use crate::error::LiftingError;
use crate::filter::Filter;
use crate::sample::Sample;
use crate::scheme::LiftingScheme;
use crate::step::LiftingStep;

/// Supported lifting wavelets.
///
/// | Wavelet | Predict | Update | Scales (even, odd) |
/// |---------|---------|--------|--------------------|
/// | [`Wavelet::Haar`] | `-1` at `{0}` | `1/2` at `{0}` | `(1, 1)` |
/// | [`Wavelet::Db4`] | `√3` at `{-1, 0}` | `(√3 - 2)/4` at `{0, 1}` | `(k, 1/k)`, `k = √2/√3` |
///
/// `1/k` is computed at the scheme's own precision, not narrowed from `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wavelet {
    /// Two-tap Haar wavelet.
    Haar,
    /// Four-coefficient Daubechies-style construction.
    Db4,
}

/// Coefficients of a single-step lifting wavelet, in `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftingCoeffs {
    /// Offset of the first predict tap.
    pub predict_shift: isize,
    /// Predict taps.
    pub predict: Vec<f64>,
    /// Offset of the first update tap.
    pub update_shift: isize,
    /// Update taps.
    pub update: Vec<f64>,
    /// Scale applied to the even (approximation) channel. The odd channel
    /// is scaled by its reciprocal, taken at the target precision.
    pub scale_even: f64,
}

impl Wavelet {
    /// Every supported wavelet.
    pub const ALL: [Wavelet; 2] = [Self::Haar, Self::Db4];

    /// Parses a wavelet from a case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::UnknownWavelet`] for anything other than
    /// `haar` or `db4`.
    pub fn from_name(name: &str) -> Result<Self, LiftingError> {
        match name.to_lowercase().as_str() {
            "haar" => Ok(Self::Haar),
            "db4" => Ok(Self::Db4),
            _ => Err(LiftingError::UnknownWavelet(name.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Db4 => "db4",
        }
    }

    /// Returns the coefficients defining this wavelet.
    pub fn coeffs(&self) -> LiftingCoeffs {
        match self {
            Self::Haar => LiftingCoeffs {
                predict_shift: 0,
                predict: vec![-1.0],
                update_shift: 0,
                update: vec![0.5],
                scale_even: 1.0,
            },
            Self::Db4 => {
                let sqrt3 = 3f64.sqrt();
                let k = std::f64::consts::SQRT_2 / sqrt3;
                LiftingCoeffs {
                    predict_shift: -1,
                    predict: vec![sqrt3, sqrt3],
                    update_shift: 0,
                    update: vec![(sqrt3 - 2.0) / 4.0; 2],
                    scale_even: k,
                }
            }
        }
    }

    /// Builds the lifting scheme for this wavelet at precision `T`.
    ///
    /// Coefficients are computed in `f64` and narrowed once. The odd scale
    /// is `1 / scale_even` evaluated in `T`.
    ///
    /// # Errors
    ///
    /// Only fails if the coefficient table is malformed, which the built-in
    /// wavelets never are.
    pub fn build<T: Sample>(&self, boundary: BoundaryMode) -> Result<LiftingScheme<T>, LiftingError> {
        let c = self.coeffs();
        let scale_even = T::narrow(c.scale_even);
        let step = LiftingStep::new(
            Filter::from_f64(c.predict_shift, &c.predict)?,
            Filter::from_f64(c.update_shift, &c.update)?,
        )
        .with_scales(scale_even, T::one() / scale_even)?;
        debug!(wavelet = %self, %boundary, n_steps = 1, "built lifting scheme");
        Ok(LiftingScheme::new(vec![step], boundary))
    }
}

impl Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wavelet {
    type Err = LiftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Resolves a wavelet and boundary handler by name and builds the scheme.
///
/// Both names are resolved here, once; nothing is looked up again while the
/// scheme runs.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LiftingError::UnknownWavelet`] | `wavelet` is not `haar` or `db4` |
/// | [`LiftingError::UnknownBoundaryHandler`] | `boundary` is not a known mode |
pub fn create_scheme<T: Sample>(
    wavelet: &str,
    boundary: &str,
) -> Result<LiftingScheme<T>, LiftingError> {
    let wavelet = Wavelet::from_name(wavelet)?;
    let boundary = BoundaryMode::from_name(boundary)?;
    wavelet.build(boundary)
}
