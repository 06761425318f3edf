//! Numeric capability shared by every precision the engine runs at.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use half::bf16;
use num_traits::{Float, FromPrimitive, NumAssignOps, NumCast, ToPrimitive};

use crate::error::LiftingError;

/// A floating-point sample type the lifting engine can operate on.
///
/// Anything with the usual field operations and a lossy conversion to and
/// from `f64` qualifies. The blanket impl covers `f64`, `f32` and
/// [`half::bf16`].
pub trait Sample: Float + NumAssignOps + FromPrimitive + Debug + Send + Sync + 'static {
    /// Narrows an `f64` into this type, rounding to nearest.
    #[inline]
    fn narrow(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Widens this value back to `f64`.
    #[inline]
    fn widen(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl<T> Sample for T where T: Float + NumAssignOps + FromPrimitive + Debug + Send + Sync + 'static {}

/// Numeric precision a transform is executed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    /// bfloat16: 8 exponent bits, 7 mantissa bits.
    BFloat16,
    /// IEEE-754 single precision.
    Float32,
    /// IEEE-754 double precision.
    Float64,
}

impl Precision {
    /// All supported precisions, narrowest first.
    pub const ALL: [Precision; 3] = [Self::BFloat16, Self::Float32, Self::Float64];

    /// Parses a precision from a case-insensitive name.
    ///
    /// # Supported Names
    ///
    /// | Input | Precision |
    /// |-------|-----------|
    /// | `"bf16"`, `"bfloat16"`, `"reduced"` | [`Precision::BFloat16`] |
    /// | `"f32"`, `"float32"`, `"single"` | [`Precision::Float32`] |
    /// | `"f64"`, `"float64"`, `"double"` | [`Precision::Float64`] |
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::UnsupportedPrecision`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, LiftingError> {
        match name.to_lowercase().as_str() {
            "bf16" | "bfloat16" | "reduced" => Ok(Self::BFloat16),
            "f32" | "float32" | "single" => Ok(Self::Float32),
            "f64" | "float64" | "double" => Ok(Self::Float64),
            _ => Err(LiftingError::UnsupportedPrecision(name.to_string())),
        }
    }

    /// Short tag used to suffix output directories (`bf16`, `f32`, `f64`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::BFloat16 => "bf16",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }

    /// Unit roundoff `u = 2^-p` of the format, where `p` is the number of
    /// significand bits including the implicit one.
    pub fn unit_roundoff(&self) -> f64 {
        match self {
            Self::BFloat16 => 2f64.powi(-8),
            Self::Float32 => 2f64.powi(-24),
            Self::Float64 => 2f64.powi(-53),
        }
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Precision {
    type Err = LiftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Maps a concrete sample type back to its [`Precision`] tag.
pub trait HasPrecision: Sample {
    /// The precision this type represents.
    const PRECISION: Precision;
}

impl HasPrecision for bf16 {
    const PRECISION: Precision = Precision::BFloat16;
}

impl HasPrecision for f32 {
    const PRECISION: Precision = Precision::Float32;
}

impl HasPrecision for f64 {
    const PRECISION: Precision = Precision::Float64;
}
