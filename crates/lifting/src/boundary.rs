//! Out-of-range index extension ("boundary handling").
//!
//! For `s = [a, b, c, d]` the five policies extend the signal as:
//!
//! | Mode | Left extension | Signal | Right extension |
//! |------|----------------|--------|-----------------|
//! | [`BoundaryMode::Reflect`] | `... c d d c b a` | `a b c d` | `d c b a a b ...` |
//! | [`BoundaryMode::Symmetric`] | `... b c d c b` | `a b c d` | `c b a b c ...` |
//! | [`BoundaryMode::Periodic`] | `... a b c d` | `a b c d` | `a b c d ...` |
//! | [`BoundaryMode::Zero`] | `... 0 0 0 0` | `a b c d` | `0 0 0 0 ...` |
//! | [`BoundaryMode::Constant`] | `... a a a a` | `a b c d` | `d d d d ...` |
//!
//! Every policy is total over `isize`. An empty signal extends to zero.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::LiftingError;
use crate::sample::Sample;

/// Named boundary extension policy, resolved once when a scheme is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Edge-duplicating mirror with period `2L`: index `-1` reads sample `0`.
    Reflect,
    /// Mirror about the edge sample with period `2(L - 1)`: index `-1` reads sample `1`.
    Symmetric,
    /// Wrap-around tiling with period `L`.
    Periodic,
    /// Additive identity outside `[0, L)`.
    #[default]
    Zero,
    /// Clamp to the first or last sample.
    Constant,
}

impl BoundaryMode {
    /// Every boundary mode, in declaration order.
    pub const ALL: [BoundaryMode; 5] = [
        Self::Reflect,
        Self::Symmetric,
        Self::Periodic,
        Self::Zero,
        Self::Constant,
    ];

    /// Parses a boundary mode from a case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`LiftingError::UnknownBoundaryHandler`] if the name is not
    /// one of `reflect`, `symmetric`, `periodic`, `zero`, `constant`.
    pub fn from_name(name: &str) -> Result<Self, LiftingError> {
        match name.to_lowercase().as_str() {
            "reflect" => Ok(Self::Reflect),
            "symmetric" => Ok(Self::Symmetric),
            "periodic" => Ok(Self::Periodic),
            "zero" => Ok(Self::Zero),
            "constant" => Ok(Self::Constant),
            _ => Err(LiftingError::UnknownBoundaryHandler(name.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reflect => "reflect",
            Self::Symmetric => "symmetric",
            Self::Periodic => "periodic",
            Self::Zero => "zero",
            Self::Constant => "constant",
        }
    }
}

impl Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = LiftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Compile-time boundary strategy used inside the lifting loops.
pub trait BoundaryHandler {
    /// The runtime tag this strategy implements.
    const MODE: BoundaryMode;

    /// Reads `signal` at `index`, extending it past either edge.
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T;
}

/// See [`BoundaryMode::Reflect`].
#[derive(Clone, Copy, Debug)]
pub struct Reflect;

/// See [`BoundaryMode::Symmetric`].
#[derive(Clone, Copy, Debug)]
pub struct Symmetric;

/// See [`BoundaryMode::Periodic`].
#[derive(Clone, Copy, Debug)]
pub struct Periodic;

/// See [`BoundaryMode::Zero`].
#[derive(Clone, Copy, Debug)]
pub struct Zero;

/// See [`BoundaryMode::Constant`].
#[derive(Clone, Copy, Debug)]
pub struct Constant;

impl BoundaryHandler for Reflect {
    const MODE: BoundaryMode = BoundaryMode::Reflect;

    #[inline]
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T {
        let n = signal.len() as isize;
        if n == 0 {
            return T::zero();
        }
        let period = 2 * n;
        let k = index.rem_euclid(period);
        if k < n {
            signal[k as usize]
        } else {
            signal[(period - k - 1) as usize]
        }
    }
}

impl BoundaryHandler for Symmetric {
    const MODE: BoundaryMode = BoundaryMode::Symmetric;

    #[inline]
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T {
        let n = signal.len() as isize;
        match n {
            0 => T::zero(),
            1 => signal[0],
            _ => {
                let period = 2 * (n - 1);
                let k = index.rem_euclid(period);
                if k < n {
                    signal[k as usize]
                } else {
                    signal[(period - k) as usize]
                }
            }
        }
    }
}

impl BoundaryHandler for Periodic {
    const MODE: BoundaryMode = BoundaryMode::Periodic;

    #[inline]
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T {
        let n = signal.len() as isize;
        if n == 0 {
            return T::zero();
        }
        signal[index.rem_euclid(n) as usize]
    }
}

impl BoundaryHandler for Zero {
    const MODE: BoundaryMode = BoundaryMode::Zero;

    #[inline]
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T {
        usize::try_from(index)
            .ok()
            .and_then(|i| signal.get(i).copied())
            .unwrap_or_else(T::zero)
    }
}

impl BoundaryHandler for Constant {
    const MODE: BoundaryMode = BoundaryMode::Constant;

    #[inline]
    fn eval<T: Sample>(index: isize, signal: &[T]) -> T {
        let n = signal.len() as isize;
        if n == 0 {
            return T::zero();
        }
        signal[index.clamp(0, n - 1) as usize]
    }
}
