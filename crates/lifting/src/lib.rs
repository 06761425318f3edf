//! # wavelift-lifting
//!
//! Invertible lifting-scheme wavelet transforms over a generic sample type.
//!
//! ## Transform Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["signal"] -->|"polyphase split"| B["even, odd"]
//!     B -->|"scheme.forward(&mut odd, &mut even)"| C["approximation, detail"]
//!     C -->|"scheme.inverse(&mut odd, &mut even)"| B
//! ```
//!
//! ## Supported Wavelets
//!
//! | Wavelet | Steps | Predict taps | Update taps |
//! |---------|-------|--------------|-------------|
//! | [`Wavelet::Haar`] | 1 | 1 | 1 |
//! | [`Wavelet::Db4`] | 1 | 2 | 2 |
//!
//! ## Quick Start
//!
//! ```
//! use wavelift_lifting::{Signal, create_scheme};
//!
//! let scheme = create_scheme::<f64>("haar", "zero")?;
//! let mut even = Signal::from(vec![5.0, 3.0, 1.0, 8.0]);
//! let mut odd = Signal::from(vec![7.0, 9.0, 4.0, 6.0]);
//!
//! scheme.forward(&mut odd, &mut even);
//! assert_eq!(odd.as_slice(), &[2.0, 6.0, 3.0, -2.0]);
//! assert_eq!(even.as_slice(), &[6.0, 6.0, 2.5, 7.0]);
//!
//! scheme.inverse(&mut odd, &mut even);
//! assert_eq!(even.as_slice(), &[5.0, 3.0, 1.0, 8.0]);
//! # Ok::<(), wavelift_lifting::LiftingError>(())
//! ```

mod boundary;
mod error;
mod filter;
mod sample;
mod scheme;
mod signal;
mod step;
mod wavelet;

pub use boundary::{BoundaryHandler, BoundaryMode, Constant, Periodic, Reflect, Symmetric, Zero};
pub use error::LiftingError;
pub use filter::Filter;
pub use sample::{HasPrecision, Precision, Sample};
pub use scheme::LiftingScheme;
pub use signal::Signal;
pub use step::LiftingStep;
pub use wavelet::{LiftingCoeffs, Wavelet, create_scheme};

/// Reduced-precision sample type used for [`Precision::BFloat16`].
pub use half::bf16;
