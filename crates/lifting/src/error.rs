//! Error types for the wavelift-lifting crate.

/// Error type for all fallible operations in the wavelift-lifting crate.
///
/// Every variant is raised while a transform is being *built* (name lookup,
/// filter and step validation) or by the checked signal accessors. The
/// per-sample lifting loops themselves never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiftingError {
    /// Returned when a wavelet identifier is not one of the supported constructions.
    #[error("unknown wavelet name: {0:?}")]
    UnknownWavelet(String),

    /// Returned when a boundary handler identifier is not recognized.
    #[error("unknown boundary handler: {0:?}")]
    UnknownBoundaryHandler(String),

    /// Returned when a numeric precision identifier is not recognized.
    #[error("unsupported precision: {0:?}")]
    UnsupportedPrecision(String),

    /// Returned when a filter is built without any coefficients.
    #[error("filter must have at least one coefficient")]
    EmptyFilter,

    /// Returned when a lifting step scale factor is zero.
    #[error("scale factor for the {parity} channel must be non-zero")]
    ZeroScale {
        /// Which polyphase channel the scale belongs to (`"even"` or `"odd"`).
        parity: &'static str,
    },

    /// Returned by checked signal access when the index is past the end.
    #[error("index {index} out of bounds for signal of length {len}")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Length of the signal.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_wavelet() {
        let err = LiftingError::UnknownWavelet("coif4".into());
        assert_eq!(err.to_string(), "unknown wavelet name: \"coif4\"");
    }

    #[test]
    fn error_unknown_boundary_handler() {
        let err = LiftingError::UnknownBoundaryHandler("mirror".into());
        assert_eq!(err.to_string(), "unknown boundary handler: \"mirror\"");
    }

    #[test]
    fn error_unsupported_precision() {
        let err = LiftingError::UnsupportedPrecision("f128".into());
        assert_eq!(err.to_string(), "unsupported precision: \"f128\"");
    }

    #[test]
    fn error_empty_filter() {
        assert_eq!(
            LiftingError::EmptyFilter.to_string(),
            "filter must have at least one coefficient"
        );
    }

    #[test]
    fn error_zero_scale() {
        let err = LiftingError::ZeroScale { parity: "odd" };
        assert_eq!(
            err.to_string(),
            "scale factor for the odd channel must be non-zero"
        );
    }

    #[test]
    fn error_index_out_of_bounds() {
        let err = LiftingError::IndexOutOfBounds { index: 9, len: 4 };
        assert_eq!(
            err.to_string(),
            "index 9 out of bounds for signal of length 4"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LiftingError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LiftingError>();
    }
}
