//! # wavelift-io
//!
//! Raw signal storage and the layout of benchmark output trees.
//!
//! A stored signal is a bare run of native-endian IEEE-754 `f64` values:
//! no header, no padding, `length * 8` bytes. Benchmark results are written
//! one directory per input under a precision-tagged root (see
//! [`OutputLayout`]).

mod error;
mod layout;
mod reader;
mod writer;

pub use error::IoError;
pub use layout::{OutputLayout, Subband};
pub use reader::{SAMPLE_BYTES, read_signal};
pub use writer::{write_bytes, write_signal};
