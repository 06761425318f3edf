//! # wavelift-bench
//!
//! Measures how well lifting transforms survive reduced numeric precision.
//!
//! [`process_1d`] runs one signal through one wavelet at one precision and
//! returns the subbands plus the reconstruction. [`run_sweep`] fans a
//! [`SweepPlan`] out over a rayon pool, writes every result to disk and
//! records a [`CombinationOutcome`] per combination, so a bad wavelet name
//! or a missing input only costs the combinations that depend on it.
//! [`compare_trees`] diffs two output trees written by different runs.
//!
//! ```mermaid
//! graph LR
//!     A["input file"] -->|read_signal| B["Vec&lt;f64&gt;"]
//!     B -->|"split_polyphase + narrow"| C["even, odd"]
//!     C -->|forward| D["approximation, detail"]
//!     D -->|inverse + interleave| E["reconstructed"]
//!     D --> F["&lt;case&gt;_l_fwd, &lt;case&gt;_h_fwd"]
//!     E --> G["&lt;case&gt;_inv"]
//! ```

mod compare;
mod error;
mod polyphase;
mod process;
mod stats;
mod sweep;

pub use compare::{SubbandComparison, compare_trees};
pub use error::BenchError;
pub use polyphase::{interleave, split_polyphase};
pub use process::{BenchmarkResult, process_1d};
pub use stats::ErrorStats;
pub use sweep::{
    CaseSpec, Combination, CombinationOutcome, InputSpec, SweepPlan, SweepReport, run_sweep,
};
