//! On-disk layout of benchmark output trees.

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// One of the three arrays written per wavelet case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subband {
    /// High-pass (detail) output of the forward transform.
    Detail,
    /// Low-pass (approximation) output of the forward transform.
    Approximation,
    /// Signal rebuilt by the inverse transform.
    Reconstructed,
}

impl Subband {
    /// All subbands, in the order they are written.
    pub const ALL: [Subband; 3] = [Self::Detail, Self::Approximation, Self::Reconstructed];

    /// File-name suffix appended to the case name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Detail => "h_fwd",
            Self::Approximation => "l_fwd",
            Self::Reconstructed => "inv",
        }
    }

    /// Expected sample count for an input of length `n`.
    pub fn len_for(&self, n: usize) -> usize {
        match self {
            Self::Detail => n / 2,
            Self::Approximation => n.div_ceil(2),
            Self::Reconstructed => n,
        }
    }
}

impl Display for Subband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.suffix())
    }
}

/// Paths inside one output tree.
///
/// ```text
/// <root>/
/// ├── summary.json
/// └── <input>/
///     ├── <case>_h_fwd
///     ├── <case>_l_fwd
///     └── <case>_inv
/// ```
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use wavelift_io::{OutputLayout, Subband};
///
/// let layout = OutputLayout::tagged("data/output", "bf16");
/// assert_eq!(layout.root(), Path::new("data/output-bf16"));
/// assert_eq!(
///     layout.subband_path("noise", "haar_zero", Subband::Detail),
///     Path::new("data/output-bf16/noise/haar_zero_h_fwd"),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Uses `root` as the tree root as-is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses `<base>-<tag>` as the tree root.
    pub fn tagged(base: impl AsRef<Path>, tag: &str) -> Self {
        let mut root = base.as_ref().components().as_path().as_os_str().to_owned();
        root.push("-");
        root.push(tag);
        Self {
            root: PathBuf::from(root),
        }
    }

    /// Returns the tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every output for `input`.
    pub fn input_dir(&self, input: &str) -> PathBuf {
        self.root.join(input)
    }

    /// Path of one subband file.
    pub fn subband_path(&self, input: &str, case: &str, subband: Subband) -> PathBuf {
        self.input_dir(input)
            .join(format!("{case}_{}", subband.suffix()))
    }

    /// Path of the sweep summary written at the tree root.
    pub fn summary_path(&self) -> PathBuf {
        self.root.join("summary.json")
    }
}
