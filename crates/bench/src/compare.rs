//! Cross-check of two output trees.

use std::path::Path;

use tracing::{debug, warn};
use wavelift_io::{OutputLayout, Subband, read_signal};

use crate::error::BenchError;
use crate::stats::ErrorStats;
use crate::sweep::SweepPlan;

/// Error of one candidate subband file against its reference.
#[derive(Clone, Debug, PartialEq)]
pub struct SubbandComparison {
    pub input: String,
    pub case: String,
    pub subband: Subband,
    pub stats: ErrorStats,
}

/// Compare every subband file of `candidate` against `reference`.
///
/// Both roots are used as-is (no precision suffix is appended). Inputs
/// that are not one-dimensional are skipped, as are files missing from
/// either tree; each skip is logged with `warn!`.
///
/// # Errors
///
/// Returns [`BenchError::Io`] if a file exists but cannot be read in full.
pub fn compare_trees(
    candidate: &Path,
    reference: &Path,
    plan: &SweepPlan,
) -> Result<Vec<SubbandComparison>, BenchError> {
    let candidate = OutputLayout::new(candidate);
    let reference = OutputLayout::new(reference);
    let mut comparisons = Vec::new();

    for input in &plan.inputs {
        let n = match input.length() {
            Ok(n) => n,
            Err(e) => {
                warn!(input = %input.name, error = %e, "skipping input");
                continue;
            }
        };
        for case in &plan.cases {
            for subband in Subband::ALL {
                let cand_path = candidate.subband_path(&input.name, &case.name, subband);
                let ref_path = reference.subband_path(&input.name, &case.name, subband);
                if !cand_path.is_file() || !ref_path.is_file() {
                    warn!(
                        input = %input.name,
                        case = %case.name,
                        %subband,
                        "subband missing from one tree, skipping"
                    );
                    continue;
                }

                let len = subband.len_for(n);
                let stats =
                    ErrorStats::between(&read_signal(&cand_path, len)?, &read_signal(&ref_path, len)?)?;
                debug!(input = %input.name, case = %case.name, %subband, max_abs = stats.max_abs, "compared");
                comparisons.push(SubbandComparison {
                    input: input.name.clone(),
                    case: case.name.clone(),
                    subband,
                    stats,
                });
            }
        }
    }

    Ok(comparisons)
}
