//! Compare command: per-subband error between two output trees.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wavelift_bench::compare_trees;

use crate::cli::CompareArgs;
use crate::config::BenchConfig;
use crate::convert;

/// Print error statistics for every subband present in both trees.
pub fn run(args: CompareArgs) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let config = BenchConfig::load(&args.config)?;
    let plan = convert::build_sweep_plan(&config, &[])?;

    let comparisons = compare_trees(&args.candidate, &args.reference, &plan).with_context(|| {
        format!(
            "failed to compare {} against {}",
            args.candidate.display(),
            args.reference.display()
        )
    })?;

    for c in &comparisons {
        println!(
            "{:<20} {:<20} {:<6} max_abs={:.3e} max_rel={:.3e} mean_rel={:.3e} n={}",
            c.input, c.case, c.subband, c.stats.max_abs, c.stats.max_rel, c.stats.mean_rel, c.stats.n,
        );
    }
    info!(n_compared = comparisons.len(), "comparison complete");
    Ok(())
}
