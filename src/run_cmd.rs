//! Run command: sweep every configured combination and write the outputs.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use wavelift_bench::run_sweep;

use crate::cli::RunArgs;
use crate::config::BenchConfig;
use crate::convert;

/// Run the benchmark sweep.
///
/// Every combination runs even if some fail; the command fails afterwards
/// if any did.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    let config = BenchConfig::load(&args.config)?;
    let plan = convert::build_sweep_plan(&config, &args.precisions)?;

    info!(
        input_dir = %args.input_dir.display(),
        output_dir = %args.output_dir.display(),
        n_inputs = plan.inputs.len(),
        n_cases = plan.cases.len(),
        n_precisions = plan.precisions.len(),
        "starting benchmark"
    );
    let report = run_sweep(&plan, &args.input_dir, &args.output_dir)
        .context("benchmark sweep failed")?;

    for outcome in report.outcomes() {
        if let Ok(stats) = &outcome.result {
            println!(
                "{:<6} {:<20} {:<20} max_abs={:.3e} max_rel={:.3e} mean_rel={:.3e}",
                outcome.precision.suffix(),
                outcome.input,
                outcome.case,
                stats.max_abs,
                stats.max_rel,
                stats.mean_rel,
            );
        }
    }

    let n_failed = report.failures().count();
    if n_failed > 0 {
        for outcome in report.failures() {
            if let Err(e) = &outcome.result {
                eprintln!(
                    "failed: input={} case={} wavelet={} boundary={} precision={}: {e}",
                    outcome.input,
                    outcome.case,
                    outcome.wavelet,
                    outcome.boundary,
                    outcome.precision,
                );
            }
        }
        bail!(
            "{n_failed} of {} combination(s) failed",
            report.outcomes().len()
        );
    }

    info!(n_ok = report.n_ok(), "benchmark complete");
    Ok(())
}
