//! Generate command: write random input signals for the configured inputs.

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span, warn};

use wavelift_io::write_signal;

use crate::cli::GenerateArgs;
use crate::config::BenchConfig;

/// Write `U[0, 1) * magnitude` samples for every input.
///
/// Multi-dimensional inputs are written flattened (product of the shape);
/// `run` later rejects them.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = BenchConfig::load(&args.config)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    for input in &config.inputs {
        if input.shape.is_empty() {
            bail!("input {:?} has an empty shape", input.name);
        }
        if input.shape.len() > 1 {
            warn!(input = %input.name, shape = ?input.shape, "multi-dimensional input, writing flattened");
        }
        let n: usize = input.shape.iter().product();
        let data: Vec<f64> = (0..n)
            .map(|_| rng.random::<f64>() * input.magnitude)
            .collect();

        let path = args.output.join(&input.name);
        write_signal(&path, &data)
            .with_context(|| format!("failed to write input {:?}", input.name))?;
        info!(input = %input.name, n_samples = n, path = %path.display(), "generated signal");
    }
    Ok(())
}
