//! Parallel sweep over inputs × cases × precisions.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use tracing::{info, warn};
use wavelift_io::{OutputLayout, Subband, read_signal, write_bytes, write_signal};
use wavelift_lifting::Precision;

use crate::error::BenchError;
use crate::process::process_1d;
use crate::stats::ErrorStats;

/// A named input signal and its declared shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSpec {
    /// File name under the input directory, reused as the output directory name.
    pub name: String,
    /// Declared dimensions; only `[n]` can be processed.
    pub shape: Vec<usize>,
}

impl InputSpec {
    /// Creates an input spec.
    pub fn new(name: impl Into<String>, shape: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Sample count of a one-dimensional input.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::ShapeUnsupported`] unless the shape has exactly
    /// one dimension.
    pub fn length(&self) -> Result<usize, BenchError> {
        match self.shape.as_slice() {
            [n] => Ok(*n),
            dims => Err(BenchError::ShapeUnsupported {
                input: self.name.clone(),
                dims: dims.to_vec(),
            }),
        }
    }
}

/// A named wavelet test case. Names are resolved when the case runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseSpec {
    /// Prefix of the three subband files this case writes.
    pub name: String,
    /// Wavelet identifier, e.g. `haar` or `db4`.
    pub wavelet: String,
    /// Boundary handler identifier, e.g. `periodic`.
    pub boundary: String,
}

impl CaseSpec {
    /// Creates a case spec without resolving either name.
    pub fn new(
        name: impl Into<String>,
        wavelet: impl Into<String>,
        boundary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            wavelet: wavelet.into(),
            boundary: boundary.into(),
        }
    }
}

/// Everything a sweep runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPlan {
    /// Signals to read, each once.
    pub inputs: Vec<InputSpec>,
    /// Wavelet cases run against every input.
    pub cases: Vec<CaseSpec>,
    /// Precisions run for every case; each gets its own output root.
    pub precisions: Vec<Precision>,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl SweepPlan {
    /// Every (input, case, precision) triple, input-major.
    pub fn combinations(&self) -> Vec<Combination<'_>> {
        let mut combos =
            Vec::with_capacity(self.inputs.len() * self.cases.len() * self.precisions.len());
        for input in &self.inputs {
            for case in &self.cases {
                for &precision in &self.precisions {
                    combos.push(Combination {
                        input,
                        case,
                        precision,
                    });
                }
            }
        }
        combos
    }
}

/// One unit of sweep work.
#[derive(Clone, Copy, Debug)]
pub struct Combination<'a> {
    /// Input this combination reads.
    pub input: &'a InputSpec,
    /// Case this combination runs.
    pub case: &'a CaseSpec,
    /// Precision the transform runs at.
    pub precision: Precision,
}

/// Result of one combination.
#[derive(Clone, Debug, PartialEq)]
pub struct CombinationOutcome {
    /// Input name.
    pub input: String,
    /// Case name.
    pub case: String,
    /// Wavelet identifier as configured.
    pub wavelet: String,
    /// Boundary handler identifier as configured.
    pub boundary: String,
    /// Precision the combination ran at.
    pub precision: Precision,
    /// Round-trip error on success.
    pub result: Result<ErrorStats, BenchError>,
}

impl CombinationOutcome {
    /// Whether the combination completed.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for CombinationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CombinationOutcome", 7)?;
        s.serialize_field("input", &self.input)?;
        s.serialize_field("case", &self.case)?;
        s.serialize_field("wavelet", &self.wavelet)?;
        s.serialize_field("boundary", &self.boundary)?;
        s.serialize_field("precision", self.precision.suffix())?;
        match &self.result {
            Ok(stats) => {
                s.serialize_field("stats", stats)?;
                s.serialize_field("error", &None::<String>)?;
            }
            Err(e) => {
                s.serialize_field("stats", &None::<ErrorStats>)?;
                s.serialize_field("error", &e.to_string())?;
            }
        }
        s.end()
    }
}

/// All outcomes of a sweep, in combination order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    outcomes: Vec<CombinationOutcome>,
}

/// Per-precision summary written next to the outputs.
#[derive(Debug, Serialize)]
struct PrecisionSummary<'a> {
    precision: &'static str,
    n_combinations: usize,
    n_ok: usize,
    n_failed: usize,
    outcomes: Vec<&'a CombinationOutcome>,
}

impl SweepReport {
    /// Every outcome, input-major.
    pub fn outcomes(&self) -> &[CombinationOutcome] {
        &self.outcomes
    }

    /// Number of combinations that completed.
    pub fn n_ok(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Combinations that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CombinationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// Outcomes for one precision.
    pub fn for_precision(&self, precision: Precision) -> impl Iterator<Item = &CombinationOutcome> {
        self.outcomes.iter().filter(move |o| o.precision == precision)
    }

    /// Pretty JSON summary of the outcomes at `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Serialization`] if encoding fails.
    pub fn summary_json(&self, precision: Precision) -> Result<String, BenchError> {
        let outcomes: Vec<&CombinationOutcome> = self.for_precision(precision).collect();
        let n_ok = outcomes.iter().filter(|o| o.is_ok()).count();
        let summary = PrecisionSummary {
            precision: precision.suffix(),
            n_combinations: outcomes.len(),
            n_ok,
            n_failed: outcomes.len() - n_ok,
            outcomes,
        };
        serde_json::to_string_pretty(&summary).map_err(|e| BenchError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Run every combination of `plan`.
///
/// Inputs are read once from `<input_dir>/<name>` and shared read-only
/// across workers. Each combination writes its subbands under
/// `<output_base>-<precision>/<input>/` (see [`OutputLayout`]). A failing
/// combination is logged and recorded; the rest still run. After all
/// combinations finish, `summary.json` is written to every precision root.
///
/// # Errors
///
/// Only sweep-level failures are returned: the worker pool cannot start,
/// or a summary cannot be serialized or written.
#[tracing::instrument(skip_all, fields(n_inputs = plan.inputs.len(), n_cases = plan.cases.len()))]
pub fn run_sweep(
    plan: &SweepPlan,
    input_dir: &Path,
    output_base: &Path,
) -> Result<SweepReport, BenchError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = plan.threads {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().map_err(|e| BenchError::ThreadPool {
        reason: e.to_string(),
    })?;

    let signals: Vec<Result<Vec<f64>, BenchError>> = plan
        .inputs
        .iter()
        .map(|input| load_input(input, input_dir))
        .collect();

    let combos = plan.combinations();
    info!(
        n_combinations = combos.len(),
        n_threads = pool.current_num_threads(),
        "starting sweep"
    );

    // Combinations are input-major, so each input owns a contiguous block.
    let per_input = plan.cases.len() * plan.precisions.len();
    let outcomes: Vec<CombinationOutcome> = pool.install(|| {
        combos
            .par_iter()
            .enumerate()
            .map(|(k, combo)| run_combination(combo, &signals[k / per_input], output_base))
            .collect()
    });

    let report = SweepReport { outcomes };
    for &precision in &plan.precisions {
        let layout = OutputLayout::tagged(output_base, precision.suffix());
        let json = report.summary_json(precision)?;
        write_bytes(&layout.summary_path(), json.as_bytes())?;
    }

    info!(
        n_ok = report.n_ok(),
        n_failed = report.outcomes().len() - report.n_ok(),
        "sweep finished"
    );
    Ok(report)
}

fn load_input(input: &InputSpec, input_dir: &Path) -> Result<Vec<f64>, BenchError> {
    let length = input.length()?;
    Ok(read_signal(&input_dir.join(&input.name), length)?)
}

#[tracing::instrument(
    skip_all,
    fields(input = %combo.input.name, case = %combo.case.name, precision = %combo.precision)
)]
fn run_combination(
    combo: &Combination<'_>,
    signal: &Result<Vec<f64>, BenchError>,
    output_base: &Path,
) -> CombinationOutcome {
    let result = signal
        .as_ref()
        .map_err(Clone::clone)
        .and_then(|signal| process_and_write(combo, signal, output_base));

    if let Err(e) = &result {
        warn!(
            input = %combo.input.name,
            case = %combo.case.name,
            wavelet = %combo.case.wavelet,
            boundary = %combo.case.boundary,
            precision = %combo.precision,
            error = %e,
            "combination failed"
        );
    }

    CombinationOutcome {
        input: combo.input.name.clone(),
        case: combo.case.name.clone(),
        wavelet: combo.case.wavelet.clone(),
        boundary: combo.case.boundary.clone(),
        precision: combo.precision,
        result,
    }
}

fn process_and_write(
    combo: &Combination<'_>,
    signal: &[f64],
    output_base: &Path,
) -> Result<ErrorStats, BenchError> {
    let result = process_1d(
        signal,
        &combo.case.wavelet,
        &combo.case.boundary,
        combo.precision,
    )?;
    let layout = OutputLayout::tagged(output_base, combo.precision.suffix());
    for subband in Subband::ALL {
        let path = layout.subband_path(&combo.input.name, &combo.case.name, subband);
        write_signal(&path, result.subband(subband))?;
    }
    result.reconstruction_stats(signal)
}
