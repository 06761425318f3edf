//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use wavelift_bench::{CaseSpec, InputSpec, SweepPlan};
use wavelift_lifting::Precision;

use crate::config::BenchConfig;

/// Parses precision names, rejecting unknown ones and duplicates.
pub fn parse_precisions(names: &[String]) -> Result<Vec<Precision>> {
    let mut precisions = Vec::with_capacity(names.len());
    for name in names {
        let p = Precision::from_name(name).with_context(|| format!("invalid precision {name:?}"))?;
        if precisions.contains(&p) {
            bail!("precision {p} listed more than once");
        }
        precisions.push(p);
    }
    if precisions.is_empty() {
        bail!("at least one precision is required");
    }
    Ok(precisions)
}

/// Builds a [`SweepPlan`] from the config.
///
/// Wavelet and boundary names are passed through unresolved; an unknown
/// name fails only the combinations that use it. `precision_override`
/// replaces the configured precisions when non-empty.
pub fn build_sweep_plan(config: &BenchConfig, precision_override: &[String]) -> Result<SweepPlan> {
    let names = if precision_override.is_empty() {
        &config.precisions
    } else {
        precision_override
    };
    if config.threads == Some(0) {
        bail!("threads must be at least 1");
    }

    Ok(SweepPlan {
        inputs: config
            .inputs
            .iter()
            .map(|i| InputSpec::new(&i.name, i.shape.clone()))
            .collect(),
        cases: config
            .wavelets
            .iter()
            .map(|w| CaseSpec::new(&w.name, &w.id, &w.mode))
            .collect(),
        precisions: parse_precisions(names)?,
        threads: config.threads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(src: &str) -> BenchConfig {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn parse_precisions_aliases() {
        let names = ["reduced", "single", "DOUBLE"].map(String::from);
        assert_eq!(
            parse_precisions(&names).unwrap(),
            [Precision::BFloat16, Precision::Float32, Precision::Float64]
        );
    }

    #[test]
    fn parse_precisions_rejects_unknown() {
        let err = parse_precisions(&["f8".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported precision"));
    }

    #[test]
    fn parse_precisions_rejects_duplicates_and_empty() {
        assert!(parse_precisions(&["f32".to_string(), "single".to_string()]).is_err());
        assert!(parse_precisions(&[]).is_err());
    }

    #[test]
    fn plan_keeps_unknown_wavelet_names() {
        let cfg = config(
            r#"
            [[inputs]]
            name = "a"
            shape = [16]

            [[wavelets]]
            name = "odd"
            id = "sym8"
            mode = "mirror"
            "#,
        );
        let plan = build_sweep_plan(&cfg, &[]).unwrap();
        assert_eq!(plan.cases[0].wavelet, "sym8");
        assert_eq!(plan.cases[0].boundary, "mirror");
        assert_eq!(plan.precisions, [Precision::BFloat16, Precision::Float32]);
        assert_eq!(plan.inputs[0].shape, [16]);
    }

    #[test]
    fn plan_precision_override() {
        let cfg = config("precisions = [\"bf16\"]");
        let plan = build_sweep_plan(&cfg, &["f64".to_string()]).unwrap();
        assert_eq!(plan.precisions, [Precision::Float64]);
    }

    #[test]
    fn plan_rejects_zero_threads() {
        let cfg = config("threads = 0");
        assert!(build_sweep_plan(&cfg, &[]).is_err());
    }
}
