use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level benchmark configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Precisions to run at.
    #[serde(default = "default_precisions")]
    pub precisions: Vec<String>,

    /// Worker threads for the sweep; unset uses every core.
    #[serde(default)]
    pub threads: Option<usize>,

    /// RNG seed for `generate`.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Input signals.
    #[serde(default)]
    pub inputs: Vec<InputToml>,

    /// Wavelet test cases.
    #[serde(default)]
    pub wavelets: Vec<WaveletToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub name: String,
    pub shape: Vec<usize>,
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    pub name: String,
    pub id: String,
    pub mode: String,
}

fn default_precisions() -> Vec<String> {
    vec!["bf16".to_string(), "f32".to_string()]
}
fn default_magnitude() -> f64 {
    1.0
}

impl BenchConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
