//! Parameter-set models and loaders for the nested helix formula generator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One nested helix parameter set as written in YAML or TOML.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HelixConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub primary: PrimaryHelixConfig,
    pub secondary: SecondaryHelixConfig,
    pub range: ParameterRangeConfig,
}

/// The outer tapered helix.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PrimaryHelixConfig {
    pub initial_radius: f64,
    pub final_radius: f64,
    pub height: f64,
    pub turns: f64,
}

/// The helix wound around the primary one.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SecondaryHelixConfig {
    pub initial_radius: f64,
    pub final_radius: f64,
    pub turns: f64,
}

/// Interval swept by the curve parameter `t`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ParameterRangeConfig {
    pub start: f64,
    pub end: f64,
}

/// Errors that can occur while loading parameter files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load parameter sets from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_parameter_sets<P: AsRef<Path>>(path: P) -> Result<Vec<HelixConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        return toml_sets_in(path);
    }
    if is_toml(path) {
        return Ok(vec![toml_set(path)?]);
    }
    let reader = File::open(path)?;
    Ok(serde_yaml::from_reader(reader)?)
}

/// Every `*.toml` file directly inside `dir`, in file-name order.
fn toml_sets_in(dir: &Path) -> Result<Vec<HelixConfig>, ConfigError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_toml(path))
        .collect();
    paths.sort();
    paths.iter().map(|path| toml_set(path)).collect()
}

fn toml_set(path: &Path) -> Result<HelixConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
