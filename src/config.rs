//! TOML configuration of a profile run. Every field is optional.
//!
//! ```toml
//! [analysis]
//! subsets = [10, 15, 20]
//! samples = 500
//! report_nodes = 20
//! hiker_mass_kg = 80.0
//!
//! [output]
//! directory = "./output"
//! save_profile = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Number of evenly spread nodes used for each fitted spline.
    #[serde(default = "default_subsets")]
    pub subsets: Vec<usize>,
    /// Dense samples per spline.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Subset whose coefficients and route statistics are reported.
    #[serde(default = "default_report_nodes")]
    pub report_nodes: usize,
    #[serde(default = "default_hiker_mass_kg")]
    pub hiker_mass_kg: f64,
}

impl JobConfig {
    /// Rejects values that would make the run meaningless.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mass = self.analysis.hiker_mass_kg;
        if !(mass.is_finite() && mass > 0.0) {
            bail!("hiker_mass_kg must be a positive number, got {}", mass);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            subsets: default_subsets(),
            samples: default_samples(),
            report_nodes: default_report_nodes(),
            hiker_mass_kg: default_hiker_mass_kg(),
        }
    }
}

fn default_subsets() -> Vec<usize> {
    vec![10, 15, 20]
}
fn default_samples() -> usize {
    500
}
fn default_report_nodes() -> usize {
    20
}
fn default_hiker_mass_kg() -> f64 {
    80.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    /// Whether dense profiles are written as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_profile: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_profile: true,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}
fn default_true() -> bool {
    true
}

pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: JobConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: JobConfig = toml::from_str("").unwrap();

        assert_eq!(vec![10, 15, 20], config.analysis.subsets);
        assert_eq!(500, config.analysis.samples);
        assert_eq!(20, config.analysis.report_nodes);
        assert_eq!(80.0, config.analysis.hiker_mass_kg);
        assert_eq!(PathBuf::from("./output"), config.output.directory);
        assert!(config.output.save_profile);
    }

    #[test]
    fn partial_config() {
        let config: JobConfig = toml::from_str(
            r#"
            [analysis]
            subsets = [5, 8]
            hiker_mass_kg = 65.5

            [output]
            save_profile = false
            "#,
        )
        .unwrap();

        assert_eq!(vec![5, 8], config.analysis.subsets);
        assert_eq!(500, config.analysis.samples);
        assert_eq!(65.5, config.analysis.hiker_mass_kg);
        assert!(!config.output.save_profile);
    }

    #[test]
    fn non_positive_mass_rejected() {
        for mass in ["0.0", "-70.0", "nan"] {
            let config: JobConfig =
                toml::from_str(&format!("[analysis]\nhiker_mass_kg = {}\n", mass)).unwrap();

            assert!(config.validate().is_err(), "mass {} accepted", mass);
        }
        assert!(JobConfig::default().validate().is_ok());
    }

    #[test]
    fn load_config_validates() {
        let path = std::env::temp_dir().join(format!("elevation_spline_mass_{}.toml", std::process::id()));
        std::fs::write(&path, "[analysis]\nhiker_mass_kg = -1.0\n").unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<JobConfig, _> = toml::from_str("[analysis]\nnodes = 3\n");

        assert!(result.is_err());
    }
}
