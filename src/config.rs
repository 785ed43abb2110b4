use std::fs;
use std::path::Path;
use std::time::Duration;

use criterion::Criterion;
use serde::{Deserialize, Serialize};

use crate::error::BenchError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Harness policy (warm-up, sample count, seed)
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Measurement policy handed to criterion.
///
/// Dataset shape and predicate are fixed; only how long and how often we
/// measure is configurable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Dataset seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Samples per operation (criterion requires >= 10)
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measurement_ms: u64,
    pub noise_threshold: f64,
    pub track_allocations: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: Some(42),
            sample_size: 100,
            warm_up_ms: 3000,
            measurement_ms: 5000,
            noise_threshold: 0.02,
            track_allocations: true,
        }
    }
}

impl BenchConfig {
    /// Reject values criterion would panic on.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.warm_up_ms == 0 {
            return Err(BenchError::InvalidConfig(
                "bench.warm_up_ms must be > 0".to_string(),
            ));
        }
        if self.measurement_ms == 0 {
            return Err(BenchError::InvalidConfig(
                "bench.measurement_ms must be > 0".to_string(),
            ));
        }
        if self.noise_threshold.is_nan() || self.noise_threshold < 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "bench.noise_threshold must be >= 0, got {}",
                self.noise_threshold
            )));
        }
        Ok(())
    }

    /// Build a criterion instance from this policy. Call [`Self::validate`]
    /// first; `AppConfig::load_from` already does.
    pub fn criterion(&self) -> Criterion {
        Criterion::default()
            .sample_size(self.sample_size.max(10))
            .warm_up_time(Duration::from_millis(self.warm_up_ms))
            .measurement_time(Duration::from_millis(self.measurement_ms))
            .noise_threshold(self.noise_threshold)
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`.
    pub fn load(env: &str) -> Result<Self, BenchError> {
        let config_path = format!("config/{}.yaml", env);
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, BenchError> {
        let content = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_yaml::from_str(&content).map_err(|source| BenchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.bench.validate()?;
        Ok(config)
    }
}
