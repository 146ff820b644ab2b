//! Run configuration for pushover analyses.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curve::linspace;
use crate::dataset::DEFAULT_NOISE_FRACTION;
use crate::errors::{AnalysisError, ConfigError};
use crate::response::{PushoverModel, ResponseParameters};

/// Monotonic load sweep starting at zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadSweep {
    /// Final load of the sweep in newtons.
    pub max_load: f64,
    /// Number of evenly spaced samples, both ends included.
    pub samples: usize,
}

impl LoadSweep {
    /// Loads visited by the sweep.
    #[must_use]
    pub fn loads(&self) -> Vec<f64> {
        linspace(0.0, self.max_load, self.samples)
    }
}

impl Default for LoadSweep {
    fn default() -> Self {
        Self {
            max_load: 1_000.0,
            samples: 200,
        }
    }
}

/// Everything needed to run an analysis and generate its training set.
///
/// Missing fields in a configuration file fall back to the defaults.
///
/// # Examples
/// ```
/// use pushover::PushoverConfig;
///
/// let json = r#"{ "parameters": { "k_elastic": 2e3, "yield_force": 400.0, "ductility": 3.0 } }"#;
/// let config: PushoverConfig = serde_json::from_str(json)?;
/// assert_eq!(config.sweep.samples, 200);
/// assert!(config.validate().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushoverConfig {
    /// Response law parameters.
    pub parameters: ResponseParameters,
    /// Load sweep used to trace the capacity curve.
    pub sweep: LoadSweep,
    /// Target noise as a fraction of displacement.
    pub noise_fraction: f64,
    /// Seed for the training-set noise generator.
    pub seed: u64,
}

impl Default for PushoverConfig {
    fn default() -> Self {
        Self {
            parameters: ResponseParameters::default(),
            sweep: LoadSweep::default(),
            noise_fraction: DEFAULT_NOISE_FRACTION,
            seed: 42,
        }
    }
}

impl PushoverConfig {
    /// Read and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, is not valid JSON, or
    /// describes an invalid run.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("reading configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameters, sweep and noise settings.
    ///
    /// # Errors
    ///
    /// Returns the [`AnalysisError`] describing the first invalid setting. A noise fraction
    /// is rejected when the noise it implies at the largest displacement the model can
    /// return is not finite.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let model = PushoverModel::new(self.parameters)?;
        if self.sweep.samples == 0 {
            return Err(AnalysisError::EmptySweep);
        }
        if !(self.sweep.max_load.is_finite() && self.sweep.max_load >= 0.0) {
            return Err(AnalysisError::InvalidSweep {
                max_load: self.sweep.max_load,
            });
        }
        let largest_noise = self.noise_fraction * model.displacement_bound();
        if !(self.noise_fraction >= 0.0 && largest_noise.is_finite()) {
            return Err(AnalysisError::InvalidNoise {
                fraction: self.noise_fraction,
            });
        }
        Ok(())
    }
}
