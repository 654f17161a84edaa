//! Simulation configuration and the control ranges of the playground.
//!
//! Loading order, lowest to highest priority:
//! 1. compiled defaults
//! 2. a TOML file ([`SimulationConfig::load`])
//! 3. `CLT_*` environment variables ([`SimulationConfig::apply_env_overrides`])
//! 4. command-line flags (applied by the binary)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::histogram::DEFAULT_BINS;

pub const ENV_NUM_SIMULATIONS: &str = "CLT_NUM_SIMULATIONS";
pub const ENV_SAMPLE_SIZE: &str = "CLT_SAMPLE_SIZE";
pub const ENV_SEED: &str = "CLT_SEED";
pub const ENV_HISTOGRAM_BINS: &str = "CLT_HISTOGRAM_BINS";

/// An inclusive slider range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl SliderRange {
    /// Clamps `value` into `[min, max]`, then rounds to the nearest
    /// `min + k·step` (ties round up) that does not exceed `max`.
    ///
    /// # Examples
    /// ```
    /// use u_clt::config::SAMPLE_SIZE_CONTROL;
    /// assert_eq!(SAMPLE_SIZE_CONTROL.snap(0), 5);
    /// assert_eq!(SAMPLE_SIZE_CONTROL.snap(12), 10);
    /// assert_eq!(SAMPLE_SIZE_CONTROL.snap(13), 15);
    /// assert_eq!(SAMPLE_SIZE_CONTROL.snap(1_000), 100);
    /// ```
    pub fn snap(&self, value: usize) -> usize {
        let clamped = value.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        let snapped = self.min + steps * self.step;
        if snapped > self.max {
            snapped - self.step
        } else {
            snapped
        }
    }

    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Number-of-simulations slider: 1000 to 10000, step 100.
pub const NUM_SIMULATIONS_CONTROL: SliderRange = SliderRange {
    min: 1000,
    max: 10_000,
    step: 100,
};

/// Sample-size slider: 5 to 100, step 5.
pub const SAMPLE_SIZE_CONTROL: SliderRange = SliderRange {
    min: 5,
    max: 100,
    step: 5,
};

/// Parameters of one playground simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// How many sample means to draw.
    pub num_simulations: usize,
    /// Values per sample.
    pub sample_size: usize,
    /// Fixed seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Histogram bins in the playground view.
    pub histogram_bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: NUM_SIMULATIONS_CONTROL.min,
            sample_size: SAMPLE_SIZE_CONTROL.min,
            seed: None,
            histogram_bins: DEFAULT_BINS,
        }
    }
}

impl SimulationConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reads and parses a TOML file. Unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Applies `CLT_*` overrides read from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Absent keys leave the
    /// field untouched; an empty `CLT_SEED` clears the seed.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_NUM_SIMULATIONS) {
            self.num_simulations = parse_env(ENV_NUM_SIMULATIONS, &v)?;
        }
        if let Some(v) = lookup(ENV_SAMPLE_SIZE) {
            self.sample_size = parse_env(ENV_SAMPLE_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = if v.trim().is_empty() {
                None
            } else {
                Some(parse_env(ENV_SEED, &v)?)
            };
        }
        if let Some(v) = lookup(ENV_HISTOGRAM_BINS) {
            self.histogram_bins = parse_env(ENV_HISTOGRAM_BINS, &v)?;
        }
        Ok(())
    }

    /// Rejects zero counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("num_simulations", self.num_simulations),
            ("sample_size", self.sample_size),
            ("histogram_bins", self.histogram_bins),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Copy with both counts snapped onto the playground sliders.
    pub fn clamped_to_controls(&self) -> Self {
        Self {
            num_simulations: NUM_SIMULATIONS_CONTROL.snap(self.num_simulations),
            sample_size: SAMPLE_SIZE_CONTROL.snap(self.sample_size),
            ..self.clone()
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn snapped_values_are_on_the_slider(value in 0_usize..50_000) {
            for range in [NUM_SIMULATIONS_CONTROL, SAMPLE_SIZE_CONTROL] {
                let snapped = range.snap(value);
                prop_assert!(range.contains(snapped));
                prop_assert_eq!((snapped - range.min) % range.step, 0);
            }
        }
    }
}
