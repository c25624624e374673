use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{check_damping, RankError, Result};

pub const DAMPING_FACTOR: f64 = 0.85;
pub const SAMPLES: usize = 10_000;
pub const MAX_ERROR: f64 = 0.001;
pub const MAX_SWEEPS: usize = 1000;    // sweeps to give up after (small corpora need ~10-30)

/// Tunables for one ranking run.
/// Passed explicitly into each engine so differently-tuned runs can coexist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub epsilon: f64,
    pub max_sweeps: usize,
    /// Seed for the sampler's rng; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        RankConfig {
            damping: DAMPING_FACTOR,
            samples: SAMPLES,
            epsilon: MAX_ERROR,
            max_sweeps: MAX_SWEEPS,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Read a JSON config; missing fields keep their defaults.
    /// Not validated here: callers may still override fields, then call `validate`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::invalid_argument("sample count must be positive"));
        }
        check_epsilon(self.epsilon)?;
        if self.max_sweeps == 0 {
            return Err(RankError::invalid_argument("sweep cap must be positive"));
        }
        Ok(())
    }
}

pub(crate) fn check_epsilon(epsilon: f64) -> Result<()> {
    if epsilon > 0.0 && epsilon.is_finite() {
        Ok(())
    } else {
        Err(RankError::invalid_argument(format!(
            "epsilon must be a positive number, got {}",
            epsilon
        )))
    }
}
