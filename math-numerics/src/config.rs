//! JSON configuration for the iterative solvers

use crate::error::{NumericsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Jacobi / Gauss-Seidel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterativeConfig {
    /// Stop once the largest component change between iterates drops below this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Safety ceiling on the number of sweeps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Print progress every N iterations (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

fn default_tolerance() -> f64 {
    1e-3
}

fn default_max_iterations() -> usize {
    10_000
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            print_interval: 0,
        }
    }
}

impl IterativeConfig {
    /// Check that the tolerance and iteration ceiling are usable
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(NumericsError::InvalidConfig(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(NumericsError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: IterativeConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
