//! Simulation Parameters
//!
//! The fixed inputs of a run: category means, shared spread, pool and sample
//! sizes, iteration count and production noise.

use exemplar_report::ParametersSnapshot;
use serde::{Deserialize, Serialize};

use crate::error::ExemplarError;

/// Immutable configuration for all three experiments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Mean singleton closure duration (ms)
    pub singleton_mean: f64,
    /// Mean geminate closure duration (ms)
    pub geminate_mean: f64,
    /// Standard deviation shared by both categories (ms)
    pub std_dev: f64,
    /// Exemplars per pool
    pub pool_size: usize,
    /// Exemplars averaged per produced token
    pub sample_size: usize,
    /// Update iterations per experiment
    pub iterations: u64,
    /// Production noise is uniform on (-noise_half_width, noise_half_width)
    pub noise_half_width: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            singleton_mean: 75.0,
            geminate_mean: 100.0,
            std_dev: 15.0,
            pool_size: 100,
            sample_size: 3,
            iterations: 10_000,
            noise_half_width: 25.0,
        }
    }
}

impl SimulationParameters {
    /// Check pool_size >= sample_size >= 1, noise >= 0 and finite spreads/means
    pub fn validate(&self) -> Result<(), ExemplarError> {
        if self.pool_size == 0 {
            return Err(ExemplarError::invalid("pool_size", "must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(ExemplarError::invalid("sample_size", "must be at least 1"));
        }
        if self.sample_size > self.pool_size {
            return Err(ExemplarError::invalid(
                "sample_size",
                format!(
                    "must not exceed pool_size ({} > {})",
                    self.sample_size, self.pool_size
                ),
            ));
        }
        if !self.noise_half_width.is_finite() || self.noise_half_width < 0.0 {
            return Err(ExemplarError::invalid(
                "noise_half_width",
                format!("must be finite and >= 0, got {}", self.noise_half_width),
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ExemplarError::invalid(
                "std_dev",
                format!("must be finite and >= 0, got {}", self.std_dev),
            ));
        }
        if !self.singleton_mean.is_finite() {
            return Err(ExemplarError::invalid("singleton_mean", "must be finite"));
        }
        if !self.geminate_mean.is_finite() {
            return Err(ExemplarError::invalid("geminate_mean", "must be finite"));
        }
        Ok(())
    }

    pub fn with_iterations(self, iterations: u64) -> Self {
        Self { iterations, ..self }
    }

    pub fn snapshot(&self) -> ParametersSnapshot {
        ParametersSnapshot {
            singleton_mean: self.singleton_mean,
            geminate_mean: self.geminate_mean,
            std_dev: self.std_dev,
            pool_size: self.pool_size,
            sample_size: self.sample_size,
            iterations: self.iterations,
            noise_half_width: self.noise_half_width,
        }
    }
}
