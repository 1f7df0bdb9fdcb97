//! Pool Statistics
//!
//! Summary statistics attached to every pool in a report.

use serde::{Deserialize, Serialize};

/// Summary of a pool of durations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoolStats {
    pub len: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PoolStats {
    /// Computes statistics over a slice of values.
    ///
    /// An empty slice yields all-zero statistics.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let len = values.len();
        let mean = values.iter().sum::<f64>() / len as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / len as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            len,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }

    /// Distance between the lowest and highest value
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
