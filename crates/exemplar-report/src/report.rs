//! Report Types
//!
//! Serialization structs for the final state of a simulation run.
//!
//! A report carries the initial draws and the three experiment results
//! (singleton under external updating, geminate under external updating, and
//! the pair under competitive updating). Plotting tools read nothing else.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::PoolStats;

/// Generates a fresh run ID.
pub fn generate_run_id() -> String {
    format!("run_{}", Uuid::new_v4().simple())
}

/// How the competitive experiment's starting pools relate to the external one's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialPoolPolicy {
    /// Fresh draws from the same distributions
    #[default]
    Independent,
    /// Exact copies of the external experiment's starting pools
    Shared,
}

impl std::fmt::Display for InitialPoolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitialPoolPolicy::Independent => write!(f, "independent"),
            InitialPoolPolicy::Shared => write!(f, "shared"),
        }
    }
}

impl std::str::FromStr for InitialPoolPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "independent" => Ok(InitialPoolPolicy::Independent),
            "shared" => Ok(InitialPoolPolicy::Shared),
            other => Err(format!(
                "unknown initial pool policy '{}' (expected 'independent' or 'shared')",
                other
            )),
        }
    }
}

/// Parameters the run was made with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametersSnapshot {
    pub singleton_mean: f64,
    pub geminate_mean: f64,
    pub std_dev: f64,
    pub pool_size: usize,
    pub sample_size: usize,
    pub iterations: u64,
    pub noise_half_width: f64,
}

/// A pool's values together with their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub category: String,
    pub stats: PoolStats,
    pub values: Vec<f64>,
}

impl PoolSnapshot {
    pub fn new(category: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            stats: PoolStats::from_values(&values),
            values,
        }
    }
}

/// Result of updating one pool on its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub rule: String,
    pub pool: PoolSnapshot,
}

/// Where produced tokens were stored during competitive updating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradeCounts {
    pub singleton_kept: u64,
    pub singleton_to_geminate: u64,
    pub geminate_to_singleton: u64,
    pub geminate_kept: u64,
}

impl TradeCounts {
    /// Tokens stored in the category they were not produced from
    pub fn traded(&self) -> u64 {
        self.singleton_to_geminate + self.geminate_to_singleton
    }
}

/// Result of updating both pools jointly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveResult {
    pub rule: String,
    /// Starting pools (equal to the report's initial pools under `shared`)
    pub initial_singleton: PoolSnapshot,
    pub initial_geminate: PoolSnapshot,
    pub singleton: PoolSnapshot,
    pub geminate: PoolSnapshot,
    #[serde(default)]
    pub trades: TradeCounts,
}

/// Category separation (d') at each stage of the run.
///
/// `None` when both pools have zero spread.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputedMetrics {
    pub initial_separation: Option<f64>,
    pub external_separation: Option<f64>,
    pub competitive_separation: Option<f64>,
}

/// Complete output of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: String,
    pub seed: u64,
    pub policy: InitialPoolPolicy,
    pub parameters: ParametersSnapshot,
    pub initial_singleton: PoolSnapshot,
    pub initial_geminate: PoolSnapshot,
    pub external_singleton: ExperimentResult,
    pub external_geminate: ExperimentResult,
    pub competitive: CompetitiveResult,
    #[serde(default)]
    pub metrics: ComputedMetrics,
}

impl SimulationReport {
    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
