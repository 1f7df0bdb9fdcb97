//! Shared report types for the exemplar dynamics simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is the contract between the simulation core and whatever renders the
//! density plots.

pub mod report;
pub mod stats;

// Re-export stats types
pub use stats::PoolStats;

// Re-export report types
pub use report::{
    generate_run_id, CompetitiveResult, ComputedMetrics, ExperimentResult, InitialPoolPolicy,
    ParametersSnapshot, PoolSnapshot, SimulationReport, TradeCounts,
};
