//! Category Statistics
//!
//! Separation between the two categories, used to compare how far the pools
//! drift under each update rule.

use exemplar_report::{ComputedMetrics, PoolStats};

use crate::driver::SimulationOutcome;
use crate::pool::ExemplarPool;

/// Sensitivity index d' between two pools: mean difference over pooled spread.
///
/// Returns `None` when neither pool has any spread.
pub fn separation(a: &ExemplarPool, b: &ExemplarPool) -> Option<f64> {
    separation_from_stats(&a.stats(), &b.stats())
}

pub fn separation_from_stats(a: &PoolStats, b: &PoolStats) -> Option<f64> {
    let pooled = ((a.std_dev.powi(2) + b.std_dev.powi(2)) / 2.0).sqrt();
    if pooled > 0.0 {
        Some((a.mean - b.mean).abs() / pooled)
    } else {
        None
    }
}

/// Absolute difference of the two pools' means
pub fn mean_gap(a: &ExemplarPool, b: &ExemplarPool) -> f64 {
    (a.mean() - b.mean()).abs()
}

/// Separation at each stage of a run
pub fn compute_metrics(outcome: &SimulationOutcome) -> ComputedMetrics {
    ComputedMetrics {
        initial_separation: separation(&outcome.initial_singleton, &outcome.initial_geminate),
        external_separation: separation(&outcome.external_singleton, &outcome.external_geminate),
        competitive_separation: separation(
            &outcome.competitive_singleton,
            &outcome.competitive_geminate,
        ),
    }
}
