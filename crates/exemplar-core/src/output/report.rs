//! Report Output
//!
//! Converts a finished run into a [`SimulationReport`] and writes it as JSON.

use exemplar_report::{
    generate_run_id, CompetitiveResult, ExperimentResult, PoolSnapshot, SimulationReport,
    TradeCounts,
};
use std::fs;
use std::path::Path;

use crate::driver::SimulationOutcome;
use crate::error::ReportError;
use crate::params::SimulationParameters;
use crate::pool::ExemplarPool;
use crate::rules::TradeTally;

use super::stats::compute_metrics;

pub const SINGLETON: &str = "singleton";
pub const GEMINATE: &str = "geminate";

fn snapshot(category: &str, pool: &ExemplarPool) -> PoolSnapshot {
    PoolSnapshot::new(category, pool.values().to_vec())
}

/// Singleton is pool A, geminate is pool B
fn trade_counts(tally: &TradeTally) -> TradeCounts {
    TradeCounts {
        singleton_kept: tally.a_to_a,
        singleton_to_geminate: tally.a_to_b,
        geminate_to_singleton: tally.b_to_a,
        geminate_kept: tally.b_to_b,
    }
}

/// Build the report for a finished run
pub fn build_report(
    outcome: &SimulationOutcome,
    params: &SimulationParameters,
    seed: u64,
) -> SimulationReport {
    SimulationReport {
        run_id: generate_run_id(),
        seed,
        policy: outcome.policy,
        parameters: params.snapshot(),
        initial_singleton: snapshot(SINGLETON, &outcome.initial_singleton),
        initial_geminate: snapshot(GEMINATE, &outcome.initial_geminate),
        external_singleton: ExperimentResult {
            rule: "external".to_string(),
            pool: snapshot(SINGLETON, &outcome.external_singleton),
        },
        external_geminate: ExperimentResult {
            rule: "external".to_string(),
            pool: snapshot(GEMINATE, &outcome.external_geminate),
        },
        competitive: CompetitiveResult {
            rule: "competitive".to_string(),
            initial_singleton: snapshot(SINGLETON, &outcome.competitive_initial_singleton),
            initial_geminate: snapshot(GEMINATE, &outcome.competitive_initial_geminate),
            singleton: snapshot(SINGLETON, &outcome.competitive_singleton),
            geminate: snapshot(GEMINATE, &outcome.competitive_geminate),
            trades: trade_counts(&outcome.trades),
        },
        metrics: compute_metrics(outcome),
    }
}

/// Write report to file, creating parent directories as needed
pub fn write_report(report: &SimulationReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = report.to_json()?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}

/// Read a previously written report
pub fn read_report(path: impl AsRef<Path>) -> Result<SimulationReport, ReportError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SimulationReport::from_json(&json)?)
}
