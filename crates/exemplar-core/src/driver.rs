//! Simulation Driver
//!
//! Runs the three experiments of a simulation:
//! 1. external updating of the singleton pool
//! 2. external updating of the geminate pool
//! 3. competitive updating of a fresh singleton/geminate pair
//!
//! The driver owns the random stream and threads it through every call, so a
//! seed fully determines the outcome.

use exemplar_report::InitialPoolPolicy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::ExemplarError;
use crate::params::SimulationParameters;
use crate::pool::ExemplarPool;
use crate::rules::{CompetitiveUpdate, ExternalUpdate, TradeTally};

/// Final pools of all three experiments
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub policy: InitialPoolPolicy,
    /// Starting pools of the external experiments
    pub initial_singleton: ExemplarPool,
    pub initial_geminate: ExemplarPool,
    pub external_singleton: ExemplarPool,
    pub external_geminate: ExemplarPool,
    /// Starting pools of the competitive experiment
    pub competitive_initial_singleton: ExemplarPool,
    pub competitive_initial_geminate: ExemplarPool,
    pub competitive_singleton: ExemplarPool,
    pub competitive_geminate: ExemplarPool,
    /// Singleton is pool A, geminate is pool B
    pub trades: TradeTally,
}

/// Orchestrates pool initialization and the update rules
pub struct SimulationDriver<R: Rng = SmallRng> {
    params: SimulationParameters,
    policy: InitialPoolPolicy,
    rng: R,
}

impl SimulationDriver<SmallRng> {
    /// Driver with a `SmallRng` seeded from `seed`
    pub fn from_seed(
        params: SimulationParameters,
        policy: InitialPoolPolicy,
        seed: u64,
    ) -> Result<Self, ExemplarError> {
        Self::new(params, policy, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulationDriver<R> {
    pub fn new(
        params: SimulationParameters,
        policy: InitialPoolPolicy,
        rng: R,
    ) -> Result<Self, ExemplarError> {
        params.validate()?;
        Ok(Self { params, policy, rng })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn policy(&self) -> InitialPoolPolicy {
        self.policy
    }

    /// Draw a singleton and a geminate pool, in that order
    pub fn draw_initial_pools(&mut self) -> (ExemplarPool, ExemplarPool) {
        let p = &self.params;
        let singleton = ExemplarPool::from_normal(p.pool_size, p.singleton_mean, p.std_dev, &mut self.rng);
        let geminate = ExemplarPool::from_normal(p.pool_size, p.geminate_mean, p.std_dev, &mut self.rng);
        (singleton, geminate)
    }

    /// Run all three experiments.
    ///
    /// Random draws happen in a fixed order: initial pools, external
    /// singleton, external geminate, competitive starting pools (independent
    /// policy only), competitive run.
    pub fn run(&mut self) -> Result<SimulationOutcome, ExemplarError> {
        let external = ExternalUpdate::from_parameters(&self.params)?;
        let competitive = CompetitiveUpdate::from_parameters(&self.params)?;

        let (initial_singleton, initial_geminate) = self.draw_initial_pools();
        info!(
            singleton_mean = initial_singleton.mean(),
            geminate_mean = initial_geminate.mean(),
            "initial pools drawn"
        );

        let external_singleton = external.run(initial_singleton.clone(), &mut self.rng)?;
        let external_geminate = external.run(initial_geminate.clone(), &mut self.rng)?;
        info!(
            singleton_mean = external_singleton.mean(),
            geminate_mean = external_geminate.mean(),
            "external experiments finished"
        );

        let (competitive_initial_singleton, competitive_initial_geminate) = match self.policy {
            InitialPoolPolicy::Independent => self.draw_initial_pools(),
            InitialPoolPolicy::Shared => (initial_singleton.clone(), initial_geminate.clone()),
        };

        let (competitive_singleton, competitive_geminate, trades) = competitive.run_tallied(
            competitive_initial_singleton.clone(),
            competitive_initial_geminate.clone(),
            &mut self.rng,
        )?;
        info!(
            singleton_mean = competitive_singleton.mean(),
            geminate_mean = competitive_geminate.mean(),
            traded = trades.traded(),
            "competitive experiment finished"
        );

        Ok(SimulationOutcome {
            policy: self.policy,
            initial_singleton,
            initial_geminate,
            external_singleton,
            external_geminate,
            competitive_initial_singleton,
            competitive_initial_geminate,
            competitive_singleton,
            competitive_geminate,
            trades,
        })
    }
}
