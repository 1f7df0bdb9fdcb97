//! External Update Rule
//!
//! Category identity is guaranteed from outside the signal, so every produced
//! token is stored back into the pool it came from.

use rand::Rng;
use tracing::debug;

use crate::error::ExemplarError;
use crate::params::SimulationParameters;
use crate::pool::ExemplarPool;
use crate::sampler::EntrenchmentSampler;

/// Self-referential updating of a single pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalUpdate {
    sampler: EntrenchmentSampler,
    iterations: u64,
}

impl ExternalUpdate {
    pub fn new(sampler: EntrenchmentSampler, iterations: u64) -> Self {
        Self {
            sampler,
            iterations,
        }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Result<Self, ExemplarError> {
        Ok(Self::new(
            EntrenchmentSampler::from_parameters(params)?,
            params.iterations,
        ))
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run all iterations on `pool` and return its final state.
    ///
    /// Each iteration produces a candidate from the pool and overwrites one
    /// uniformly chosen slot of the same pool.
    pub fn run<R: Rng + ?Sized>(
        &self,
        mut pool: ExemplarPool,
        rng: &mut R,
    ) -> Result<ExemplarPool, ExemplarError> {
        if pool.is_empty() {
            return Err(ExemplarError::invalid("pool", "external update needs a non-empty pool"));
        }

        debug!(
            iterations = self.iterations,
            pool_size = pool.len(),
            start_mean = pool.mean(),
            "external update starting"
        );

        for _ in 0..self.iterations {
            let candidate = self.sampler.produce_unchecked(&pool, rng);
            pool.replace_random(candidate, rng);
        }

        debug!(end_mean = pool.mean(), "external update finished");
        Ok(pool)
    }
}
