//! Competitive Update Rule
//!
//! Variant trading between two categories. A token produced from either pool
//! is stored in whichever pool's current mean it lies closer to, so exemplars
//! can migrate across the category boundary.
//!
//! Production alternates by iteration parity: even (1-based) iterations sample
//! from pool A, odd ones from pool B. Ties in distance go to B. Both choices
//! are kept for compatibility with reference output.

use rand::Rng;
use tracing::debug;

use crate::error::ExemplarError;
use crate::params::SimulationParameters;
use crate::pool::ExemplarPool;
use crate::sampler::EntrenchmentSampler;

/// One of the two competing pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolSide {
    A,
    B,
}

impl PoolSide {
    /// Pool that produces the candidate at a 1-based iteration index
    pub fn source_for_iteration(iteration: u64) -> Self {
        if iteration % 2 == 0 {
            PoolSide::A
        } else {
            PoolSide::B
        }
    }

    /// Pool a candidate is stored in, given both current means.
    ///
    /// A only wins when strictly closer.
    pub fn nearest(candidate: f64, mean_a: f64, mean_b: f64) -> Self {
        if (candidate - mean_a).abs() < (candidate - mean_b).abs() {
            PoolSide::A
        } else {
            PoolSide::B
        }
    }
}

/// What a single competitive iteration did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub iteration: u64,
    pub source: PoolSide,
    pub target: PoolSide,
    pub slot: usize,
    pub value: f64,
}

impl Assignment {
    /// Whether the token left its pool of origin
    pub fn is_trade(&self) -> bool {
        self.source != self.target
    }
}

/// Counts of where produced tokens ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TradeTally {
    pub a_to_a: u64,
    pub a_to_b: u64,
    pub b_to_a: u64,
    pub b_to_b: u64,
}

impl TradeTally {
    pub fn record(&mut self, assignment: &Assignment) {
        match (assignment.source, assignment.target) {
            (PoolSide::A, PoolSide::A) => self.a_to_a += 1,
            (PoolSide::A, PoolSide::B) => self.a_to_b += 1,
            (PoolSide::B, PoolSide::A) => self.b_to_a += 1,
            (PoolSide::B, PoolSide::B) => self.b_to_b += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.a_to_a + self.a_to_b + self.b_to_a + self.b_to_b
    }

    pub fn traded(&self) -> u64 {
        self.a_to_b + self.b_to_a
    }
}

/// Joint updating of two pools with nearest-mean assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitiveUpdate {
    sampler: EntrenchmentSampler,
    iterations: u64,
}

impl CompetitiveUpdate {
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

    /// Run all iterations and return both final pools
    pub fn run<R: Rng + ?Sized>(
        &self,
        a: ExemplarPool,
        b: ExemplarPool,
        rng: &mut R,
    ) -> Result<(ExemplarPool, ExemplarPool), ExemplarError> {
        let (a, b, _) = self.run_tallied(a, b, rng)?;
        Ok((a, b))
    }

    /// Run all iterations, also counting where each token was stored
    pub fn run_tallied<R: Rng + ?Sized>(
        &self,
        mut a: ExemplarPool,
        mut b: ExemplarPool,
        rng: &mut R,
    ) -> Result<(ExemplarPool, ExemplarPool, TradeTally), ExemplarError> {
        check_pools(&a, &b)?;

        debug!(
            iterations = self.iterations,
            mean_a = a.mean(),
            mean_b = b.mean(),
            "competitive update starting"
        );

        let mut tally = TradeTally::default();
        for iteration in 1..=self.iterations {
            let assignment = self.step_unchecked(&mut a, &mut b, iteration, rng);
            tally.record(&assignment);
        }

        debug!(
            mean_a = a.mean(),
            mean_b = b.mean(),
            traded = tally.traded(),
            "competitive update finished"
        );
        Ok((a, b, tally))
    }

    /// Perform the iteration with 1-based index `iteration`
    pub fn step<R: Rng + ?Sized>(
        &self,
        a: &mut ExemplarPool,
        b: &mut ExemplarPool,
        iteration: u64,
        rng: &mut R,
    ) -> Result<Assignment, ExemplarError> {
        check_pools(a, b)?;
        Ok(self.step_unchecked(a, b, iteration, rng))
    }

    fn step_unchecked<R: Rng + ?Sized>(
        &self,
        a: &mut ExemplarPool,
        b: &mut ExemplarPool,
        iteration: u64,
        rng: &mut R,
    ) -> Assignment {
        let source = PoolSide::source_for_iteration(iteration);
        let value = match source {
            PoolSide::A => self.sampler.produce_unchecked(a, rng),
            PoolSide::B => self.sampler.produce_unchecked(b, rng),
        };

        let target = PoolSide::nearest(value, a.mean(), b.mean());
        let winner = match target {
            PoolSide::A => a,
            PoolSide::B => b,
        };
        let slot = winner.replace_random(value, rng).unwrap_or_default();

        Assignment {
            iteration,
            source,
            target,
            slot,
            value,
        }
    }
}

fn check_pools(a: &ExemplarPool, b: &ExemplarPool) -> Result<(), ExemplarError> {
    if a.is_empty() {
        return Err(ExemplarError::invalid("pool_a", "competitive update needs a non-empty pool"));
    }
    if b.is_empty() {
        return Err(ExemplarError::invalid("pool_b", "competitive update needs a non-empty pool"));
    }
    Ok(())
}
