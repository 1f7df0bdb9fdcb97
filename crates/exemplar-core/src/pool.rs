//! Exemplar Pools
//!
//! A pool is one category's stored exemplars: a fixed-size sequence of
//! closure durations in milliseconds. Updating never grows or shrinks a pool,
//! it only overwrites single slots.

use exemplar_report::PoolStats;
use rand::Rng;

/// A category's population of exemplar durations
#[derive(Debug, Clone, PartialEq)]
pub struct ExemplarPool {
    values: Vec<f64>,
}

impl ExemplarPool {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Draw `size` independent values from Normal(mean, std_dev)
    pub fn from_normal<R: Rng + ?Sized>(size: usize, mean: f64, std_dev: f64, rng: &mut R) -> Self {
        let values = (0..size)
            .map(|_| mean + std_dev * standard_normal(rng))
            .collect();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Arithmetic mean of the current values (NaN for an empty pool)
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats::from_values(&self.values)
    }

    /// Pick a slot uniformly at random, or None if the pool is empty
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.values.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.values.len()))
        }
    }

    /// Draw `count` values uniformly with replacement.
    ///
    /// Yields nothing for an empty pool.
    pub fn sample_with_replacement<'a, R: Rng + ?Sized>(
        &'a self,
        count: usize,
        rng: &'a mut R,
    ) -> impl Iterator<Item = f64> + 'a {
        let count = if self.values.is_empty() { 0 } else { count };
        (0..count).map(move |_| self.values[rng.gen_range(0..self.values.len())])
    }

    /// Overwrite a uniformly chosen slot, returning its index
    pub fn replace_random<R: Rng + ?Sized>(&mut self, value: f64, rng: &mut R) -> Option<usize> {
        let index = self.random_index(rng)?;
        self.values[index] = value;
        Some(index)
    }
}

impl From<Vec<f64>> for ExemplarPool {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[f64]> for ExemplarPool {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Standard normal variate via Box-Muller
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 1 - [0, 1) keeps u1 away from zero so ln() stays finite
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
