//! Entrenchment Sampling
//!
//! Production step shared by both update rules. A produced token is the mean
//! of several stored exemplars (drawn with replacement) plus uniform noise on
//! the open interval (-eta, eta).

use rand::Rng;

use crate::error::ExemplarError;
use crate::params::SimulationParameters;
use crate::pool::ExemplarPool;

/// Produces candidate exemplars from a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrenchmentSampler {
    sample_size: usize,
    noise_half_width: f64,
}

impl EntrenchmentSampler {
    pub fn new(sample_size: usize, noise_half_width: f64) -> Result<Self, ExemplarError> {
        if sample_size == 0 {
            return Err(ExemplarError::invalid("sample_size", "must be at least 1"));
        }
        if !noise_half_width.is_finite() || noise_half_width < 0.0 {
            return Err(ExemplarError::invalid(
                "noise_half_width",
                format!("must be finite and >= 0, got {}", noise_half_width),
            ));
        }
        Ok(Self {
            sample_size,
            noise_half_width,
        })
    }

    pub fn from_parameters(params: &SimulationParameters) -> Result<Self, ExemplarError> {
        params.validate()?;
        Self::new(params.sample_size, params.noise_half_width)
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn noise_half_width(&self) -> f64 {
        self.noise_half_width
    }

    /// Produce one candidate from `pool`.
    ///
    /// The sample size may exceed the pool length.
    pub fn produce<R: Rng + ?Sized>(
        &self,
        pool: &ExemplarPool,
        rng: &mut R,
    ) -> Result<f64, ExemplarError> {
        if pool.is_empty() {
            return Err(ExemplarError::invalid("pool", "cannot sample from an empty pool"));
        }
        Ok(self.produce_unchecked(pool, rng))
    }

    /// Produce without the emptiness check; callers validate once before looping.
    pub(crate) fn produce_unchecked<R: Rng + ?Sized>(&self, pool: &ExemplarPool, rng: &mut R) -> f64 {
        let total: f64 = pool.sample_with_replacement(self.sample_size, rng).sum();
        let target = total / self.sample_size as f64;
        target + self.noise(rng)
    }

    fn noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let eta = self.noise_half_width;
        if eta == 0.0 {
            return 0.0;
        }
        // gen_range is half-open; redraw the closed endpoint
        loop {
            let u = rng.gen_range(-eta..eta);
            if u != -eta {
                return u;
            }
        }
    }
}
