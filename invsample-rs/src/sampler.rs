//! Monte Carlo estimate of the distribution of normalized sums.
//!
//! Each iteration draws a group of values from the target distribution
//! (uniform draw pushed through the inverse CDF), normalizes the group to
//! sum to one, and deposits the result into a histogram. A run ends once
//! the histogram holds a fixed number of samples.

use tracing::{debug, info};
use unirand_rs::UniformSource;

use crate::{
    boundary,
    consts::{DEFAULT_DEPOSIT_ALL, DEFAULT_GROUP_SIZE, N_ITER},
    error::{Error, Result},
    float::SampleFloat,
    histogram::Histogram,
    interpolant::Interpolant,
};

/// Per-sampler settings, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Draws summed and normalized per iteration
    pub group_size: usize,
    /// Deposit every member of a group, or only the first
    pub deposit_all: bool,
    /// Run until the histogram holds at least this many samples
    pub target_count: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            deposit_all: DEFAULT_DEPOSIT_ALL,
            target_count: N_ITER,
        }
    }
}

impl SamplerConfig {
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn with_deposit_all(mut self, deposit_all: bool) -> Self {
        self.deposit_all = deposit_all;
        self
    }

    pub fn with_target_count(mut self, target_count: u64) -> Self {
        self.target_count = target_count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.group_size == 0 {
            return Err(Error::InvalidGroupSize(self.group_size));
        }
        Ok(())
    }
}

pub struct Sampler<F, R> {
    inverse_cdf: Interpolant<F>,
    pdf: Histogram<F>,
    rng: R,
    config: SamplerConfig,
    values: Vec<F>,
}

impl<F: SampleFloat, R: UniformSource<F>> Sampler<F, R> {
    pub fn new(inverse_cdf: Interpolant<F>, rng: R, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        let pdf = Histogram::new(inverse_cdf.bins())?;
        Ok(Self {
            inverse_cdf,
            pdf,
            rng,
            config,
            values: vec![F::zero(); config.group_size],
        })
    }

    /// Build the interpolant from interior control values, then the sampler.
    pub fn from_points(bins: usize, points: &[F], rng: R, config: SamplerConfig) -> Result<Self> {
        Self::new(Interpolant::new(bins, points)?, rng, config)
    }

    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    #[inline]
    pub fn inverse_cdf(&self) -> &Interpolant<F> {
        &self.inverse_cdf
    }

    /// Result of the most recent run (empty before the first one)
    #[inline]
    pub fn histogram(&self) -> &Histogram<F> {
        &self.pdf
    }

    pub fn into_histogram(self) -> Histogram<F> {
        self.pdf
    }

    #[inline]
    fn continue_condition(&self) -> bool {
        self.pdf.count() < self.config.target_count
    }

    /// One sample of the target distribution, kept off zero so a group
    /// sum cannot vanish.
    #[inline]
    fn draw(&mut self) -> F {
        let u = boundary::admit_uniform(self.rng.uniform());
        boundary::lift_from_zero(self.inverse_cdf.evaluate(u))
    }

    fn generate_normalized_values(&mut self) {
        for i in 0..self.values.len() {
            self.values[i] = self.draw();
        }
        boundary::normalize_group(&mut self.values);
    }

    fn deposit_values(&mut self) {
        if self.config.deposit_all {
            for &x in &self.values {
                self.pdf.deposit(x);
            }
        } else {
            self.pdf.deposit(self.values[0]);
        }
    }

    /// Run the sampling loop to completion and return the filled histogram.
    ///
    /// Each call starts from an empty histogram and a reseeded random
    /// source, so calls are independent runs.
    pub fn generate(&mut self) -> &Histogram<F> {
        self.pdf.clear();
        self.rng.reseed();
        info!(
            bins = self.pdf.bins(),
            group_size = self.config.group_size,
            deposit_all = self.config.deposit_all,
            target = self.config.target_count,
            precision = ?F::PRECISION,
            "sampling"
        );

        let mut iterations = 0u64;
        while self.continue_condition() {
            self.generate_normalized_values();
            self.deposit_values();
            iterations += 1;
        }

        debug!(iterations, "sampling loop finished");
        info!(count = self.pdf.count(), "sampling done");
        &self.pdf
    }
}
