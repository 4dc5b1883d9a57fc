//! # unirand: reseedable uniform(0,1) sources
//!
//! Samplers only ever need one thing from randomness: a stream of values
//! uniformly distributed on [0, 1). This crate provides that as the
//! [`UniformSource`] trait, plus [`UniformRng`], a concrete source whose
//! engine is picked from the working floating-point [`Precision`].
//!
//! Every source can be reseeded between runs. A source built with
//! [`Seeding::Fixed`] derives a new seed for each run, so runs stay
//! independent of each other while the whole sequence stays reproducible.

mod engine;

use engine::Engine;
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
};
use tracing::trace;

/// Floating-point precision a sampler works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Single,
    Double,
}

/// How a source (re)initializes its state at the start of each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Fresh operating-system entropy for every run
    Entropy,
    /// Run `k` (counting from 0) is seeded with `seed + k`
    Fixed(u64),
}

/// A pluggable source of uniform(0,1) values.
pub trait UniformSource<F> {
    /// Draw one value, nominally in [0, 1).
    fn uniform(&mut self) -> F;

    /// Re-initialize internal state so the next run is independent of the
    /// previous one.
    fn reseed(&mut self);
}

/// Uniform generator with a precision-keyed engine
pub struct UniformRng {
    engine: Engine,
    precision: Precision,
    seeding: Seeding,
    runs: u64,
}

impl UniformRng {
    /// Build the generator appropriate for `precision`.
    pub fn for_precision(precision: Precision, seeding: Seeding) -> Self {
        Self {
            engine: Self::make_engine(precision, seeding, 0),
            precision,
            seeding,
            runs: 0,
        }
    }

    /// Shorthand for a reproducible generator
    pub fn with_seed(precision: Precision, seed: u64) -> Self {
        Self::for_precision(precision, Seeding::Fixed(seed))
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[inline]
    pub fn seeding(&self) -> Seeding {
        self.seeding
    }

    /// Number of times the generator has been reseeded
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    fn make_engine(precision: Precision, seeding: Seeding, run: u64) -> Engine {
        match seeding {
            Seeding::Entropy => Engine::from_entropy(precision),
            Seeding::Fixed(seed) => Engine::from_seed(precision, seed.wrapping_add(run)),
        }
    }
}

impl Default for UniformRng {
    fn default() -> Self {
        Self::for_precision(Precision::Double, Seeding::Entropy)
    }
}

impl<F> UniformSource<F> for UniformRng
where
    StandardUniform: Distribution<F>,
{
    #[inline]
    fn uniform(&mut self) -> F {
        self.engine.sample()
    }

    fn reseed(&mut self) {
        self.runs += 1;
        trace!(run = self.runs, seeding = ?self.seeding, "reseeding uniform source");
        self.engine = Self::make_engine(self.precision, self.seeding, self.runs);
    }
}

/// Adapts any seedable `rand` generator into a [`UniformSource`].
///
/// Reseeding draws the next seed from the generator itself, so a seeded
/// adapter replays the same sequence of runs.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + SeedableRng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<F, R> UniformSource<F> for RngSource<R>
where
    R: Rng + SeedableRng,
    StandardUniform: Distribution<F>,
{
    #[inline]
    fn uniform(&mut self) -> F {
        self.rng.random()
    }

    fn reseed(&mut self) {
        self.rng = R::from_rng(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_n<F>(rng: &mut UniformRng, n: usize) -> Vec<F>
    where
        StandardUniform: Distribution<F>,
    {
        (0..n).map(|_| rng.uniform()).collect()
    }

    #[test]
    fn test_uniform_range_double() {
        let mut rng = UniformRng::with_seed(Precision::Double, 42);
        for _ in 0..1000 {
            let u: f64 = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_range_single() {
        let mut rng = UniformRng::with_seed(Precision::Single, 42);
        for _ in 0..1000 {
            let u: f32 = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_mean() {
        let mut rng = UniformRng::with_seed(Precision::Double, 7);
        let n = 10000;
        let sum: f64 = draw_n::<f64>(&mut rng, n).iter().sum();
        let mean = sum / n as f64;
        assert!(
            (mean - 0.5).abs() < 0.02,
            "Mean should be close to 0.5, got {}",
            mean
        );
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let mut a = UniformRng::with_seed(Precision::Double, 3);
        let mut b = UniformRng::with_seed(Precision::Double, 3);
        assert_eq!(draw_n::<f64>(&mut a, 16), draw_n::<f64>(&mut b, 16));
    }

    #[test]
    fn test_reseed_starts_new_stream() {
        let mut rng = UniformRng::with_seed(Precision::Double, 3);
        let first = draw_n::<f64>(&mut rng, 16);
        UniformSource::<f64>::reseed(&mut rng);
        let second = draw_n::<f64>(&mut rng, 16);
        assert_ne!(first, second);
        assert_eq!(rng.runs(), 1);

        // The same reseed sequence replays the same streams.
        let mut replay = UniformRng::with_seed(Precision::Double, 3);
        let _ = draw_n::<f64>(&mut replay, 16);
        UniformSource::<f64>::reseed(&mut replay);
        assert_eq!(second, draw_n::<f64>(&mut replay, 16));
    }

    #[test]
    fn test_rng_source_adapter() {
        use rand::rngs::StdRng;

        let mut a = RngSource::new(StdRng::seed_from_u64(11));
        let mut b = RngSource::new(StdRng::seed_from_u64(11));
        for _ in 0..100 {
            let (x, y): (f64, f64) = (a.uniform(), b.uniform());
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, y);
        }
        UniformSource::<f64>::reseed(&mut a);
        UniformSource::<f64>::reseed(&mut b);
        let (x, y): (f32, f32) = (a.uniform(), b.uniform());
        assert_eq!(x, y);
    }

    #[test]
    fn test_entropy_seeding() {
        let mut rng = UniformRng::default();
        assert_eq!(rng.precision(), Precision::Double);
        assert_eq!(rng.seeding(), Seeding::Entropy);
        let u: f64 = rng.uniform();
        assert!((0.0..1.0).contains(&u));
    }
}
