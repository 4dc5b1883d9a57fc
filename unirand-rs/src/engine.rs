//! Concrete bit generators behind [`crate::UniformRng`].

use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::{SmallRng, StdRng},
};

use crate::Precision;

/// Generator engine, chosen once from the working precision.
///
/// Single precision gets the small, fast engine; double precision gets the
/// 64-bit standard engine so the extra mantissa bits are actually random.
pub(crate) enum Engine {
    Small(SmallRng),
    Std(StdRng),
}

impl Engine {
    pub(crate) fn from_entropy(precision: Precision) -> Self {
        match precision {
            Precision::Single => Self::Small(SmallRng::from_os_rng()),
            Precision::Double => Self::Std(StdRng::from_os_rng()),
        }
    }

    pub(crate) fn from_seed(precision: Precision, seed: u64) -> Self {
        match precision {
            Precision::Single => Self::Small(SmallRng::seed_from_u64(seed)),
            Precision::Double => Self::Std(StdRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    pub(crate) fn sample<F>(&mut self) -> F
    where
        StandardUniform: Distribution<F>,
    {
        match self {
            Engine::Small(r) => r.random(),
            Engine::Std(r) => r.random(),
        }
    }
}
