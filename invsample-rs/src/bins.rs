//! Uniform bin geometry on [0, 1).
//!
//! The interpolant and the histogram both bin [0, 1) into `bins` equal-width
//! bins; both go through these functions so their edges always agree.

use crate::float::SampleFloat;

#[inline]
pub fn bin_edge<F: SampleFloat>(n: usize, bins: usize) -> F {
    assert!(n <= bins, "edge {} > {}", n, bins);
    F::from_usize(n) / F::from_usize(bins)
}

#[inline]
pub fn bin_center<F: SampleFloat>(n: usize, bins: usize) -> F {
    assert!(n < bins, "bin {} >= {}", n, bins);
    let half = F::one() / (F::one() + F::one());
    (F::from_usize(n) + half) / F::from_usize(bins)
}

/// Bin holding `x`; `x` must already be known to lie in [0, 1).
#[inline]
pub fn bin_index<F: SampleFloat>(x: F, bins: usize) -> usize {
    (x * F::from_usize(bins)).floor_index().min(bins - 1)
}

#[inline]
pub fn in_unit_interval<F: SampleFloat>(x: F) -> bool {
    x >= F::zero() && x < F::one()
}

/// All `bins + 1` edges, 0 through 1
pub fn bin_edges<F: SampleFloat>(bins: usize) -> Vec<F> {
    (0..=bins).map(|n| bin_edge(n, bins)).collect()
}

/// The `bins - 1` edges strictly between 0 and 1
pub fn interior_edges<F: SampleFloat>(bins: usize) -> Vec<F> {
    (1..bins).map(|n| bin_edge(n, bins)).collect()
}

pub fn bin_centers<F: SampleFloat>(bins: usize) -> Vec<F> {
    (0..bins).map(|n| bin_center(n, bins)).collect()
}
