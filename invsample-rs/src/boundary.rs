//! Floating-point boundary correction.
//!
//! Histogram deposits need values in [0, 1), but inverse-CDF lookups can
//! return exactly 0 and group normalization can return exactly 1. Both are
//! moved by a single representable step instead of being clamped or
//! rejected. The bias this adds is on the order of one ULP per sample.

use crate::float::SampleFloat;

/// Step a raw sample one ULP toward 1 so a group sum is never zero.
#[inline]
pub fn lift_from_zero<F: SampleFloat>(x: F) -> F {
    x.step_toward(F::one())
}

/// Step a value one ULP toward 0 so an exact 1 becomes eligible for deposit.
#[inline]
pub fn nudge_below_one<F: SampleFloat>(x: F) -> F {
    x.step_toward(F::zero())
}

/// Admit a uniform draw into the interpolant's domain. Sources that
/// include 1 in their range have that single value stepped down.
#[inline]
pub fn admit_uniform<F: SampleFloat>(u: F) -> F {
    if u == F::one() { nudge_below_one(u) } else { u }
}

/// Normalize a group in place so it sums to one, then apply the
/// deposit-side correction to every member.
///
/// A group of one is left unnormalized: it exists to check that the
/// sampling step alone reproduces the target distribution.
pub fn normalize_group<F: SampleFloat>(values: &mut [F]) {
    if values.len() > 1 {
        let sum = values.iter().fold(F::zero(), |acc, &x| acc + x);
        for x in values.iter_mut() {
            *x = *x / sum;
        }
    }
    for x in values.iter_mut() {
        *x = nudge_below_one(*x);
    }
}
