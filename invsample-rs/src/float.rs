//! Working precision for interpolation and sampling.

use std::fmt::{Debug, Display};

use num_traits::Float;
use unirand_rs::Precision;

/// Floating-point type a sampler can run in (`f32` or `f64`).
pub trait SampleFloat: Float + Debug + Display + Send + Sync + 'static {
    const PRECISION: Precision;

    fn from_usize(n: usize) -> Self;

    /// Truncating conversion of a non-negative value to an index
    fn floor_index(self) -> usize;

    fn as_f64(self) -> f64;

    /// The adjacent representable value in the direction of `target`
    /// (`nextafter`). Returns `target` when the two are equal.
    fn step_toward(self, target: Self) -> Self;
}

macro_rules! impl_sample_float {
    ($t:ty, $precision:expr) => {
        impl SampleFloat for $t {
            const PRECISION: Precision = $precision;

            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $t
            }

            #[inline]
            fn floor_index(self) -> usize {
                self as usize
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn step_toward(self, target: Self) -> Self {
                if self.is_nan() || target.is_nan() {
                    <$t>::NAN
                } else if self == target {
                    target
                } else if target > self {
                    self.next_up()
                } else {
                    self.next_down()
                }
            }
        }
    };
}

impl_sample_float!(f32, Precision::Single);
impl_sample_float!(f64, Precision::Double);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_toward_one_and_zero() {
        assert_eq!(1.0f64.step_toward(0.0), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(1.0f64.step_toward(1.0), 1.0);
        assert_eq!(0.0f64.step_toward(1.0), f64::from_bits(1));
        assert_eq!(f64::from_bits(1).step_toward(0.0), 0.0);
        assert_eq!(1.0f32.step_toward(0.0), 1.0 - f32::EPSILON / 2.0);
        assert!(f64::NAN.step_toward(0.0).is_nan());
    }

    #[test]
    fn step_toward_from_above() {
        let above = 1.0f64 + f64::EPSILON;
        assert_eq!(above.step_toward(1.0), 1.0);
    }

    #[test]
    fn precision_tags() {
        assert_eq!(<f32 as SampleFloat>::PRECISION, Precision::Single);
        assert_eq!(<f64 as SampleFloat>::PRECISION, Precision::Double);
    }
}
