use clap::ValueEnum;
use invsample_rs::SampleFloat;

/// Target inverse CDFs the driver knows how to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// 0.5 + sgn(0.5 - x) * (2x(1 - x) - 0.5)
    Symmetric,
    /// x(2 - x)
    Quadratic,
    /// x(1 - k(x - 1)(x - 1/2)), k = -1
    ///
    /// The 1/2 is one half; read as integer division it would be 0.
    Cubic,
    /// x
    Identity,
}

impl Shape {
    pub fn eval<F: SampleFloat>(self, x: F) -> F {
        let one = F::one();
        let two = one + one;
        let half = one / two;
        match self {
            Shape::Symmetric => {
                let sign = if x < half { one } else { -one };
                half + sign * (two * x * (one - x) - half)
            }
            Shape::Quadratic => x * (two - x),
            Shape::Cubic => {
                let k = -one;
                x * (one - k * (x - one) * (x - half))
            }
            Shape::Identity => x,
        }
    }
}
