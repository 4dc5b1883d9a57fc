pub mod bins;
pub mod boundary;
pub mod consts;
pub mod error;
pub mod float;
pub mod histogram;
pub mod interpolant;
pub mod sampler;

pub use error::{Error, Result};
pub use float::SampleFloat;
pub use histogram::Histogram;
pub use interpolant::{Interpolant, Resolution};
pub use sampler::{Sampler, SamplerConfig};
pub use unirand_rs::{Precision, RngSource, Seeding, UniformRng, UniformSource};
