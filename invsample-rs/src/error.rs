use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid bin count {0}, need at least one bin")]
    InvalidBinCount(usize),
    #[error("invalid group size {0}, need at least one draw per group")]
    InvalidGroupSize(usize),
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
    #[error("value {value} outside of [{lower}, {upper})")]
    OutOfDomain { value: f64, lower: f64, upper: f64 },
    #[error("histogram is empty")]
    EmptyHistogram,
    #[error("bin count mismatch: {0} != {1}")]
    BinCountMismatch(usize, usize),
}

impl Error {
    pub fn invalid_distribution<T>(msg: impl Into<String>) -> Result<T> {
        Err(Error::InvalidDistribution(msg.into()))
    }

    pub(crate) fn out_of_unit(value: f64) -> Self {
        Error::OutOfDomain {
            value,
            lower: 0.0,
            upper: 1.0,
        }
    }
}
