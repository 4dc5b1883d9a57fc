//! Fixed-resolution histogram over [0, 1) ("binned PDF").

use std::marker::PhantomData;

use crate::{
    bins,
    error::{Error, Result},
    float::SampleFloat,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<F> {
    counts: Box<[u64]>,
    count: u64,
    _float: PhantomData<F>,
}

impl<F: SampleFloat> Histogram<F> {
    pub fn new(bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidBinCount(bins));
        }
        Ok(Self {
            counts: vec![0; bins].into_boxed_slice(),
            count: 0,
            _float: PhantomData,
        })
    }

    /// Record `x`, which must lie in [0, 1).
    #[inline]
    pub fn deposit(&mut self, x: F) {
        assert!(bins::in_unit_interval(x), "{} not in [0, 1)", x);
        self.deposit_unchecked(x);
    }

    pub fn try_deposit(&mut self, x: F) -> Result<()> {
        if !bins::in_unit_interval(x) {
            return Err(Error::out_of_unit(x.as_f64()));
        }
        self.deposit_unchecked(x);
        Ok(())
    }

    #[inline]
    fn deposit_unchecked(&mut self, x: F) {
        let index = bins::bin_index(x, self.bins());
        self.counts[index] += 1;
        self.count += 1;

        #[cfg(feature = "debug")]
        assert_eq!(
            self.count,
            self.counts.iter().sum::<u64>(),
            "count out of sync with bins"
        );
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
        self.count = 0;
    }

    /// Total deposits since the last clear
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn get_bin(&self, index: usize) -> u64 {
        assert!(index < self.bins(), "bin {} >= {}", index, self.bins());
        self.counts[index]
    }

    pub fn try_get_bin(&self, index: usize) -> Result<u64> {
        self.counts.get(index).copied().ok_or(Error::OutOfDomain {
            value: index as f64,
            lower: 0.0,
            upper: self.bins() as f64,
        })
    }

    pub fn get_all_bins(&self) -> &[u64] {
        &self.counts
    }

    /// Each bin's share of the total count.
    pub fn get_pdf(&self) -> Result<Vec<F>> {
        if self.count == 0 {
            return Err(Error::EmptyHistogram);
        }
        let denom = F::one() / Self::to_float(self.count);
        Ok(self
            .counts
            .iter()
            .map(|&c| Self::to_float(c) * denom)
            .collect())
    }

    /// [`Self::get_pdf`] scaled by the bin count, so a uniform result
    /// reads 1 in every bin and the values integrate to 1 over [0, 1).
    pub fn density(&self) -> Result<Vec<F>> {
        let scale = F::from_usize(self.bins());
        Ok(self.get_pdf()?.into_iter().map(|p| p * scale).collect())
    }

    /// Add another histogram's counters into this one.
    pub fn merge(&mut self, other: &Histogram<F>) -> Result<()> {
        if self.bins() != other.bins() {
            return Err(Error::BinCountMismatch(self.bins(), other.bins()));
        }
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
        self.count += other.count;
        Ok(())
    }

    pub fn get_bin_edges(&self) -> Vec<F> {
        bins::bin_edges(self.bins())
    }

    pub fn get_bin_centers(&self) -> Vec<F> {
        bins::bin_centers(self.bins())
    }

    #[inline]
    fn to_float(n: u64) -> F {
        F::from_usize(n as usize)
    }
}
