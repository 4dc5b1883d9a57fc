//! Piecewise-linear inverse CDF on `bins` equal-width bins of [0, 1).
//!
//! The caller supplies interior control values only; the endpoints (0, 0)
//! and (1, 1) are implied. How the values are spread over the bin edges
//! depends on how many there are, see [`Resolution`].

use tracing::debug;

use crate::{
    bins,
    error::{Error, Result},
    float::SampleFloat,
};

const SLOPE: usize = 0;
const INTERCEPT: usize = 1;

type CoefficientPair<F> = [F; 2];

/// How `points` interior values map onto the edges of `bins` bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// One value per interior edge (`points + 1 == bins`)
    Exact,
    /// One value per other interior edge (`2 * (points + 1) == bins`);
    /// the edges in between are midpoints of their neighbours
    Half,
    /// Anything else: the values are read as an exact set on `points + 1`
    /// bins, and that coarser function is sampled at the real edges
    Other,
}

impl Resolution {
    pub fn classify(points: usize, bins: usize) -> Self {
        if points + 1 == bins {
            Resolution::Exact
        } else if 2 * (points + 1) == bins {
            Resolution::Half
        } else {
            Resolution::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpolant<F> {
    coefficients: Box<[CoefficientPair<F>]>,
}

impl<F: SampleFloat> Interpolant<F> {
    /// Build from interior control values, resolving them onto `bins` bins.
    pub fn new(bins: usize, points: &[F]) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidBinCount(bins));
        }
        let resolution = Resolution::classify(points.len(), bins);
        debug!(bins, points = points.len(), ?resolution, "building interpolant");
        let all_points = match resolution {
            Resolution::Exact => Self::exact_points(points),
            Resolution::Half => Self::half_points(bins, points),
            Resolution::Other => Self::resampled_points(bins, points)?,
        };
        Self::from_control_points(&all_points)
    }

    /// Evaluate `f` at the `bins - 1` interior edges and build the exact
    /// interpolant through those values.
    pub fn from_fn(bins: usize, f: impl Fn(F) -> F) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidBinCount(bins));
        }
        let points: Vec<F> = bins::interior_edges(bins).into_iter().map(f).collect();
        Self::new(bins, &points)
    }

    /// Build from all `bins + 1` control values, endpoints included.
    pub fn from_control_points(points: &[F]) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InvalidBinCount(points.len().saturating_sub(1)));
        }
        Self::validate(points)?;

        let bins = points.len() - 1;
        let coefficients = points
            .windows(2)
            .enumerate()
            .map(|(n, pair)| {
                let x0 = bins::bin_edge::<F>(n, bins);
                let x1 = bins::bin_edge::<F>(n + 1, bins);
                let (y0, y1) = (pair[0], pair[1]);
                let m = (y1 - y0) / (x1 - x0);
                // Anchored on the left edge so f(0) is exactly 0.
                let b = y0 - m * x0;
                [m, b]
            })
            .collect();
        Ok(Self { coefficients })
    }

    fn validate(points: &[F]) -> Result<()> {
        if let Some(n) = points.iter().position(|y| !y.is_finite()) {
            return Error::invalid_distribution(format!("point {} is not finite", n));
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if first != F::zero() {
            return Error::invalid_distribution(format!("starts at {} instead of 0", first));
        }
        if last != F::one() {
            return Error::invalid_distribution(format!("ends at {} instead of 1", last));
        }
        if let Some(n) = points.windows(2).position(|w| w[0] > w[1]) {
            return Error::invalid_distribution(format!(
                "decreases between points {} and {} ({} > {})",
                n,
                n + 1,
                points[n],
                points[n + 1]
            ));
        }
        Ok(())
    }

    fn exact_points(points: &[F]) -> Vec<F> {
        let mut all_points = Vec::with_capacity(points.len() + 2);
        all_points.push(F::zero());
        all_points.extend_from_slice(points);
        all_points.push(F::one());
        all_points
    }

    fn half_points(bins: usize, points: &[F]) -> Vec<F> {
        let two = F::one() + F::one();
        let mut all_points = vec![F::zero(); bins + 1];
        for (n, &y2) in points.iter().enumerate() {
            let y0 = all_points[2 * n];
            all_points[2 * n + 1] = (y0 + y2) / two;
            all_points[2 * n + 2] = y2;
        }
        all_points[bins - 1] = (all_points[bins - 2] + F::one()) / two;
        all_points[bins] = F::one();
        all_points
    }

    fn resampled_points(bins: usize, points: &[F]) -> Result<Vec<F>> {
        // The coarse function is always an exact fit, so this recurses once.
        let coarse_bins = points.len() + 1;
        debug_assert_eq!(
            Resolution::classify(points.len(), coarse_bins),
            Resolution::Exact
        );
        let coarse = Self::new(coarse_bins, points)?;

        // Rounding in `m * x + b` can dip an ULP below the previous edge
        // after a flat segment; the running max keeps the samples monotone.
        let mut floor = F::zero();
        let mut all_points = Vec::with_capacity(bins + 1);
        all_points.push(floor);
        all_points.extend(bins::interior_edges::<F>(bins).into_iter().map(|x| {
            floor = coarse.evaluate(x).max(floor).min(F::one());
            floor
        }));
        all_points.push(F::one());
        Ok(all_points)
    }

    #[inline]
    pub fn bins(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate at `x`, which must lie in [0, 1).
    #[inline]
    pub fn evaluate(&self, x: F) -> F {
        assert!(bins::in_unit_interval(x), "{} not in [0, 1)", x);
        self.evaluate_unchecked(x)
    }

    pub fn try_evaluate(&self, x: F) -> Result<F> {
        if !bins::in_unit_interval(x) {
            return Err(Error::out_of_unit(x.as_f64()));
        }
        Ok(self.evaluate_unchecked(x))
    }

    #[inline]
    fn evaluate_unchecked(&self, x: F) -> F {
        let coefs = &self.coefficients[bins::bin_index(x, self.bins())];
        coefs[SLOPE] * x + coefs[INTERCEPT]
    }

    /// `(slope, intercept)` of bin `n`
    pub fn coefficients(&self, n: usize) -> (F, F) {
        let coefs = &self.coefficients[n];
        (coefs[SLOPE], coefs[INTERCEPT])
    }

    pub fn bin_edges(&self) -> Vec<F> {
        bins::bin_edges(self.bins())
    }

    /// Edges a caller should supply values at for an exact-resolution build
    pub fn interior_edges(&self) -> Vec<F> {
        bins::interior_edges(self.bins())
    }

    pub fn bin_centers(&self) -> Vec<F> {
        bins::bin_centers(self.bins())
    }
}
