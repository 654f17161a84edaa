//! Equal-width histogram of the sample means.
//!
//! Bins follow the usual convention: every bin is half-open `[lo, hi)`
//! except the last, which is closed so the maximum value is counted.

use serde::Serialize;

use crate::error::SimulationError;
use crate::stats;

/// Bin count used by the playground view.
pub const DEFAULT_BINS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// When every value is identical the range is widened to
    /// `[v − 0.5, v + 0.5]`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidArgument`] if `bins == 0` or `values` is
    /// empty (or holds NaN).
    ///
    /// # Examples
    /// ```
    /// use u_clt::histogram::Histogram;
    /// let h = Histogram::from_values(&[0.0, 0.1, 0.6, 1.0], 2).unwrap();
    /// assert_eq!(h.counts(), &[2, 2]);
    /// assert_eq!(h.edges(), &[0.0, 0.5, 1.0]);
    /// ```
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self, SimulationError> {
        let bins = SimulationError::require_positive("bins", bins)?;
        let (lo, hi) = match (stats::min(values), stats::max(values)) {
            (Some(lo), Some(hi)) if lo < hi => (lo, hi),
            (Some(v), Some(_)) => (v - 0.5, v + 0.5),
            _ => {
                return Err(SimulationError::InvalidArgument {
                    name: "values",
                    value: 0,
                })
            }
        };

        let edges = stats::linspace(lo, hi, bins + 1);
        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0_u64; bins];
        for &v in values {
            let mut idx = (((v - lo) / width) as usize).min(bins - 1);
            // Float division can land one bin off near an edge.
            if v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// `bins + 1` bin edges, strictly increasing.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Midpoint of each bin.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Counts scaled so the histogram integrates to 1, directly comparable
    /// to the comparison curve's densities.
    pub fn densities(&self) -> Vec<f64> {
        let scale = self.total() as f64 * self.bin_width();
        self.counts.iter().map(|&c| c as f64 / scale).collect()
    }

    /// Largest single bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
