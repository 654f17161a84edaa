//! Normal density curve overlaid on the histogram of sample means.

use serde::Serialize;

use crate::distributions::{DistributionError, Normal};
use crate::stats;

/// Number of points in the comparison curve produced by a simulation run.
pub const CURVE_POINTS: usize = 1000;

/// The curve spans `mean ± CURVE_HALF_WIDTH_SIGMAS · std`.
pub const CURVE_HALF_WIDTH_SIGMAS: f64 = 3.0;

/// One `(x, density)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub density: f64,
}

/// Normal PDF sampled on an evenly spaced grid, ordered by strictly
/// increasing `x`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComparisonCurve {
    points: Vec<CurvePoint>,
}

impl ComparisonCurve {
    /// Curve with no points, used when the means have zero spread.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Evaluates N(`mean`, `std`) at `n_points` evenly spaced x values over
    /// `[mean − 3·std, mean + 3·std]`, endpoints included.
    ///
    /// # Errors
    /// Returns `Err` if `std` is not finite and positive or `mean` is not
    /// finite.
    ///
    /// # Examples
    /// ```
    /// use u_clt::curve::ComparisonCurve;
    /// let curve = ComparisonCurve::fit(0.5, 0.1, 1000).unwrap();
    /// assert_eq!(curve.len(), 1000);
    /// assert!((curve.points()[0].x - 0.2).abs() < 1e-12);
    /// assert!(ComparisonCurve::fit(0.5, 0.0, 1000).is_err());
    /// ```
    pub fn fit(mean: f64, std: f64, n_points: usize) -> Result<Self, DistributionError> {
        let normal = Normal::new(mean, std)?;
        let half_width = CURVE_HALF_WIDTH_SIGMAS * std;
        let points = stats::linspace(mean - half_width, mean + half_width, n_points)
            .into_iter()
            .map(|x| CurvePoint {
                x,
                density: normal.pdf(x),
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(first x, last x)`, or `None` for an empty curve.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// The point with the largest density.
    pub fn peak(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.density.total_cmp(&b.density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::FRAC_1_SQRT_2PI;

    #[test]
    fn test_fit_domain() {
        let curve = ComparisonCurve::fit(0.5, 0.129, CURVE_POINTS).unwrap();
        let (lo, hi) = curve.domain().unwrap();
        assert!((lo - (0.5 - 3.0 * 0.129)).abs() < 1e-15);
        assert!((hi - (0.5 + 3.0 * 0.129)).abs() < 1e-15);
    }

    #[test]
    fn test_fit_strictly_increasing() {
        let curve = ComparisonCurve::fit(0.5, 0.0289, CURVE_POINTS).unwrap();
        assert!(curve.points().windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_fit_symmetric_densities() {
        let curve = ComparisonCurve::fit(0.5, 0.1, CURVE_POINTS).unwrap();
        let p = curve.points();
        let first = p[0].density;
        let last = p[p.len() - 1].density;
        assert!((first - last).abs() < 1e-9);
        // φ(3)/σ at both ends
        let tail = FRAC_1_SQRT_2PI * (-4.5_f64).exp() / 0.1;
        assert!((first - tail).abs() < 1e-9);
    }

    #[test]
    fn test_peak_near_mean() {
        let curve = ComparisonCurve::fit(0.5, 0.1, CURVE_POINTS).unwrap();
        let peak = curve.peak().unwrap();
        // Even point count: the grid straddles the mean.
        let step = 0.6 / (CURVE_POINTS - 1) as f64;
        assert!((peak.x - 0.5).abs() <= step);
        assert!((peak.density - FRAC_1_SQRT_2PI / 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_fit_rejects_degenerate_spread() {
        assert!(ComparisonCurve::fit(0.5, 0.0, CURVE_POINTS).is_err());
        assert!(ComparisonCurve::fit(0.5, -0.1, CURVE_POINTS).is_err());
        assert!(ComparisonCurve::fit(f64::NAN, 0.1, CURVE_POINTS).is_err());
    }

    #[test]
    fn test_empty_curve() {
        let curve = ComparisonCurve::empty();
        assert!(curve.is_empty());
        assert_eq!(curve.domain(), None);
        assert_eq!(curve.peak(), None);
    }
}
