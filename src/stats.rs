//! Descriptive statistics for sequences of sample means.
//!
//! All functions handle edge cases explicitly (empty input, NaN/Inf) by
//! returning `None` instead of panicking.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier-compensated (Kahan) summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm, **population** form
//!   (denominator `n`), which is what the comparison curve is fitted with.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Skewness/Kurtosis**: extended Welford update of M₃, M₄.
//!   Reference: Pébay (2008), Sandia Report SAND2008-6212.

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_clt::stats::mean;
/// assert!((mean(&[0.25, 0.5, 0.75]).unwrap() - 0.5).abs() < 1e-15);
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Returns the minimum value, or `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value, or `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Fraction of `data` lying in the closed band `[center − half_width, center + half_width]`.
///
/// Returns `None` for empty input.
pub fn fraction_within(data: &[f64], center: f64, half_width: f64) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let (lo, hi) = (center - half_width, center + half_width);
    let inside = data.iter().filter(|&&x| x >= lo && x <= hi).count();
    Some(inside as f64 / data.len() as f64)
}

/// `n` evenly spaced values over the closed interval `[start, stop]`.
///
/// The first value is exactly `start` and the last exactly `stop`;
/// interior values are `start + i·step`. `n == 1` yields `[start]`.
///
/// # Examples
/// ```
/// use u_clt::stats::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            xs[n - 1] = stop;
            xs
        }
    }
}

/// Neumaier compensated summation.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Single-pass accumulator for mean, variance, skewness, and kurtosis.
///
/// M₄ is updated before M₃ before M₂ since each update reads the
/// previous values of the lower-order moments.
///
/// # Examples
/// ```
/// use u_clt::stats::WelfordAccumulator;
/// let acc = WelfordAccumulator::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.population_std_dev().unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl WelfordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator fed with every value of `data`, in order.
    pub fn from_slice(data: &[f64]) -> Self {
        let mut acc = Self::new();
        for &x in data {
            acc.update(x);
        }
        acc
    }

    /// Feeds one value.
    pub fn update(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;

        if n1 == 0 {
            self.mean_acc = value;
            return;
        }

        let n = self.count as f64;
        let delta = value - self.mean_acc;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1 as f64;

        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
        self.mean_acc += delta_n;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_acc)
    }

    /// Population variance (denominator `n`), `None` when empty.
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }

    pub fn population_std_dev(&self) -> Option<f64> {
        self.population_variance().map(f64::sqrt)
    }

    /// Bias-corrected sample skewness G₁ (Excel `SKEW()`).
    ///
    /// `None` with fewer than 3 values or zero spread.
    pub fn skewness(&self) -> Option<f64> {
        if self.count < 3 || self.m2 == 0.0 {
            return None;
        }
        let n = self.count as f64;
        let g1 = n.sqrt() * self.m3 / self.m2.powf(1.5);
        let correction = (n * (n - 1.0)).sqrt() / (n - 2.0);
        Some(correction * g1)
    }

    /// Bias-corrected excess kurtosis G₂ (Excel `KURT()`); 0 for a normal.
    ///
    /// `None` with fewer than 4 values or zero spread.
    pub fn excess_kurtosis(&self) -> Option<f64> {
        if self.count < 4 || self.m2 == 0.0 {
            return None;
        }
        let n = self.count as f64;
        let g2 = n * self.m4 / (self.m2 * self.m2) - 3.0;
        let correction = (n - 1.0) / ((n - 2.0) * (n - 3.0));
        Some(correction * ((n + 1.0) * g2 + 6.0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn unit_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(0.0_f64..1.0, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn mean_lies_between_min_and_max(data in unit_vec(1, 200)) {
            let m = mean(&data).unwrap();
            prop_assert!(m >= min(&data).unwrap() - 1e-15);
            prop_assert!(m <= max(&data).unwrap() + 1e-15);
        }

        #[test]
        fn welford_matches_two_pass(data in unit_vec(1, 200)) {
            let m = kahan_sum(&data) / data.len() as f64;
            let two_pass = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64;
            let welford = WelfordAccumulator::from_slice(&data).population_variance().unwrap();
            prop_assert!((two_pass - welford).abs() < 1e-12, "two_pass={}, welford={}", two_pass, welford);
        }

        #[test]
        fn population_variance_non_negative(data in unit_vec(1, 200)) {
            let acc = WelfordAccumulator::from_slice(&data);
            prop_assert!(acc.population_variance().unwrap() >= 0.0);
        }

        #[test]
        fn welford_mean_matches_compensated_mean(data in unit_vec(1, 200)) {
            let acc = WelfordAccumulator::from_slice(&data);
            let welford = acc.mean().unwrap();
            let kahan = mean(&data).unwrap();
            prop_assert!((welford - kahan).abs() < 1e-12, "welford={}, kahan={}", welford, kahan);
        }

        #[test]
        fn linspace_strictly_increasing(
            start in -10.0_f64..10.0,
            width in 0.01_f64..10.0,
            n in 2_usize..2000,
        ) {
            let xs = linspace(start, start + width, n);
            prop_assert_eq!(xs.len(), n);
            prop_assert_eq!(xs[0], start);
            prop_assert_eq!(xs[n - 1], start + width);
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
