//! Standard normal density and distribution function.
//!
//! These are the only special functions the engine needs: the density
//! drives the comparison curve, the distribution function gives the
//! theoretical coverage of a ±kσ band.

/// 1/√(2π) ≈ 0.3989422804014327
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal PDF φ(z) = (1/√(2π)) exp(−z²/2).
///
/// # Examples
/// ```
/// use u_clt::special::standard_normal_pdf;
/// assert!((standard_normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF Φ(z) = P(Z ≤ z).
///
/// # Algorithm
/// Abramowitz & Stegun formula 26.2.17, evaluated for |z| and reflected
/// with Φ(−z) = 1 − Φ(z).
///
/// Reference: Abramowitz & Stegun (1964), *Handbook of Mathematical
/// Functions*, formula 26.2.17, p. 932.
///
/// # Accuracy
/// Maximum absolute error < 7.5 × 10⁻⁸.
pub fn standard_normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return if z > 0.0 { 1.0 } else { 0.0 };
    }

    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];

    let a = z.abs();
    let t = 1.0 / (1.0 + P * a);
    let poly = B.iter().rev().fold(0.0, |acc, &b| acc * t + b) * t;
    let upper_tail = standard_normal_pdf(a) * poly;

    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_symmetric() {
        for &z in &[0.1, 0.5, 1.0, 2.5, 4.0] {
            assert!((standard_normal_pdf(z) - standard_normal_pdf(-z)).abs() < 1e-16);
        }
    }

    #[test]
    fn test_pdf_nan() {
        assert!(standard_normal_pdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_known_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((standard_normal_cdf(1.0) - 0.8413).abs() < 1e-3);
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((standard_normal_cdf(-2.0) - 0.0228).abs() < 1e-3);
    }

    #[test]
    fn test_cdf_limits() {
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_reflection() {
        for &z in &[0.3, 1.0, 1.7, 3.2] {
            let sum = standard_normal_cdf(z) + standard_normal_cdf(-z);
            assert!((sum - 1.0).abs() < 1e-12, "Φ(z)+Φ(−z) = {sum}");
        }
    }
}
