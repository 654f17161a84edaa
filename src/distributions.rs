//! Probability distributions used by the engine.
//!
//! | Distribution | Role | Mean | Variance |
//! |---|---|---|---|
//! | [`Uniform`] | source of every sample draw | (a+b)/2 | (b−a)²/12 |
//! | [`Normal`] | comparison density fitted to the means | μ | σ² |
//!
//! The sample source is fixed to the unit interval: [`Uniform::standard`]
//! is the only constructor.

use rand::Rng;

use crate::special;

/// Error type for invalid [`Normal`] parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

// ============================================================================
// Uniform Distribution
// ============================================================================

/// Continuous uniform distribution on `[0, 1)`.
///
/// # Mathematical Definition
/// - Mean: (min+max)/2
/// - Variance: (max−min)²/12
///
/// The mean of `n` independent draws has variance `(max−min)²/(12n)`,
/// which is the quantity the Central Limit Theorem demo converges to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    /// The unit interval `[0, 1)`.
    pub const fn standard() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn variance(&self) -> f64 {
        let range = self.max - self.min;
        range * range / 12.0
    }

    /// Standard deviation of the mean of `sample_size` independent draws,
    /// `sqrt(variance / n)`. Returns `None` for `sample_size == 0`.
    ///
    /// # Examples
    /// ```
    /// use u_clt::distributions::Uniform;
    /// let sd = Uniform::standard().sample_mean_std_dev(5).unwrap();
    /// assert!((sd - (1.0_f64 / 60.0).sqrt()).abs() < 1e-15);
    /// ```
    pub fn sample_mean_std_dev(&self, sample_size: usize) -> Option<f64> {
        if sample_size == 0 {
            return None;
        }
        Some((self.variance() / sample_size as f64).sqrt())
    }

    /// Draws one value. For [`Uniform::standard`] this is exactly
    /// `rng.random::<f64>()`, which lies in `[0, 1)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        self.min + u * (self.max - self.min)
    }
}

// ============================================================================
// Normal Distribution
// ============================================================================

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: Φ((x−μ)/σ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `Err` if `sigma ≤ 0` or parameters are not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// PDF with `loc = μ`, `scale = σ`.
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        special::standard_normal_pdf(z) / self.sigma
    }

    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        special::standard_normal_cdf(z)
    }

    /// P(μ − kσ ≤ X ≤ μ + kσ); about 0.6827 for `k = 1`.
    pub fn within_sigmas(&self, k: f64) -> f64 {
        self.cdf(self.mu + k * self.sigma) - self.cdf(self.mu - k * self.sigma)
    }
}

// ============================================================================
// Tests
// ============================================================================
