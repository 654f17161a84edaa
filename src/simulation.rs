//! Repeated sampling: `num_simulations` sample means, their summary
//! statistics, and the fitted comparison curve.
//!
//! The spread of the means shrinks like `1/sqrt(12·sample_size)` while
//! their histogram approaches the fitted normal density.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::curve::{ComparisonCurve, CURVE_POINTS};
use crate::distributions::{Normal, Uniform};
use crate::error::SimulationError;
use crate::histogram::Histogram;
use crate::random::{self, SimRng};
use crate::sampler;
use crate::stats::{self, WelfordAccumulator};

/// Outcome of one [`run`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    num_simulations: usize,
    sample_size: usize,
    means: Vec<f64>,
    empirical_mean: f64,
    empirical_std: f64,
    skewness: Option<f64>,
    excess_kurtosis: Option<f64>,
    comparison_curve: ComparisonCurve,
}

impl SimulationResult {
    fn from_means(sample_size: usize, means: Vec<f64>) -> Self {
        // Mean and spread come from one pass, so the std is centred on the
        // reported mean.
        let moments = WelfordAccumulator::from_slice(&means);
        let empirical_mean = moments.mean().unwrap_or_default();
        let empirical_std = moments.population_std_dev().unwrap_or_default();

        let fitted = ComparisonCurve::fit(empirical_mean, empirical_std, CURVE_POINTS);
        let comparison_curve = match fitted {
            Ok(curve) => curve,
            Err(err) => {
                warn!(
                    num_simulations = means.len(),
                    sample_size,
                    empirical_std,
                    error = %err,
                    "sample means have no spread, comparison curve left empty"
                );
                ComparisonCurve::empty()
            }
        };

        Self {
            num_simulations: means.len(),
            sample_size,
            skewness: moments.skewness(),
            excess_kurtosis: moments.excess_kurtosis(),
            means,
            empirical_mean,
            empirical_std,
            comparison_curve,
        }
    }

    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Per-simulation sample means, in call order.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn empirical_mean(&self) -> f64 {
        self.empirical_mean
    }

    /// Population standard deviation of the means (denominator `n`).
    pub fn empirical_std(&self) -> f64 {
        self.empirical_std
    }

    pub fn comparison_curve(&self) -> &ComparisonCurve {
        &self.comparison_curve
    }

    /// Expected value of a sample mean: 0.5.
    pub fn theoretical_mean(&self) -> f64 {
        Uniform::standard().mean()
    }

    /// Expected spread of a sample mean: `sqrt(1/(12·sample_size))`.
    pub fn theoretical_std(&self) -> f64 {
        Uniform::standard()
            .sample_mean_std_dev(self.sample_size)
            .unwrap_or_default()
    }

    /// Bias-corrected skewness of the means; tends to 0.
    pub fn skewness(&self) -> Option<f64> {
        self.skewness
    }

    /// Bias-corrected excess kurtosis of the means; tends to 0
    /// (the true value is `−1.2 / sample_size`).
    pub fn excess_kurtosis(&self) -> Option<f64> {
        self.excess_kurtosis
    }

    /// True when every mean is identical, e.g. with a single simulation.
    pub fn is_degenerate(&self) -> bool {
        self.empirical_std == 0.0
    }

    /// Share of means within `empirical_mean ± k·empirical_std`, paired
    /// with the share a normal distribution predicts.
    ///
    /// `None` for a degenerate result.
    pub fn coverage(&self, k: f64) -> Option<(f64, f64)> {
        let normal = Normal::new(self.empirical_mean, self.empirical_std).ok()?;
        let empirical =
            stats::fraction_within(&self.means, self.empirical_mean, k * self.empirical_std)?;
        Some((empirical, normal.within_sigmas(k)))
    }

    pub fn histogram(&self, bins: usize) -> Result<Histogram, SimulationError> {
        Histogram::from_values(&self.means, bins)
    }
}

/// Draws `num_simulations` independent sample means of `sample_size`
/// values each and summarises them.
///
/// # Errors
/// [`SimulationError::InvalidArgument`] if either count is zero
/// (`num_simulations` is checked first). No entropy is consumed then.
///
/// # Examples
/// ```
/// use u_clt::random::create_rng;
/// use u_clt::simulation::run;
///
/// let mut rng = create_rng(42);
/// let result = run(1000, 5, &mut rng).unwrap();
/// assert_eq!(result.means().len(), 1000);
/// assert!((result.empirical_mean() - 0.5).abs() < 0.02);
/// assert_eq!(result.comparison_curve().len(), 1000);
/// ```
pub fn run<R: Rng + ?Sized>(
    num_simulations: usize,
    sample_size: usize,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    let num_simulations = SimulationError::require_positive("num_simulations", num_simulations)?;
    let sample_size = SimulationError::require_positive("sample_size", sample_size)?;

    let means = (0..num_simulations)
        .map(|_| sampler::draw_sample_mean(sample_size, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    let result = SimulationResult::from_means(sample_size, means);
    debug!(
        num_simulations,
        sample_size,
        empirical_mean = result.empirical_mean,
        empirical_std = result.empirical_std,
        theoretical_std = result.theoretical_std(),
        "simulation complete"
    );
    Ok(result)
}

/// Owns a thread-confined random source and runs simulations from it.
///
/// Two runners built with the same seed return identical results for the
/// same sequence of calls.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    rng: SimRng,
    seed: Option<u64>,
}

impl SimulationRunner {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: random::create_rng(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: random::create_entropy_rng(),
            seed: None,
        }
    }

    /// Seeded when the config carries a seed, entropy-seeded otherwise.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            rng: random::rng_for(config.seed),
            seed: config.seed,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn run(
        &mut self,
        num_simulations: usize,
        sample_size: usize,
    ) -> Result<SimulationResult, SimulationError> {
        run(num_simulations, sample_size, &mut self.rng)
    }

    /// Runs with the counts held in `config`.
    pub fn run_config(
        &mut self,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, SimulationError> {
        self.run(config.num_simulations, config.sample_size)
    }
}
