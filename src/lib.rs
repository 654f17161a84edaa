//! # u-clt
//!
//! Sampling engine for an interactive Central Limit Theorem demo.
//!
//! Draw a sample of `n` values from uniform(0, 1), average it, repeat the
//! trial many times, and compare the distribution of the averages with a
//! normal density fitted to them. As `n` grows the spread of the averages
//! shrinks like `1/sqrt(12n)` and the histogram approaches the bell curve.
//!
//! ## Modules
//!
//! - [`sampler`]: a single trial, a uniform sample and its mean
//! - [`simulation`]: repeated trials, summary statistics, [`SimulationRunner`]
//! - [`curve`]: the fitted normal comparison curve
//! - [`histogram`]: equal-width binning of the means
//! - [`stats`], [`distributions`], [`special`]: numeric building blocks
//! - [`random`]: seeded and entropy-seeded generators
//! - [`cache`]: memoized seeded runs
//! - [`config`]: simulation parameters and playground control ranges
//! - [`views`]: text renderings of the playground pages
//! - [`telemetry`]: tracing subscriber setup for binaries
//!
//! ## Design Philosophy
//!
//! - **Explicit randomness**: no global generator; every entry point takes
//!   the random source it draws from
//! - **Population statistics**: the fitted curve uses the `n`-denominator
//!   standard deviation of the means
//! - **Property-based testing**: invariants verified via proptest
//!
//! ```
//! use u_clt::SimulationRunner;
//!
//! let mut runner = SimulationRunner::seeded(7);
//! let result = runner.run(5000, 30).unwrap();
//! let expected = (1.0_f64 / 360.0).sqrt();
//! assert!((result.empirical_std() - expected).abs() < 0.1 * expected);
//! ```

pub mod cache;
pub mod config;
pub mod curve;
pub mod distributions;
pub mod error;
pub mod histogram;
pub mod random;
pub mod sampler;
pub mod simulation;
pub mod special;
pub mod stats;
pub mod telemetry;
pub mod views;

pub use config::SimulationConfig;
pub use curve::{ComparisonCurve, CurvePoint};
pub use error::{ConfigError, SimulationError};
pub use sampler::draw_sample_mean;
pub use simulation::{run, SimulationResult, SimulationRunner};
