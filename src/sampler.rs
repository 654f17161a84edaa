//! One simulation trial: draw a sample from uniform(0, 1) and reduce it to
//! its arithmetic mean.
//!
//! A sample drawn from uniform(0, 1) with `n` values has a mean whose
//! expectation is 0.5 and whose variance is `1/(12n)`.

use rand::Rng;

use crate::distributions::Uniform;
use crate::error::SimulationError;
use crate::stats;

/// Draws `sample_size` independent values from uniform `[0, 1)`.
///
/// # Errors
/// [`SimulationError::InvalidArgument`] if `sample_size == 0`. No entropy
/// is consumed in that case.
pub fn draw_sample<R: Rng + ?Sized>(
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    let n = SimulationError::require_positive("sample_size", sample_size)?;
    let source = Uniform::standard();
    Ok((0..n).map(|_| source.sample(&mut *rng)).collect())
}

/// Draws one sample of `sample_size` values and returns its mean.
///
/// The result lies in `[0, 1)`.
///
/// # Examples
/// ```
/// use u_clt::random::create_rng;
/// use u_clt::sampler::draw_sample_mean;
///
/// let mut rng = create_rng(42);
/// let m = draw_sample_mean(10, &mut rng).unwrap();
/// assert!((0.0..1.0).contains(&m));
/// assert!(draw_sample_mean(0, &mut rng).is_err());
/// ```
pub fn draw_sample_mean<R: Rng + ?Sized>(
    sample_size: usize,
    rng: &mut R,
) -> Result<f64, SimulationError> {
    let sample = draw_sample(sample_size, rng)?;
    // Non-empty and every draw is finite, so the mean always exists.
    Ok(stats::mean(&sample).unwrap_or_default())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sample_mean_in_unit_interval(seed in 0_u64..10_000, sample_size in 1_usize..500) {
            let mut rng = create_rng(seed);
            let m = draw_sample_mean(sample_size, &mut rng).unwrap();
            prop_assert!(m.is_finite());
            prop_assert!((0.0..1.0).contains(&m), "mean {} outside [0, 1)", m);
        }

        #[test]
        fn sample_values_in_unit_interval(seed in 0_u64..10_000, sample_size in 1_usize..200) {
            let mut rng = create_rng(seed);
            let sample = draw_sample(sample_size, &mut rng).unwrap();
            prop_assert_eq!(sample.len(), sample_size);
            prop_assert!(sample.iter().all(|x| (0.0..1.0).contains(x)));
        }
    }
}
