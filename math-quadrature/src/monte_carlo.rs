//! Monte Carlo integration
//!
//! Mean-value estimator over uniform random draws, with an empirical
//! spread of the per-trial means as the uncertainty figure. The caller
//! supplies the random source, so seeded runs are reproducible.

use rand::Rng;

use crate::error::{QuadratureError, Result};

/// Monte Carlo sampling plan.
#[derive(Debug, Clone)]
pub struct MonteCarloConfig {
    /// Points drawn per trial (default: 200_000)
    pub samples_per_trial: usize,
    /// Number of independent trials (default: 5)
    pub trials: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            samples_per_trial: 200_000,
            trials: 5,
        }
    }
}

/// Monte Carlo estimate of an integral.
#[derive(Debug, Clone)]
pub struct MonteCarloEstimate {
    /// Estimated integral value
    pub integral: f64,
    /// Empirical standard deviation of the per-trial mean estimator
    pub uncertainty: f64,
}

/// Estimate the integral of `f` over `[a, b]` by uniform random sampling.
///
/// Runs `trials` independent trials of `samples_per_trial` draws each.
/// With `S` the grand mean of all function values and `S2` the mean of the
/// squared per-trial means, the estimate is `S * (b - a)` and the
/// uncertainty `sqrt(|S2 - S^2|)`; the absolute value guards against
/// negative rounding noise.
///
/// # Example
///
/// ```
/// use math_labs_quadrature::{MonteCarloConfig, monte_carlo};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let config = MonteCarloConfig {
///     samples_per_trial: 10_000,
///     trials: 4,
/// };
/// let estimate = monte_carlo(|x| x, 0.0, 1.0, &config, &mut rng).unwrap();
/// assert!((estimate.integral - 0.5).abs() < 0.01);
/// ```
pub fn monte_carlo<F, R>(
    f: F,
    a: f64,
    b: f64,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<MonteCarloEstimate>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    if a >= b {
        return Err(QuadratureError::InvalidInterval { a, b });
    }
    if config.samples_per_trial == 0 || config.trials == 0 {
        return Err(QuadratureError::InvalidSampling {
            samples: config.samples_per_trial,
            trials: config.trials,
        });
    }

    let n = config.samples_per_trial as f64;
    let mut grand_sum = 0.0;
    let mut squared_means = 0.0;

    for _ in 0..config.trials {
        let mut trial_sum = 0.0;
        for _ in 0..config.samples_per_trial {
            let x = a + (b - a) * rng.random::<f64>();
            trial_sum += f(x);
        }
        grand_sum += trial_sum;
        let trial_mean = trial_sum / n;
        squared_means += trial_mean * trial_mean;
    }

    let trials = config.trials as f64;
    let mean = grand_sum / (trials * n);
    let mean_sq = squared_means / trials;
    let uncertainty = (mean_sq - mean * mean).abs().sqrt();

    Ok(MonteCarloEstimate {
        integral: mean * (b - a),
        uncertainty,
    })
}
