//! Adaptive Simpson quadrature
//!
//! Compares the 2- and 4-subinterval Simpson estimates on each interval and
//! splits at the midpoint until the Richardson error estimate drops under
//! the tolerance, halving the tolerance on each side.

use crate::composite::simpson;
use crate::error::{QuadratureError, Result};

/// Adaptive Simpson configuration.
#[derive(Debug, Clone)]
pub struct SimpsonConfig {
    /// Absolute error tolerance for the whole interval (default: 1e-6)
    pub eps: f64,
    /// Maximum recursion depth before an interval is accepted as-is
    /// (default: 40)
    pub max_depth: usize,
}

impl Default for SimpsonConfig {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_depth: 40,
        }
    }
}

/// Result of adaptive Simpson integration.
#[derive(Debug, Clone)]
pub struct SimpsonResult {
    /// Computed integral value
    pub integral: f64,
    /// Recursion depth summed over all accepted subintervals
    pub subdivisions: usize,
    /// False when some subinterval hit the depth ceiling and was accepted
    /// without meeting its tolerance share
    pub converged: bool,
}

/// Integrate `f` over `[a, b]` to an absolute tolerance.
///
/// Each interval is estimated with Simpson's rule at 2 and at 4
/// subintervals; `|I2 - I1| / 15` serves as the truncation-error estimate
/// (Richardson extrapolation for Simpson's rule). An interval whose
/// estimate is below its tolerance share contributes the 4-subinterval
/// value, otherwise it is split at the midpoint and each half gets half
/// the tolerance.
///
/// # Example
///
/// ```
/// use math_labs_quadrature::{SimpsonConfig, adaptive_simpson};
///
/// let result = adaptive_simpson(f64::sin, 0.0, std::f64::consts::PI, &SimpsonConfig::default())
///     .unwrap();
/// assert!((result.integral - 2.0).abs() < 1e-6);
/// assert!(result.converged);
/// ```
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, config: &SimpsonConfig) -> Result<SimpsonResult>
where
    F: Fn(f64) -> f64,
{
    if !(config.eps > 0.0) {
        return Err(QuadratureError::InvalidTolerance { eps: config.eps });
    }
    if a >= b {
        return Err(QuadratureError::InvalidInterval { a, b });
    }

    let mut converged = true;
    let (integral, subdivisions) = refine(&f, a, b, config.eps, 0, config.max_depth, &mut converged);
    if !converged {
        log::warn!(
            "adaptive Simpson hit the depth ceiling ({}) on [{a}, {b}]; result is best-effort",
            config.max_depth
        );
    }

    Ok(SimpsonResult {
        integral,
        subdivisions,
        converged,
    })
}

fn refine<F>(
    f: &F,
    a: f64,
    b: f64,
    eps: f64,
    depth: usize,
    max_depth: usize,
    converged: &mut bool,
) -> (f64, usize)
where
    F: Fn(f64) -> f64,
{
    let coarse = simpson(f, a, b, 2);
    let fine = simpson(f, a, b, 4);
    let estimate = (fine - coarse).abs() / 15.0;

    if estimate < eps {
        return (fine, depth);
    }
    if depth >= max_depth {
        *converged = false;
        return (fine, depth);
    }

    let mid = (a + b) / 2.0;
    let (left, left_depth) = refine(f, a, mid, eps / 2.0, depth + 1, max_depth, converged);
    let (right, right_depth) = refine(f, mid, b, eps / 2.0, depth + 1, max_depth, converged);
    (left + right, left_depth + right_depth)
}
