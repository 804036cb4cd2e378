//! Fixed-step composite quadrature rules
//!
//! Building blocks for the adaptive method, usable on their own when the
//! subdivision count is known up front.

/// Composite Simpson's rule with `n` subintervals.
///
/// Endpoints get weight 1, odd-indexed interior points 4, even-indexed
/// interior points 2, scaled by `h / 3` with `h = (b - a) / n`.
///
/// # Panics
///
/// Panics if `n` is odd or smaller than 2.
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    assert!(
        n >= 2 && n % 2 == 0,
        "Simpson's rule needs an even subinterval count >= 2, got {n}"
    );

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        sum += if i % 2 == 0 { 2.0 * f(x) } else { 4.0 * f(x) };
    }
    h / 3.0 * sum
}

/// Composite trapezoid rule with `n` subintervals.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    assert!(n >= 1, "trapezoid rule needs at least one subinterval");

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }
    h * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_simpson_exact_for_cubics() {
        // Simpson integrates polynomials up to degree 3 exactly.
        let integral = simpson(|x| x * x * x, 0.0, 1.0, 2);
        assert_relative_eq!(integral, 0.25, epsilon = 1e-14);

        let integral = simpson(|x| 2.0 * x * x - x + 1.0, -1.0, 2.0, 4);
        // antiderivative: 2x^3/3 - x^2/2 + x
        let exact = (16.0 / 3.0 - 2.0 + 2.0) - (-2.0 / 3.0 - 0.5 - 1.0);
        assert_relative_eq!(integral, exact, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sin_converges() {
        let coarse = simpson(f64::sin, 0.0, PI, 8);
        let fine = simpson(f64::sin, 0.0, PI, 128);
        assert!((fine - 2.0).abs() < (coarse - 2.0).abs());
        assert_relative_eq!(fine, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let integral = trapezoid(|x| 3.0 * x + 1.0, 0.0, 2.0, 1);
        assert_relative_eq!(integral, 8.0, epsilon = 1e-14);
    }

    #[test]
    #[should_panic]
    fn test_simpson_rejects_odd_count() {
        simpson(|x| x, 0.0, 1.0, 3);
    }
}
