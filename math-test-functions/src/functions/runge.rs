//! Runge test function

/// Runge function f(x) = 1 / (1 + 25x²)
/// Integral over [-1, 1]: (2/5) * atan(5) ≈ 0.5493603067780064
pub fn runge(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        assert_relative_eq!(runge(0.0), 1.0);
        assert_relative_eq!(runge(1.0), 1.0 / 26.0);
        assert_relative_eq!(runge(-1.0), 1.0 / 26.0);
    }
}
