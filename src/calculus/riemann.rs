// src/calculus/riemann.rs
//
// Left-endpoint Riemann sum: the simplest numerical integration scheme.
// Complexity: O((x_max - x_min) / dx)
// Error: O(dx) per interval for smooth integrands

use crate::error::MathError;
use log::debug;

/// Approximates the integral of `f` over `[x_min, x_max)` by a
/// left-endpoint Riemann sum with fixed step `dx`.
///
/// Accumulates `f(x) * dx` for `x` stepping from `x_min` by `dx` while
/// `x < x_max`. The right boundary is excluded: the last partial interval
/// beyond `x_max` is never included, so the result is a systematic
/// left-Riemann approximation rather than an exact value. Accumulation
/// order is sequential, so the result is deterministic for identical
/// inputs.
///
/// # Arguments
/// * `f` - The integrand
/// * `x_min` - Lower bound of integration
/// * `x_max` - Upper bound of integration
/// * `dx` - Width of each rectangle (must be positive and finite)
///
/// # Examples
/// ```
/// use mathkit::calculus::integrate;
///
/// // Integral of x^2 over [0, 1] is 1/3
/// let area = integrate(|x| x * x, 0.0, 1.0, 1e-4).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-3);
/// ```
pub fn integrate<F>(f: F, x_min: f64, x_max: f64, dx: f64) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
{
    // A non-positive step would never terminate.
    if !(dx > 0.0) || !dx.is_finite() {
        return Err(MathError::NonPositiveStep(dx));
    }

    let mut running_sum = 0.0;
    let mut x = x_min;
    while x < x_max {
        running_sum += f(x) * dx;
        x += dx;
    }

    debug!(
        "integrate: [{}, {}) with dx={} -> {}",
        x_min, x_max, dx, running_sum
    );
    Ok(running_sum)
}

/// Returns `num_points` evenly spaced samples over `[x_min, x_max]`,
/// endpoints included.
///
/// A single point collapses to `x_min`; zero points yields an empty
/// vector. Useful for building the sample grids the sweep evaluators in
/// [`crate::probability`] consume.
pub fn linspace(x_min: f64, x_max: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![x_min],
        n => {
            let step = (x_max - x_min) / (n - 1) as f64;
            (0..n).map(|i| x_min + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_integrate_gaussian() {
        // Integral of e^(-x^2) over the real line is sqrt(pi); [-10, 10]
        // captures it to well below the tolerance.
        let area = integrate(|x| (-x * x).exp(), -10.0, 10.0, 0.1).unwrap();
        let rel_err = ((PI.sqrt() - area) / PI.sqrt()).abs();
        assert!(rel_err < 1e-7, "relative error {rel_err}");
    }

    #[test]
    fn test_integrate_constant() {
        let area = integrate(|_| 2.0, 0.0, 5.0, 0.5).unwrap();
        assert!((area - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_excludes_right_boundary() {
        // [0, 1) with dx = 0.4 visits x = 0.0, 0.4, 0.8 only.
        let area = integrate(|_| 1.0, 0.0, 1.0, 0.4).unwrap();
        assert!((area - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_empty_interval() {
        let area = integrate(|x| x, 3.0, 3.0, 0.1).unwrap();
        assert_eq!(area, 0.0);
    }

    #[test]
    fn test_integrate_rejects_bad_step() {
        assert_eq!(
            integrate(|x| x, 0.0, 1.0, 0.0),
            Err(MathError::NonPositiveStep(0.0))
        );
        assert_eq!(
            integrate(|x| x, 0.0, 1.0, -0.1),
            Err(MathError::NonPositiveStep(-0.1))
        );
        assert!(integrate(|x| x, 0.0, 1.0, f64::NAN).is_err());
        assert!(integrate(|x| x, 0.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-2.0, 2.0, 5);
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
