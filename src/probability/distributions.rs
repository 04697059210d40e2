// src/probability/distributions.rs
//
// Closed-form PMF/PDF evaluators. Every public function validates its
// parameters before touching the formula, and each evaluator comes in a
// scalar and an elementwise-sweep variant.

use crate::error::MathError;
use std::f64::consts::PI;

fn check_probability(name: &'static str, p: f64) -> Result<(), MathError> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(MathError::ParameterOutOfRange {
            name,
            range: "(0, 1)",
            value: p,
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), MathError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MathError::ParameterOutOfRange {
            name,
            range: "(0, inf)",
            value,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Normal (Gaussian)
// ---------------------------------------------------------------------------

fn normal_density(x: f64, mean: f64, sigma: f64) -> f64 {
    let z = x - mean;
    1.0 / (2.0 * PI * sigma * sigma).sqrt() * (-(z * z) / (2.0 * sigma * sigma)).exp()
}

/// Normal (Gaussian) density at `x` with the given `mean` and standard
/// deviation `sigma` (must be positive).
///
/// # Examples
/// ```
/// use mathkit::probability::normal_pdf;
///
/// let peak = normal_pdf(0.0, 0.0, 1.0).unwrap();
/// assert!((peak - 0.3989422804014327).abs() < 1e-12);
/// ```
pub fn normal_pdf(x: f64, mean: f64, sigma: f64) -> Result<f64, MathError> {
    check_positive("sigma", sigma)?;
    Ok(normal_density(x, mean, sigma))
}

/// Elementwise [`normal_pdf`] over a sample grid; parameters are
/// validated once.
pub fn normal_pdf_sweep(xs: &[f64], mean: f64, sigma: f64) -> Result<Vec<f64>, MathError> {
    check_positive("sigma", sigma)?;
    Ok(xs.iter().map(|&x| normal_density(x, mean, sigma)).collect())
}

// ---------------------------------------------------------------------------
// Binomial
// ---------------------------------------------------------------------------

/// Natural log of `C(n, k)`, accumulated term by term. `C(n, k)` itself
/// overflows `f64` near n = 1030, so the coefficient never leaves log
/// space.
fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    let k = k.min(n - k);
    let mut ln_choose = 0.0;
    for i in 1..=k {
        ln_choose += ((n - k + i) as f64 / i as f64).ln();
    }
    ln_choose
}

/// Probability that an event with probability `p` occurs exactly `k`
/// times over `n` trials: `C(n, k) p^k (1-p)^(n-k)`.
///
/// Evaluated in log space, so large `n` underflows gracefully toward 0
/// instead of overflowing the binomial coefficient.
///
/// # Arguments
/// * `n` - Total number of trials (must be positive)
/// * `k` - Number of occurrences (must not exceed `n`)
/// * `p` - Event probability, strictly inside `(0, 1)`
pub fn binomial_pmf(n: u64, k: u64, p: f64) -> Result<f64, MathError> {
    if n == 0 {
        return Err(MathError::NonPositiveArgument { name: "n", value: 0 });
    }
    if k > n {
        return Err(MathError::KExceedsN {
            n: n as i64,
            k: k as i64,
        });
    }
    check_probability("p", p)?;

    let ln_pmf =
        ln_binomial_coefficient(n, k) + (k as f64) * p.ln() + ((n - k) as f64) * (1.0 - p).ln();
    Ok(ln_pmf.exp())
}

/// Evaluates [`binomial_pmf`] for every `k` in `0..=n`.
pub fn binomial_pmf_sweep(n: u64, p: f64) -> Result<Vec<f64>, MathError> {
    (0..=n).map(|k| binomial_pmf(n, k, p)).collect()
}

// ---------------------------------------------------------------------------
// Geometric
// ---------------------------------------------------------------------------

/// Probability that an event with probability `p` first occurs on the
/// `k`th trial: `(1-p)^(k-1) p`, for `k >= 1`.
pub fn geometric_pmf(k: u64, p: f64) -> Result<f64, MathError> {
    if k == 0 {
        return Err(MathError::NonPositiveArgument { name: "k", value: 0 });
    }
    check_probability("p", p)?;
    Ok((1.0 - p).powf((k - 1) as f64) * p)
}

/// Evaluates [`geometric_pmf`] for every `k` in `1..=k_max`.
pub fn geometric_pmf_sweep(k_max: u64, p: f64) -> Result<Vec<f64>, MathError> {
    if k_max == 0 {
        return Err(MathError::NonPositiveArgument {
            name: "k_max",
            value: 0,
        });
    }
    (1..=k_max).map(|k| geometric_pmf(k, p)).collect()
}

// ---------------------------------------------------------------------------
// Poisson
// ---------------------------------------------------------------------------

/// Poisson probability of `k` arrivals under rate `lambda`:
/// `lambda^k e^(-lambda) / k!`.
///
/// Evaluated in log space; `k!` would overflow `f64` past k = 170 and
/// turn the quotient into `inf/inf`.
///
/// # Arguments
/// * `k` - Number of arrivals
/// * `lambda` - Rate parameter, in `(0, inf)`
pub fn poisson_pmf(k: u64, lambda: f64) -> Result<f64, MathError> {
    check_positive("lambda", lambda)?;
    let mut ln_k_fact = 0.0;
    for i in 2..=k {
        ln_k_fact += (i as f64).ln();
    }
    Ok(((k as f64) * lambda.ln() - lambda - ln_k_fact).exp())
}

/// Evaluates [`poisson_pmf`] for every `k` in `1..=k_max`.
pub fn poisson_pmf_sweep(k_max: u64, lambda: f64) -> Result<Vec<f64>, MathError> {
    if k_max == 0 {
        return Err(MathError::NonPositiveArgument {
            name: "k_max",
            value: 0,
        });
    }
    (1..=k_max).map(|k| poisson_pmf(k, lambda)).collect()
}

// ---------------------------------------------------------------------------
// Uniform
// ---------------------------------------------------------------------------

fn uniform_density(x: f64, a: f64, b: f64) -> f64 {
    if x >= a && x <= b {
        1.0 / (b - a)
    } else {
        0.0
    }
}

/// Uniform density on `[a, b]`: the constant `1/(b-a)` inside the
/// interval, 0 outside. Requires `a < b`.
pub fn uniform_pdf(x: f64, a: f64, b: f64) -> Result<f64, MathError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(MathError::InvalidInterval { a, b });
    }
    Ok(uniform_density(x, a, b))
}

/// Elementwise [`uniform_pdf`] over a sample grid.
pub fn uniform_pdf_sweep(xs: &[f64], a: f64, b: f64) -> Result<Vec<f64>, MathError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(MathError::InvalidInterval { a, b });
    }
    Ok(xs.iter().map(|&x| uniform_density(x, a, b)).collect())
}

// ---------------------------------------------------------------------------
// Exponential and doubly-exponential (Laplace)
// ---------------------------------------------------------------------------

/// Exponential density `rate * e^(-rate * x)`. Requires `rate > 0`.
pub fn exp_pdf(x: f64, rate: f64) -> Result<f64, MathError> {
    check_positive("rate", rate)?;
    Ok(rate * (-rate * x).exp())
}

/// Elementwise [`exp_pdf`] over a sample grid.
pub fn exp_pdf_sweep(xs: &[f64], rate: f64) -> Result<Vec<f64>, MathError> {
    check_positive("rate", rate)?;
    Ok(xs.iter().map(|&x| rate * (-rate * x).exp()).collect())
}

/// Doubly-exponential (Laplace) density `(rate/2) e^(-rate * |x|)`.
/// Requires `rate > 0`.
pub fn doubly_exp_pdf(x: f64, rate: f64) -> Result<f64, MathError> {
    check_positive("rate", rate)?;
    Ok(rate / 2.0 * (-rate * x.abs()).exp())
}

/// Elementwise [`doubly_exp_pdf`] over a sample grid.
pub fn doubly_exp_pdf_sweep(xs: &[f64], rate: f64) -> Result<Vec<f64>, MathError> {
    check_positive("rate", rate)?;
    Ok(xs
        .iter()
        .map(|&x| rate / 2.0 * (-rate * x.abs()).exp())
        .collect())
}
