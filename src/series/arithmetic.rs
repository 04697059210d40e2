// src/series/arithmetic.rs

use crate::error::MathError;

/// Sums the multiples of `m` lying in `[start, n]` using the closed-form
/// Gauss pair-sum, so the cost is O(1) regardless of the range.
///
/// With `h` the largest multiple of `m` at most `n` and `s` the largest
/// multiple strictly below `start`, the sum is
/// `h(h+m)/(2m) - s(s+m)/(2m)`.
///
/// # Arguments
/// * `n` - Largest integer considered (must be non-negative)
/// * `m` - Stride between summed integers (must be positive)
/// * `start` - Smallest integer considered (must be at least 1)
///
/// # Examples
/// ```
/// use mathkit::series::sum_integers;
///
/// // 1 + 2 + ... + 10
/// assert_eq!(sum_integers(10, 1, 1).unwrap(), 55);
/// // 9 + 12 + 15 + 18 + 21
/// assert_eq!(sum_integers(22, 3, 7).unwrap(), 75);
/// ```
pub fn sum_integers(n: i64, m: i64, start: i64) -> Result<i64, MathError> {
    if m <= 0 {
        return Err(MathError::NonPositiveArgument {
            name: "m",
            value: m,
        });
    }
    if n < 0 {
        return Err(MathError::NegativeArgument {
            name: "n",
            value: n,
        });
    }
    if start < 1 {
        return Err(MathError::NonPositiveArgument {
            name: "start",
            value: start,
        });
    }

    let h = m * (n / m);
    let s = m * ((start - 1) / m);

    // start beyond the last multiple: the range is empty. Without this
    // the pair-sum difference goes negative.
    if s >= h {
        return Ok(0);
    }

    // The pair-sum intermediates are quadratic in n, so they are formed
    // in i128 even when the final sum fits an i64.
    let (h, s, m) = (h as i128, s as i128, m as i128);
    let total = (h * (h + m)) / (2 * m) - (s * (s + m)) / (2 * m);
    i64::try_from(total).map_err(|_| MathError::Overflow { name: "sum" })
}
