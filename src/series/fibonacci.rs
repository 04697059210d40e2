// src/series/fibonacci.rs

use crate::error::MathError;
use num::BigInt;

/// Returns the Fibonacci terms `F_0 ..= F_n` (that is, `n + 1` values
/// starting `0, 1, 1, 2, 3, ...`).
///
/// Terms are built by linear accumulation and carried as `BigInt`, so the
/// sequence never overflows.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::series::fibonacci;
///
/// let seq: Vec<i64> = fibonacci(7).iter().map(|v| v.try_into().unwrap()).collect();
/// assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
pub fn fibonacci(n: usize) -> Vec<BigInt> {
    let mut seq = vec![BigInt::from(0), BigInt::from(1)];
    while seq.len() < n + 1 {
        let next = &seq[seq.len() - 1] + &seq[seq.len() - 2];
        seq.push(next);
    }
    seq.truncate(n + 1);
    seq
}

/// Returns the Fibonacci terms `F_{n_start} ..= F_n`.
///
/// Equivalent to [`fibonacci`] with the first `n_start` terms dropped;
/// `n_start > n` is rejected.
pub fn fibonacci_from(n: usize, n_start: usize) -> Result<Vec<BigInt>, MathError> {
    if n_start > n {
        return Err(MathError::StartExceedsEnd {
            start: n_start,
            end: n,
        });
    }
    Ok(fibonacci(n).split_off(n_start))
}

/// Returns Fibonacci terms while the next term stays strictly below `max`.
///
/// The seed terms `[0, 1]` are always produced before the bound applies,
/// so the shortest possible result is `[0, 1]`. `max` must be positive.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::series::fibonacci_below;
///
/// let seq = fibonacci_below(&BigInt::from(100)).unwrap();
/// assert_eq!(*seq.last().unwrap(), BigInt::from(89));
/// ```
pub fn fibonacci_below(max: &BigInt) -> Result<Vec<BigInt>, MathError> {
    if *max <= BigInt::from(0) {
        return Err(MathError::NonPositiveArgument {
            name: "max",
            value: i64::try_from(max).unwrap_or(i64::MIN),
        });
    }

    let mut seq = vec![BigInt::from(0), BigInt::from(1)];
    loop {
        let next = &seq[seq.len() - 1] + &seq[seq.len() - 2];
        if next >= *max {
            break;
        }
        seq.push(next);
    }
    Ok(seq)
}
