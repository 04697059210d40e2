// src/number_theory/trial_division.rs
//
// Trial Division: the simplest complete factorization algorithm
// Complexity: O(sqrt(n))
// Best for: numbers that fit comfortably in machine words

use crate::error::MathError;
use log::debug;
use num::{BigInt, Integer, One, ToPrimitive};

/// Completely factors `n` by trial division, returning all prime factors
/// in ascending order with multiplicity.
///
/// Factors of 2 are divided out first, then odd divisors are tried up to
/// the square root of the shrinking remainder; any remainder greater than
/// 2 at the end is itself prime and appended last. `prime_factors(1)`
/// returns an empty vector.
///
/// Inputs that fit in a `u64` take a machine-word fast path; larger
/// inputs fall back to `BigInt` arithmetic.
///
/// # Arguments
/// * `n` - The number to factor (must be at least 1)
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::number_theory::prime_factors;
///
/// let factors = prime_factors(&BigInt::from(13195)).unwrap();
/// let as_u64: Vec<u64> = factors.iter().map(|f| f.try_into().unwrap()).collect();
/// assert_eq!(as_u64, vec![5, 7, 13, 29]);
/// ```
pub fn prime_factors(n: &BigInt) -> Result<Vec<BigInt>, MathError> {
    if n < &BigInt::one() {
        return Err(MathError::NonPositiveArgument {
            name: "n",
            value: n.to_i64().unwrap_or(i64::MIN),
        });
    }

    // Fast path: iterate using u64 arithmetic
    if let Some(small) = n.to_u64() {
        debug!("prime_factors: u64 fast path for {}", small);
        return Ok(prime_factors_u64(small)
            .into_iter()
            .map(BigInt::from)
            .collect());
    }

    debug!("prime_factors: BigInt path for {}", n);
    let mut factors = Vec::new();
    let mut remaining = n.clone();
    let two = BigInt::from(2);

    while remaining.is_even() {
        factors.push(two.clone());
        remaining /= &two;
    }

    let mut divisor = BigInt::from(3);
    while &divisor * &divisor <= remaining {
        while remaining.is_multiple_of(&divisor) {
            factors.push(divisor.clone());
            remaining /= &divisor;
        }
        divisor += 2;
    }

    if remaining > two {
        factors.push(remaining);
    }

    Ok(factors)
}

fn prime_factors_u64(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    // divisor <= n / divisor avoids overflowing divisor * divisor near u64::MAX
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        while n % divisor == 0 {
            factors.push(divisor);
            n /= divisor;
        }
        divisor += 2;
    }

    if n > 2 {
        factors.push(n);
    }

    factors
}

/// Trial-division primality test.
///
/// Deterministic and exact; cost is O(sqrt(n)), so this is meant for
/// modest inputs, not cryptographic sizes. Values below 2 are not prime.
pub fn is_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    if let Some(small) = n.to_u64() {
        let mut divisor = 3u64;
        while divisor <= small / divisor {
            if small % divisor == 0 {
                return false;
            }
            divisor += 2;
        }
        return true;
    }

    let mut divisor = BigInt::from(3);
    while &divisor * &divisor <= *n {
        if n.is_multiple_of(&divisor) {
            return false;
        }
        divisor += 2;
    }
    true
}
