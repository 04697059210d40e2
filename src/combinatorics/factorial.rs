// src/combinatorics/factorial.rs

use crate::error::MathError;
use num::{BigInt, One};

/// Computes `n!` as an iterative product over `1..=n`.
///
/// `factorial(0)` is 1 by convention. Values grow without bound, so the
/// result is a `BigInt`.
///
/// # Arguments
/// * `n` - The operand (must be non-negative)
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::combinatorics::factorial;
///
/// assert_eq!(factorial(5).unwrap(), BigInt::from(120));
/// assert_eq!(factorial(0).unwrap(), BigInt::from(1));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigInt, MathError> {
    if n < 0 {
        return Err(MathError::NegativeArgument {
            name: "n",
            value: n,
        });
    }

    let mut running_prod = BigInt::one();
    for i in 2..=n {
        running_prod *= i;
    }
    Ok(running_prod)
}

/// Computes the binomial coefficient `C(n, k) = n! / (k! (n-k)!)`.
///
/// Both arguments must be non-negative and `k` must not exceed `n`; each
/// violation is reported as its own domain error rather than surfacing as
/// a negative-factorial failure from the inner calls.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::combinatorics::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5, 2).unwrap(), BigInt::from(10));
/// ```
pub fn binomial_coefficient(n: i64, k: i64) -> Result<BigInt, MathError> {
    if n < 0 {
        return Err(MathError::NegativeArgument {
            name: "n",
            value: n,
        });
    }
    if k < 0 {
        return Err(MathError::NegativeArgument {
            name: "k",
            value: k,
        });
    }
    if k > n {
        return Err(MathError::KExceedsN { n, k });
    }

    Ok(factorial(n)? / (factorial(k)? * factorial(n - k)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        let expected = [1u64, 1, 2, 6, 24, 120, 720, 5040];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as i64).unwrap(), BigInt::from(*want));
        }
    }

    #[test]
    fn test_factorial_exceeds_machine_width() {
        // 25! does not fit in u64.
        let f25 = factorial(25).unwrap();
        assert_eq!(
            f25,
            "15511210043330985984000000".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(
            factorial(-3),
            Err(MathError::NegativeArgument { name: "n", value: -3 })
        );
    }

    #[test]
    fn test_binomial_coefficient_known_values() {
        assert_eq!(binomial_coefficient(0, 0).unwrap(), BigInt::from(1));
        assert_eq!(binomial_coefficient(4, 2).unwrap(), BigInt::from(6));
        assert_eq!(binomial_coefficient(10, 3).unwrap(), BigInt::from(120));
        assert_eq!(binomial_coefficient(52, 5).unwrap(), BigInt::from(2598960));
    }

    #[test]
    fn test_binomial_coefficient_symmetry() {
        for k in 0..=12 {
            assert_eq!(
                binomial_coefficient(12, k).unwrap(),
                binomial_coefficient(12, 12 - k).unwrap()
            );
        }
    }

    #[test]
    fn test_binomial_coefficient_invalid() {
        assert_eq!(
            binomial_coefficient(3, 5),
            Err(MathError::KExceedsN { n: 3, k: 5 })
        );
        assert!(binomial_coefficient(-1, 0).is_err());
        assert!(binomial_coefficient(5, -2).is_err());
    }
}
