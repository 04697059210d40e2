// src/error.rs

use thiserror::Error;

/// Domain errors raised when an input violates a function's precondition.
///
/// Every validation is local and fail-fast: functions check their inputs
/// before performing any computation, and there is no silent clamping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("{name} must be non-negative, got {value}")]
    NegativeArgument { name: &'static str, value: i64 },

    #[error("{name} must be greater than 0, got {value}")]
    NonPositiveArgument { name: &'static str, value: i64 },

    #[error("step dx must be a positive finite number, got {0}")]
    NonPositiveStep(f64),

    #[error("{name} must be in the range {range}, got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        range: &'static str,
        value: f64,
    },

    #[error("k ({k}) must not exceed n ({n})")]
    KExceedsN { n: i64, k: i64 },

    #[error("expected {expected} weights, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot normalize data with zero sum")]
    ZeroSum,

    #[error("interval bounds must satisfy a < b, got a={a}, b={b}")]
    InvalidInterval { a: f64, b: f64 },

    #[error("start index ({start}) must not exceed last index ({end})")]
    StartExceedsEnd { start: usize, end: usize },

    #[error("{name} does not fit in 64 bits")]
    Overflow { name: &'static str },
}
