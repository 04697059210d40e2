// src/lib.rs

//! mathkit: a small educational mathematics toolkit.
//!
//! Numerical integration, combinatorics, probability distributions and
//! simulators, integer series, and prime factorization. Every function is
//! a stateless, pure routine; random sampling takes an explicit `rand::Rng`
//! so results are reproducible under a fixed seed.

pub mod calculus;
pub mod combinatorics;
pub mod error;
pub mod number_theory;
pub mod probability;
pub mod series;

pub use error::MathError;
