// src/number_theory/mod.rs

pub mod trial_division;

pub use trial_division::{is_prime, prime_factors};
