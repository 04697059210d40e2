// src/combinatorics/mod.rs

pub mod factorial;
pub mod pascal;

pub use factorial::{binomial_coefficient, factorial};
pub use pascal::{format_pascals_triangle, pascals_triangle};
