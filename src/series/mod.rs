// src/series/mod.rs

pub mod arithmetic;
pub mod fibonacci;

pub use arithmetic::sum_integers;
pub use fibonacci::{fibonacci, fibonacci_below, fibonacci_from};
