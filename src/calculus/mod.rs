// src/calculus/mod.rs

pub mod riemann;

pub use riemann::{integrate, linspace};
