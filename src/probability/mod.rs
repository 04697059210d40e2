// src/probability/mod.rs

pub mod distributions;
pub mod random_source;
pub mod sampling;

pub use distributions::{
    binomial_pmf, binomial_pmf_sweep, doubly_exp_pdf, doubly_exp_pdf_sweep, exp_pdf,
    exp_pdf_sweep, geometric_pmf, geometric_pmf_sweep, normal_pdf, normal_pdf_sweep,
    poisson_pmf, poisson_pmf_sweep, uniform_pdf, uniform_pdf_sweep,
};
pub use random_source::RandomSource;
pub use sampling::{coin_toss, die_roll, normalize, CoinFace};
