// src/probability/sampling.rs

use crate::error::MathError;
use log::debug;
use rand::Rng;
use std::fmt;

/// Divides each element by the total so the result sums to 1.
///
/// # Arguments
/// * `data` - Values to normalize; negative entries and a zero sum are
///   rejected
///
/// # Examples
/// ```
/// use mathkit::probability::normalize;
///
/// let weights = normalize(&[1.0, 1.0, 2.0]).unwrap();
/// assert_eq!(weights, vec![0.25, 0.25, 0.5]);
/// ```
pub fn normalize(data: &[f64]) -> Result<Vec<f64>, MathError> {
    for &d in data {
        if d < 0.0 || !d.is_finite() {
            return Err(MathError::ParameterOutOfRange {
                name: "data",
                range: "[0, inf)",
                value: d,
            });
        }
    }

    let total: f64 = data.iter().sum();
    if total == 0.0 {
        return Err(MathError::ZeroSum);
    }
    Ok(data.iter().map(|d| d / total).collect())
}

/// The two outcomes of a coin toss; displays as `H` / `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "H"),
            CoinFace::Tails => write!(f, "T"),
        }
    }
}

/// Simulates a coin toss, returning heads with probability `bias`.
///
/// A uniform draw in `[0, 1)` is compared against `bias`, so `bias = 1.0`
/// always lands heads and `bias = 0.0` always lands tails.
///
/// # Arguments
/// * `bias` - Probability of heads, in `[0, 1]`
/// * `rng` - The random source to draw from
pub fn coin_toss<R: Rng>(bias: f64, rng: &mut R) -> Result<CoinFace, MathError> {
    if !(0.0..=1.0).contains(&bias) {
        return Err(MathError::ParameterOutOfRange {
            name: "bias",
            range: "[0, 1]",
            value: bias,
        });
    }

    if rng.gen::<f64>() < bias {
        Ok(CoinFace::Heads)
    } else {
        Ok(CoinFace::Tails)
    }
}

/// Simulates a die roll, returning a face in `1..=num_faces`.
///
/// Without weights the die is fair. With weights, the vector length must
/// match `num_faces` (checked before anything else), every weight must be
/// non-negative, and weights that do not already sum to 1 are
/// renormalized.
///
/// # Arguments
/// * `num_faces` - Number of faces on the die (must be positive)
/// * `weights` - Optional bias for each face
/// * `rng` - The random source to draw from
///
/// # Examples
/// ```
/// use mathkit::probability::{die_roll, RandomSource};
///
/// let mut rng = RandomSource::from_seed(42);
/// let face = die_roll(6, None, &mut rng).unwrap();
/// assert!((1..=6).contains(&face));
/// ```
pub fn die_roll<R: Rng>(
    num_faces: u32,
    weights: Option<&[f64]>,
    rng: &mut R,
) -> Result<u32, MathError> {
    if num_faces == 0 {
        return Err(MathError::NonPositiveArgument {
            name: "num_faces",
            value: 0,
        });
    }

    let weights = match weights {
        None => normalize(&vec![1.0; num_faces as usize])?,
        Some(w) => {
            // Length first, so a wrong-sized vector never slips through
            // the renormalization branch.
            if w.len() != num_faces as usize {
                return Err(MathError::LengthMismatch {
                    expected: num_faces as usize,
                    actual: w.len(),
                });
            }
            let total: f64 = w.iter().sum();
            if total != 1.0 {
                debug!("die_roll: weights sum to {}, renormalizing", total);
            }
            normalize(w)?
        }
    };

    // Inverse-CDF walk over the normalized weights.
    let threshold = rng.gen::<f64>();
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            last_positive = i;
            cumulative += w;
            if cumulative > threshold {
                return Ok(i as u32 + 1);
            }
        }
    }

    // Floating-point edge case: fall back to the last face that carries
    // any probability mass.
    Ok(last_positive as u32 + 1)
}
