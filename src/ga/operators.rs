//! Variation operators for binary chromosomes.
//!
//! - [`crossover`]: single-point crossover at the midpoint
//! - [`mutate`]: independent per-gene bit flips

use super::types::Individual;
use crate::error::{GaError, Result};
use rand::Rng;

/// Single-point crossover at `n = len / 2`.
///
/// `child1 = a[..n] ++ b[n..]`, `child2 = b[..n] ++ a[n..]`. Deterministic.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length,
/// [`GaError::Configuration`] if they are empty.
pub fn crossover(a: &Individual, b: &Individual) -> Result<(Individual, Individual)> {
    let len = a.len();
    if b.len() != len {
        return Err(GaError::LengthMismatch {
            expected: len,
            actual: b.len(),
        });
    }
    if len == 0 {
        return Err(GaError::Configuration("parents must not be empty".into()));
    }

    let n = len / 2;
    let (a_head, a_tail) = a.genes().split_at(n);
    let (b_head, b_tail) = b.genes().split_at(n);

    let child1 = Individual::new([a_head, b_tail].concat());
    let child2 = Individual::new([b_head, a_tail].concat());
    Ok((child1, child2))
}

/// Flips every gene of every individual with independent probability `rate`.
///
/// # Errors
/// [`GaError::Configuration`] if `rate` is not within `[0, 1]` (NaN included).
pub fn mutate<R: Rng>(individuals: &mut [Individual], rate: f64, rng: &mut R) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(GaError::Configuration(format!(
            "mutation rate must be within [0, 1], got {rate}"
        )));
    }
    for individual in individuals.iter_mut() {
        for gene in individual.genes_mut() {
            if rng.random_bool(rate) {
                *gene = !*gene;
            }
        }
    }
    Ok(())
}
