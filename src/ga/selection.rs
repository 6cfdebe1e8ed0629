//! Parent selection.
//!
//! A double binary tournament: four distinct individuals are drawn at
//! random, the first two compete for parent A and the last two for
//! parent B. It is cheap and biased toward local competition rather than
//! global ranking.
//!
//! The pool is drawn as indices, so the population keeps its storage order.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::fitness::evaluate;
use super::types::Individual;
use crate::error::{GaError, Result};
use crate::problem::KnapsackInstance;
use rand::seq::index;
use rand::Rng;

/// Number of individuals drawn into one tournament pool.
pub const TOURNAMENT_POOL: usize = 4;

/// Returns whichever of `first`/`second` wins a binary tournament.
///
/// `first` wins only with strictly greater fitness; ties go to `second`.
fn binary_tournament(first: usize, second: usize, scores: impl Fn(usize) -> f64) -> usize {
    if scores(first) > scores(second) {
        first
    } else {
        second
    }
}

/// Draws the four pool indices, in competition order.
pub fn draw_pool<R: Rng>(population_len: usize, rng: &mut R) -> Result<[usize; TOURNAMENT_POOL]> {
    if population_len < TOURNAMENT_POOL {
        return Err(GaError::Configuration(format!(
            "tournament selection needs at least {TOURNAMENT_POOL} individuals, got {population_len}"
        )));
    }
    let picks = index::sample(rng, population_len, TOURNAMENT_POOL);
    let mut pool = [0usize; TOURNAMENT_POOL];
    for (slot, idx) in pool.iter_mut().zip(picks.iter()) {
        *slot = idx;
    }
    Ok(pool)
}

/// Picks the indices of two parents.
pub fn select_parent_indices<R: Rng>(
    population: &[Individual],
    instance: &KnapsackInstance,
    rng: &mut R,
) -> Result<(usize, usize)> {
    let [a, b, c, d] = draw_pool(population.len(), rng)?;
    let score = |i: usize| evaluate(&population[i], instance);
    Ok((binary_tournament(a, b, score), binary_tournament(c, d, score)))
}

/// Picks two parents and returns copies of them.
///
/// # Errors
/// [`GaError::Configuration`] if the population has fewer than four members.
pub fn select_parents<R: Rng>(
    population: &[Individual],
    instance: &KnapsackInstance,
    rng: &mut R,
) -> Result<(Individual, Individual)> {
    let (a, b) = select_parent_indices(population, instance, rng)?;
    Ok((population[a].clone(), population[b].clone()))
}
