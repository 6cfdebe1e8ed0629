//! Fitness evaluation.
//!
//! Fitness is the total value of the selected items, or exactly `0.0` when
//! their total weight exceeds the capacity. Infeasible individuals are
//! penalized, not removed: they stay in the population and can still be
//! selected and recombined.

use super::types::Individual;
use crate::error::{GaError, Result};
use crate::problem::KnapsackInstance;

/// Sum of the values of the selected items, ignoring capacity.
pub fn total_value(individual: &Individual, instance: &KnapsackInstance) -> f64 {
    selected_sum(individual, instance.values())
}

/// Sum of the weights of the selected items.
pub fn total_weight(individual: &Individual, instance: &KnapsackInstance) -> f64 {
    selected_sum(individual, instance.weights())
}

fn selected_sum(individual: &Individual, column: &[f64]) -> f64 {
    individual
        .genes()
        .iter()
        .zip(column)
        .filter(|(&g, _)| g)
        .map(|(_, &x)| x)
        .sum()
}

/// Scores an individual against the instance.
///
/// Assumes `individual.len() == instance.item_count()`; the runner checks
/// this before a run.
pub fn evaluate(individual: &Individual, instance: &KnapsackInstance) -> f64 {
    if total_weight(individual, instance) > instance.capacity() {
        0.0
    } else {
        total_value(individual, instance)
    }
}

/// Whether the selection fits within capacity.
pub fn is_feasible(individual: &Individual, instance: &KnapsackInstance) -> bool {
    total_weight(individual, instance) <= instance.capacity()
}

/// Arithmetic mean of [`evaluate`] over the population.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `population` is empty.
pub fn average_fitness(population: &[Individual], instance: &KnapsackInstance) -> Result<f64> {
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    let total: f64 = population.iter().map(|ind| evaluate(ind, instance)).sum();
    Ok(total / population.len() as f64)
}

/// Same as [`average_fitness`], but scores individuals on the rayon pool.
///
/// Scores are collected first and summed in population order, so the result
/// is bit-identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn par_average_fitness(
    population: &[Individual],
    instance: &KnapsackInstance,
) -> Result<f64> {
    use rayon::prelude::*;

    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    let scores: Vec<f64> = population
        .par_iter()
        .map(|ind| evaluate(ind, instance))
        .collect();
    let total: f64 = scores.iter().sum();
    Ok(total / population.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classic() -> KnapsackInstance {
        KnapsackInstance::classic()
    }

    #[test]
    fn test_feasible_selections() {
        let instance = classic();
        assert_eq!(evaluate(&Individual::from_bits(&[0, 1, 1]), &instance), 220.0);
        assert_eq!(evaluate(&Individual::from_bits(&[1, 0, 1]), &instance), 180.0);
        assert_eq!(evaluate(&Individual::from_bits(&[1, 1, 0]), &instance), 160.0);
        assert_eq!(evaluate(&Individual::from_bits(&[0, 0, 0]), &instance), 0.0);
    }

    #[test]
    fn test_over_capacity_scores_zero() {
        let instance = classic();
        let all = Individual::from_bits(&[1, 1, 1]);
        assert_eq!(total_weight(&all, &instance), 60.0);
        assert_eq!(total_value(&all, &instance), 280.0);
        assert_eq!(evaluate(&all, &instance), 0.0);
        assert!(!is_feasible(&all, &instance));
    }

    #[test]
    fn test_exactly_at_capacity_is_feasible() {
        // weights 20 + 30 == 50
        let ind = Individual::from_bits(&[0, 1, 1]);
        assert!(is_feasible(&ind, &classic()));
    }

    #[test]
    fn test_average_fitness() {
        let instance = classic();
        let population = vec![
            Individual::from_bits(&[1, 0, 1]),
            Individual::from_bits(&[1, 1, 1]),
            Individual::from_bits(&[1, 1, 0]),
            Individual::from_bits(&[0, 0, 0]),
        ];
        let avg = average_fitness(&population, &instance).unwrap();
        assert!((avg - 85.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_fitness_empty() {
        assert_eq!(
            average_fitness(&[], &classic()),
            Err(GaError::EmptyPopulation)
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_average_matches() {
        let instance = classic();
        let population: Vec<Individual> = (0u8..8)
            .map(|m| Individual::from_bits(&[m & 1, (m >> 1) & 1, (m >> 2) & 1]))
            .collect();
        assert_eq!(
            par_average_fitness(&population, &instance),
            average_fitness(&population, &instance)
        );
    }

    fn instance_and_individual() -> impl Strategy<Value = (KnapsackInstance, Individual)> {
        (1usize..24).prop_flat_map(|n| {
            (
                prop::collection::vec(0u32..1000, n),
                prop::collection::vec(0u32..1000, n),
                0u32..5000,
                prop::collection::vec(any::<bool>(), n),
            )
                .prop_map(|(values, weights, capacity, genes)| {
                    let instance = KnapsackInstance::new(
                        values.into_iter().map(f64::from).collect(),
                        weights.into_iter().map(f64::from).collect(),
                        f64::from(capacity),
                    )
                    .unwrap();
                    (instance, Individual::new(genes))
                })
        })
    }

    proptest! {
        #[test]
        fn prop_infeasible_is_zero((instance, ind) in instance_and_individual()) {
            if total_weight(&ind, &instance) > instance.capacity() {
                prop_assert_eq!(evaluate(&ind, &instance), 0.0);
            }
        }

        #[test]
        fn prop_feasible_is_exact_value_sum((instance, ind) in instance_and_individual()) {
            if total_weight(&ind, &instance) <= instance.capacity() {
                let expected: f64 = ind
                    .selected_items()
                    .iter()
                    .map(|&i| instance.values()[i])
                    .sum();
                prop_assert_eq!(evaluate(&ind, &instance), expected);
            }
        }

        #[test]
        fn prop_average_is_mean_of_scores(
            (instance, ind) in instance_and_individual(),
            copies in 1usize..6,
        ) {
            let mut population = vec![ind.clone(); copies];
            population.push(Individual::new(vec![false; ind.len()]));
            let scores: Vec<f64> = population.iter().map(|i| evaluate(i, &instance)).collect();
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            let avg = average_fitness(&population, &instance).unwrap();
            prop_assert!((avg - mean).abs() < 1e-9);
        }
    }
}
