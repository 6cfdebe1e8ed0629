//! Random population initialization.

use super::types::{Individual, Population};
use rand::Rng;

/// Creates one individual with `gene_length` fair coin-flip genes.
pub fn random_individual<R: Rng>(gene_length: usize, rng: &mut R) -> Individual {
    Individual::new((0..gene_length).map(|_| rng.random_bool(0.5)).collect())
}

/// Creates `size` random individuals of `gene_length` genes each.
pub fn initialize<R: Rng>(size: usize, gene_length: usize, rng: &mut R) -> Population {
    (0..size)
        .map(|_| random_individual(gene_length, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_shape() {
        let mut rng = create_rng(42);
        let population = initialize(10, 7, &mut rng);
        assert_eq!(population.len(), 10);
        assert!(population.iter().all(|ind| ind.len() == 7));
    }

    #[test]
    fn test_genes_roughly_uniform() {
        let mut rng = create_rng(42);
        let population = initialize(200, 50, &mut rng);
        let ones: usize = population
            .iter()
            .map(|ind| ind.genes().iter().filter(|&&g| g).count())
            .sum();
        let total = 200 * 50;
        assert!(
            ones > total * 45 / 100 && ones < total * 55 / 100,
            "expected about half set genes, got {ones}/{total}"
        );
    }

    #[test]
    fn test_seeded_initialization_is_reproducible() {
        let a = initialize(5, 12, &mut create_rng(9));
        let b = initialize(5, 12, &mut create_rng(9));
        assert_eq!(a, b);
    }
}
