//! Chromosome representation.
//!
//! An [`Individual`] is a binary selection vector over the item catalog:
//! gene `i` is `true` when item `i` goes into the knapsack. Genes are stored
//! as `bool`, so a mutation flip is always a plain negation and can never
//! leave the binary domain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate item selection.
///
/// Fitness is not cached here; see [`evaluate`](super::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
}

/// A generation's worth of individuals.
pub type Population = Vec<Individual>;

impl Individual {
    /// Wraps an existing gene vector.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds an individual from `0`/`1` values; any non-zero value counts as `1`.
    ///
    /// ```
    /// use knapsack_ga::ga::Individual;
    ///
    /// let ind = Individual::from_bits(&[1, 0, 1]);
    /// assert_eq!(ind.selected_items(), vec![0, 2]);
    /// ```
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Flips gene `index`.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of the items this individual puts in the knapsack.
    pub fn selected_items(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Genes rendered as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Individual {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, &g) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(g))?;
        }
        write!(f, "]")
    }
}
