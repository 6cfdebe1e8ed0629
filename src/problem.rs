//! Knapsack problem instances.

use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable 0/1 knapsack catalog: one value and one weight per item,
/// plus the weight capacity.
///
/// # Examples
///
/// ```
/// use knapsack_ga::KnapsackInstance;
///
/// let instance = KnapsackInstance::new(vec![60.0, 100.0], vec![10.0, 20.0], 25.0).unwrap();
/// assert_eq!(instance.item_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackInstance {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
}

impl KnapsackInstance {
    /// Builds an instance, checking that `values` and `weights` line up.
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self> {
        let instance = Self {
            values,
            weights,
            capacity,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// The three-item instance used by the demo binary.
    ///
    /// The best feasible selection is items 1 and 2 (value 220, weight 50).
    pub fn classic() -> Self {
        Self {
            values: vec![60.0, 100.0, 120.0],
            weights: vec![10.0, 20.0, 30.0],
            capacity: 50.0,
        }
    }

    /// Checks the catalog invariants.
    ///
    /// Deserialized instances bypass [`new`](Self::new), so the runner calls
    /// this again before a run.
    pub fn validate(&self) -> Result<()> {
        if self.values.len() != self.weights.len() {
            return Err(GaError::LengthMismatch {
                expected: self.values.len(),
                actual: self.weights.len(),
            });
        }
        if self.values.is_empty() {
            return Err(GaError::Configuration(
                "instance must contain at least one item".into(),
            ));
        }
        // Scores must stay non-negative and every weight must compare.
        for (name, column) in [("values", &self.values), ("weights", &self.weights)] {
            if let Some((i, x)) = column
                .iter()
                .enumerate()
                .find(|(_, x)| !is_non_negative(**x))
            {
                return Err(GaError::Configuration(format!(
                    "{name}[{i}] must be finite and non-negative, got {x}"
                )));
            }
        }
        if !is_non_negative(self.capacity) {
            return Err(GaError::Configuration(format!(
                "capacity must be finite and non-negative, got {}",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Number of items in the catalog (gene length of every individual).
    pub fn item_count(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}
