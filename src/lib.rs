//! Generational genetic algorithm for the 0/1 knapsack problem.
//!
//! Given a catalog of items with values and weights and a weight capacity,
//! the search evolves a population of binary item selections toward the
//! subset with the highest total value that still fits.
//!
//! - [`KnapsackInstance`]: the item catalog and capacity
//! - [`ga`]: representation, fitness, selection, variation and the
//!   generational loop
//! - [`GaError`]: configuration and degenerate-state failures
//!
//! The search is heuristic: it may settle on a suboptimal population.
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::KnapsackInstance;
//!
//! let config = GaConfig::default().with_population_size(12).with_seed(7);
//! let result = GaRunner::run(&KnapsackInstance::classic(), &config).unwrap();
//! println!("best {} scores {}", result.best, result.best_fitness);
//! ```

mod error;
pub mod ga;
mod problem;
pub mod random;

pub use error::{GaError, Result};
pub use problem::KnapsackInstance;
