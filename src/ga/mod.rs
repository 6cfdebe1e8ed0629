//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Individuals are binary selection vectors over the item catalog. Each
//! generation is scored, parents are drawn by a double binary tournament,
//! offspring come from reproduction, midpoint crossover and bit-flip
//! mutation, and the whole population is replaced.
//!
//! # Key Types
//!
//! - [`Individual`]: a candidate item selection
//! - [`GaConfig`]: rates, population size, generation count, seed
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best individual plus per-generation statistics
//!
//! # Building Blocks
//!
//! - [`evaluate`] / [`average_fitness`]: fitness with a zero penalty for
//!   over-capacity selections
//! - [`initialize`]: random starting population
//! - [`select_parents`]: tournament selection over a pool of four
//! - [`crossover`] / [`mutate`]: variation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod observer;
mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
#[cfg(feature = "parallel")]
pub use fitness::par_average_fitness;
pub use fitness::{average_fitness, evaluate, is_feasible, total_value, total_weight};
pub use observer::{ConsoleReporter, GenerationObserver, NoopObserver};
pub use operators::{crossover, mutate};
pub use population::{initialize, random_individual};
pub use runner::{breed, next_generation, GaResult, GaRunner, GenerationStats};
pub use selection::{draw_pool, select_parent_indices, select_parents, TOURNAMENT_POOL};
pub use types::{Individual, Population};
