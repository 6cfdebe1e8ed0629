//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover/mutation →
//! replacement → repeat for a fixed number of generations.

use super::config::GaConfig;
use super::fitness::{average_fitness, evaluate, is_feasible};
use super::observer::{GenerationObserver, NoopObserver};
use super::operators::{crossover, mutate};
use super::population::initialize;
use super::selection::select_parents;
use super::types::{Individual, Population};
use crate::error::{GaError, Result};
use crate::problem::KnapsackInstance;
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Population statistics for one generation, taken before it is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    pub average_fitness: f64,
    pub best_fitness: f64,
    /// Individuals whose selection fits within capacity.
    pub feasible_count: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Highest-fitness individual of the final population.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics of every generation, in order.
    pub history: Vec<GenerationStats>,

    /// Final population, sorted by fitness descending.
    pub final_population: Population,
}

impl GaResult {
    /// Average fitness of every generation, in order.
    pub fn average_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.average_fitness).collect()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner};
/// use knapsack_ga::KnapsackInstance;
///
/// let instance = KnapsackInstance::classic();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best.len(), 3);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with no progress reporting.
    pub fn run(instance: &KnapsackInstance, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(instance, config, &mut NoopObserver)
    }

    /// Runs the GA, reporting each generation's average fitness to `observer`.
    ///
    /// The generator is seeded once from [`GaConfig::seed`].
    pub fn run_with_observer<O: GenerationObserver>(
        instance: &KnapsackInstance,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(instance, config, &mut rng, observer)
    }

    /// Runs the GA on a caller-owned generator. [`GaConfig::seed`] is ignored.
    pub fn run_with_rng<R: Rng, O: GenerationObserver>(
        instance: &KnapsackInstance,
        config: &GaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<GaResult> {
        config.validate()?;
        instance.validate()?;
        let population = initialize(config.population_size, instance.item_count(), rng);
        Self::evolve(instance, config, population, rng, observer)
    }

    /// Evolves a caller-supplied initial population.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if the population size differs from
    /// `config.population_size`, [`GaError::LengthMismatch`] if any
    /// individual's gene count differs from the instance's item count.
    #[instrument(
        skip_all,
        fields(
            items = instance.item_count(),
            population = config.population_size,
            generations = config.generation_count,
        )
    )]
    pub fn evolve<R: Rng, O: GenerationObserver>(
        instance: &KnapsackInstance,
        config: &GaConfig,
        mut population: Population,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<GaResult> {
        config.validate()?;
        instance.validate()?;
        check_population(&population, instance, config)?;

        info!("starting evolution");
        let mut history = Vec::with_capacity(config.generation_count);

        for gen in 0..config.generation_count {
            let stats = generation_stats(gen + 1, &population, instance, config)?;
            observer.on_generation(stats.generation, stats.average_fitness);
            debug!(
                generation = stats.generation,
                average_fitness = stats.average_fitness,
                best_fitness = stats.best_fitness,
                feasible = stats.feasible_count,
                "generation evaluated"
            );
            history.push(stats);

            population = next_generation(&population, instance, config, rng)?;
        }

        let final_population = rank_by_fitness(population, instance);
        let best = final_population
            .first()
            .cloned()
            .ok_or(GaError::EmptyPopulation)?;
        let best_fitness = evaluate(&best, instance);

        info!(best_fitness, best = %best, "evolution finished");

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.generation_count,
            history,
            final_population,
        })
    }
}

/// Produces the offspring of one selection round: zero, one, or two individuals.
///
/// With probability `reproduction_rate` the parents pass through unchanged.
/// Otherwise crossover fires with probability `crossover_rate`, and then,
/// independently, the children are mutated with probability `mutation_rate`.
///
/// When neither reproduction nor crossover fires the round yields no
/// offspring at all; the mutation draw still happens against the empty set.
/// The generation is filled up by later rounds.
///
/// # Errors
/// [`GaError::Configuration`] if `config` fails [`GaConfig::validate`].
pub fn breed<R: Rng>(
    parents: (Individual, Individual),
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    config.validate()?;
    breed_round(parents, config, rng)
}

/// [`breed`] without the configuration check.
fn breed_round<R: Rng>(
    parents: (Individual, Individual),
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if rng.random_bool(config.reproduction_rate) {
        return Ok(vec![parents.0, parents.1]);
    }

    let mut children = Vec::with_capacity(2);
    if rng.random_bool(config.crossover_rate) {
        let (c1, c2) = crossover(&parents.0, &parents.1)?;
        children.push(c1);
        children.push(c2);
    }
    if rng.random_bool(config.mutation_rate) {
        mutate(&mut children, config.mutation_rate, rng)?;
    }
    Ok(children)
}

/// Builds the next population from `current`.
///
/// The last round may overshoot by one child; the excess is dropped.
///
/// # Errors
/// [`GaError::Configuration`] if `config` fails [`GaConfig::validate`]
/// (which also rules out configurations where no round can ever produce
/// offspring) or `current` is too small for tournament selection.
pub fn next_generation<R: Rng>(
    current: &[Individual],
    instance: &KnapsackInstance,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population> {
    config.validate()?;
    let mut next = Vec::with_capacity(config.population_size + 1);
    while next.len() < config.population_size {
        let parents = select_parents(current, instance, rng)?;
        next.extend(breed_round(parents, config, rng)?);
    }
    next.truncate(config.population_size);
    Ok(next)
}

fn generation_stats(
    generation: usize,
    population: &[Individual],
    instance: &KnapsackInstance,
    config: &GaConfig,
) -> Result<GenerationStats> {
    let average_fitness = population_average(population, instance, config)?;
    let best_fitness = population
        .iter()
        .map(|ind| evaluate(ind, instance))
        .fold(0.0, f64::max);
    let feasible_count = population
        .iter()
        .filter(|ind| is_feasible(ind, instance))
        .count();
    Ok(GenerationStats {
        generation,
        average_fitness,
        best_fitness,
        feasible_count,
    })
}

#[cfg(feature = "parallel")]
fn population_average(
    population: &[Individual],
    instance: &KnapsackInstance,
    config: &GaConfig,
) -> Result<f64> {
    if config.parallel {
        super::fitness::par_average_fitness(population, instance)
    } else {
        average_fitness(population, instance)
    }
}

#[cfg(not(feature = "parallel"))]
fn population_average(
    population: &[Individual],
    instance: &KnapsackInstance,
    _config: &GaConfig,
) -> Result<f64> {
    average_fitness(population, instance)
}

fn check_population(
    population: &[Individual],
    instance: &KnapsackInstance,
    config: &GaConfig,
) -> Result<()> {
    if population.len() != config.population_size {
        return Err(GaError::Configuration(format!(
            "initial population has {} individuals, expected {}",
            population.len(),
            config.population_size
        )));
    }
    if let Some(bad) = population
        .iter()
        .find(|ind| ind.len() != instance.item_count())
    {
        return Err(GaError::LengthMismatch {
            expected: instance.item_count(),
            actual: bad.len(),
        });
    }
    Ok(())
}

/// Stable sort by fitness, highest first.
fn rank_by_fitness(population: Population, instance: &KnapsackInstance) -> Population {
    let mut scored: Vec<(f64, Individual)> = population
        .into_iter()
        .map(|ind| (evaluate(&ind, instance), ind))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, ind)| ind).collect()
}

// ============================================================================
// Tests
// ============================================================================
