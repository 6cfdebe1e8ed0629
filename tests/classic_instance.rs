//! End-to-end runs against the classic three-item instance.

use knapsack_ga::ga::{evaluate, ConsoleReporter, GaConfig, GaRunner, Individual};
use knapsack_ga::random::create_rng;
use knapsack_ga::{GaError, KnapsackInstance};

#[test]
fn default_config_finds_a_good_selection_across_seeds() {
    let instance = KnapsackInstance::classic();
    let mut hits = 0;
    let seeds = 0..20u64;
    let runs = seeds.clone().count();
    for seed in seeds {
        let config = GaConfig::default().with_seed(seed);
        let result = GaRunner::run(&instance, &config).unwrap();
        assert_eq!(result.best.len(), 3);
        assert_eq!(result.best_fitness, evaluate(&result.best, &instance));
        if result.best_fitness >= 160.0 {
            hits += 1;
        }
    }
    // Four individuals with no elitism can drift away from good selections.
    assert!(hits * 4 >= runs, "only {hits}/{runs} runs reached 160");
}

#[test]
fn larger_population_always_reaches_160() {
    let instance = KnapsackInstance::classic();
    for seed in 0..10u64 {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_seed(seed);
        let result = GaRunner::run(&instance, &config).unwrap();
        assert!(
            result.best_fitness >= 160.0,
            "seed {seed}: best fitness {}",
            result.best_fitness
        );
    }
}

#[test]
fn same_seed_same_run() {
    let instance = KnapsackInstance::classic();
    let config = GaConfig::default().with_seed(2024);
    let a = GaRunner::run(&instance, &config).unwrap();
    let b = GaRunner::run(&instance, &config).unwrap();
    assert_eq!(a.average_fitness_history(), b.average_fitness_history());
    assert_eq!(a.best, b.best);
}

#[test]
fn external_rng_matches_seeded_config() {
    let instance = KnapsackInstance::classic();
    let config = GaConfig::default().with_generation_count(50).with_seed(17);
    let seeded = GaRunner::run(&instance, &config).unwrap();

    let mut rng = create_rng(17);
    let mut observer = |_: usize, _: f64| {};
    let external = GaRunner::run_with_rng(&instance, &config, &mut rng, &mut observer).unwrap();

    assert_eq!(seeded.average_fitness_history(), external.average_fitness_history());
    assert_eq!(seeded.best, external.best);
}

#[test]
fn console_progress_has_one_block_per_generation() {
    let instance = KnapsackInstance::classic();
    let config = GaConfig::default().with_generation_count(5).with_seed(1);
    let mut reporter = ConsoleReporter::new(Vec::new());
    GaRunner::run_with_observer(&instance, &config, &mut reporter).unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    for (i, pair) in lines.chunks(2).enumerate() {
        assert!(pair[0].starts_with(&format!("Generation {}: Average Fitness = ", i + 1)));
        assert_eq!(pair[1], "-".repeat(50));
    }
}

#[test]
fn custom_instance_is_swappable() {
    // Item 0 never fits; the best feasible selection is items 1 and 2 (value 12).
    let instance = KnapsackInstance::new(vec![10.0, 5.0, 7.0, 1.0], vec![100.0, 1.0, 2.0, 1.0], 3.0)
        .unwrap();
    let config = GaConfig::default()
        .with_population_size(16)
        .with_generation_count(200)
        .with_seed(4);
    let result = GaRunner::run(&instance, &config).unwrap();
    assert_eq!(result.best.len(), 4);
    assert!(!result.best.genes()[0] || result.best_fitness == 0.0);
    assert!(result.best_fitness <= 12.0);
}

#[test]
fn mismatched_instance_is_rejected() {
    assert!(matches!(
        KnapsackInstance::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], 5.0),
        Err(GaError::LengthMismatch { .. })
    ));
}

#[test]
fn tiny_population_is_a_configuration_error() {
    let config = GaConfig::default().with_population_size(3);
    let err = GaRunner::run(&KnapsackInstance::classic(), &config).unwrap_err();
    assert!(matches!(err, GaError::Configuration(_)));
    assert!(err.to_string().starts_with("ConfigurationError"));
}

#[test]
fn optimum_is_a_fixed_point_of_reproduction_only_runs() {
    let instance = KnapsackInstance::classic();
    let config = GaConfig::default()
        .with_reproduction_rate(1.0)
        .with_generation_count(20);
    let population = vec![Individual::from_bits(&[0, 1, 1]); 4];
    let mut rng = create_rng(0);
    let mut observer = |_: usize, avg: f64| assert_eq!(avg, 220.0);
    let result = GaRunner::evolve(&instance, &config, population, &mut rng, &mut observer).unwrap();
    assert_eq!(result.best_fitness, 220.0);
}
