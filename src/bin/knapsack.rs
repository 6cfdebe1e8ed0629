//! Knapsack GA demo binary: runs the built-in instance and prints progress.

use clap::Parser;
use knapsack_ga::ga::{ConsoleReporter, GaConfig, GaRunner};
use knapsack_ga::KnapsackInstance;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Solve the classic three-item knapsack with a genetic algorithm")]
struct Args {
    /// Random seed (omit for a random run)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generations
    #[arg(short, long, default_value = "500")]
    generations: usize,

    /// Individuals per generation
    #[arg(short, long, default_value = "4")]
    population: usize,

    /// Logging level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let instance = KnapsackInstance::classic();
    let mut config = GaConfig::default()
        .with_generation_count(args.generations)
        .with_population_size(args.population);
    config.seed = args.seed;

    let mut reporter = ConsoleReporter::stdout();
    let result = match GaRunner::run_with_observer(&instance, &config, &mut reporter) {
        Ok(result) => result,
        Err(e) => {
            error!("Search failed: {}", e);
            return Err(e.into());
        }
    };

    info!(items = ?result.best.selected_items(), "Search complete");
    println!("Best individual: {} (fitness {})", result.best, result.best_fitness);
    Ok(())
}
