use clap::Parser;
use pipebird::{Config, EvolutionTarget, Simulation};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Evolve a flock headlessly and report how far it got
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    population: Option<usize>,

    /// Ticks per frame
    #[arg(long)]
    speed: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop once this generation has started
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Stop early once any bird survives this many ticks
    #[arg(long)]
    target_score: Option<u64>,

    /// Give up after this many ticks in total
    #[arg(long, default_value_t = 10_000_000)]
    max_ticks: u64,
}

fn config(args: &Args) -> pipebird::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(population) = args.population {
        config.population_size = population;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> pipebird::Result<()> {
    let mut sim = Simulation::new(config(args)?)?;

    let target = match args.target_score {
        Some(score) => EvolutionTarget::Score(score),
        None => EvolutionTarget::Generation(args.generations),
    };
    let met = sim.run_until(target, args.max_ticks)?;

    let snapshot = sim.snapshot();
    if met {
        println!("target met in gen {}", snapshot.generation);
    } else {
        println!("gave up in gen {}", snapshot.generation);
    }
    println!("all-time high score: {}", snapshot.high_score);
    for stats in sim.population().history().iter().rev().take(5) {
        println!(
            "gen {}: best {} mean {:.1}",
            stats.generation, stats.best_score, stats.mean_score
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
