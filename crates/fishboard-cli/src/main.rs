use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fishboard_core::equations::DifferenceModel;
use fishboard_core::fish::{Predator, Prey};
use fishboard_core::placement::Placement;
use fishboard_core::{simulate, BoardConfig, RunSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fishboard")]
#[command(about = "Agent-based spatial predator-prey simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the population trajectory
    Run {
        /// Path to a config file (JSON); defaults apply for missing fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of time steps to simulate
        #[arg(long, default_value_t = 128)]
        steps: usize,

        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON run summary to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Iterate the closed-form difference-equation companion model
    Equations {
        /// Path to a config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of time steps to iterate
        #[arg(long, default_value_t = 128)]
        steps: usize,
    },
    /// Estimate the predator/prey overlap probability by Monte Carlo
    MeasureOverlap {
        /// Path to a config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of predator/prey pairs to place
        #[arg(long, default_value_t = 1_000_000)]
        samples: u64,
    },
    /// Dump the default configuration to stdout
    DumpDefaultConfig,
}

fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    let config = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => BoardConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(config: BoardConfig, steps: usize, out: Option<&Path>) -> Result<()> {
    let records = simulate(config.clone(), steps)?;

    println!("step  prey  predators  eaten  prey_survivors  predator_survivors");
    for record in &records {
        println!(
            "{:>4}  {:>4}  {:>9}  {:>5}  {:>14}  {:>18}",
            record.step,
            record.prey_spawned,
            record.predators_spawned,
            record.prey_eaten,
            record.prey_survivors,
            record.predator_survivors,
        );
    }

    if let Some(path) = out {
        let summary = RunSummary::new(config, records);
        let file = File::create(path)
            .with_context(|| format!("failed to create summary {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)
            .context("failed to write summary")?;
        log::info!("wrote run summary to {}", path.display());
    }
    Ok(())
}

fn equations(config: &BoardConfig, steps: usize) -> Result<()> {
    let model = DifferenceModel::from_config(config);
    let start = (
        f64::from(config.starting_prey),
        f64::from(config.starting_predators),
    );
    println!("step  prey  predators");
    for (step, (prey, predators)) in model.iterate(start, steps).iter().enumerate() {
        println!("{step:>4}  {prey:>8.2}  {predators:>9.2}");
    }
    Ok(())
}

fn measure_overlap(config: &BoardConfig, samples: u64) -> Result<()> {
    let prey_placement = Placement::new(config.arena, config.prey_size)
        .context("prey do not fit the arena")?;
    let predator_placement = Placement::new(config.arena, config.predator_size)
        .context("predators do not fit the arena")?;
    let mut rng = ChaCha12Rng::seed_from_u64(config.seed);

    let mut overlaps = 0u64;
    for _ in 0..samples {
        let predator = Predator::at(predator_placement.sample(&mut rng), config.predator_size);
        let prey = Prey::at(prey_placement.sample(&mut rng), config.prey_size);
        if predator.touches(&prey) {
            overlaps += 1;
        }
    }

    let measured = overlaps as f64 / samples as f64;
    let geometric = DifferenceModel::from_config(config).prey_predator_overlap();
    println!("measured:  {measured:.6}");
    println!("geometric: {geometric:.6}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            steps,
            seed,
            out,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            run(config, steps, out.as_deref())
        }
        Commands::Equations { config, steps } => {
            let config = load_config(config.as_deref())?;
            equations(&config, steps)
        }
        Commands::MeasureOverlap { config, samples } => {
            let config = load_config(config.as_deref())?;
            measure_overlap(&config, samples)
        }
        Commands::DumpDefaultConfig => {
            let json = serde_json::to_string_pretty(&BoardConfig::default())
                .context("failed to serialize default config")?;
            println!("{json}");
            Ok(())
        }
    }
}
