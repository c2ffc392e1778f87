use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use library_catalog::{Library, LibraryReport, SimulationConfig, run_simulation, seeded_rng};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the library catalogue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every library event
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run to perform
    #[command(subcommand)]
    command: Command,
}

/// Available runs
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a random workload against a fresh library
    Simulate {
        /// Number of random events, overrides the config file
        #[arg(long)]
        steps: Option<u32>,

        /// Seed for a reproducible run, overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file with simulation settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final catalogue as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a default simulation and print the catalogue report
    Report {
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Install the fmt subscriber; `RUST_LOG` wins over the default level
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Run a simulation on a new library and print its summary
fn simulate(config: &SimulationConfig) -> Library {
    let mut library = Library::new(&config.library_name);
    let mut rng = seeded_rng(config.seed);
    let summary = run_simulation(&mut library, config, &mut rng);

    println!("{}", "Simulation summary".yellow().bold());
    println!(
        "  steps: {}, added: {} (rejected {}), removed: {}",
        summary.steps, summary.added, summary.rejected_adds, summary.removed
    );
    println!(
        "  borrows: {} (refused {}), returns: {}, damaged: {}, searches: {}",
        summary.borrows, summary.refused_borrows, summary.returns, summary.damaged, summary.searches
    );
    println!("  books on shelf: {}\n", summary.final_size);
    library
}

/// Print the catalogue as text or JSON
fn print_report(library: &Library, current_year: i32, json: bool) -> Result<()> {
    let report = LibraryReport::new(library, current_year);
    if json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        println!("{}", "Catalogue".yellow().bold());
        print!("{report}");
    }
    Ok(())
}

/// Parse arguments, set up logging and dispatch the chosen run
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("{}", "Library Catalogue".green().bold());
    println!("=====================================\n");

    match args.command {
        Command::Simulate { steps, seed, config, json } => {
            let mut config = match config {
                Some(path) => SimulationConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SimulationConfig::default(),
            };
            config.steps = steps.unwrap_or(config.steps);
            config.seed = seed.or(config.seed);

            let library = simulate(&config);
            if json {
                print_report(&library, config.current_year, true)?;
            } else {
                println!("{}", library.show());
            }
        }
        Command::Report { seed, json } => {
            let config = SimulationConfig { seed, ..SimulationConfig::default() };
            let library = simulate(&config);
            print_report(&library, config.current_year, json)?;
        }
    }

    println!("\n{}", "Done.".green().bold());
    Ok(())
}
