//! Exemplar Dynamics Simulator
//!
//! Runs the external and competitive update experiments on singleton and
//! geminate closure-duration pools and writes the final pools as a JSON report
//! for plotting.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use exemplar_core::output::{build_report, mean_gap, write_report};
use exemplar_core::{default_config_toml, Config, InitialPoolPolicy, SimulationDriver};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "exemplar_sim")]
#[command(about = "Singleton/geminate exemplar dynamics under external and competitive updating")]
struct Args {
    /// Path to configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = exemplar_core::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of update iterations per experiment (overrides the config file)
    #[arg(long)]
    iterations: Option<u64>,

    /// Starting pools for the competitive experiment: independent or shared
    #[arg(long)]
    initial_pools: Option<InitialPoolPolicy>,

    /// Report output path (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Could not install log subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    setup_logging(args.verbose);

    let mut config = if args.config.exists() {
        match Config::from_file(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        Config::load_or_default(&args.config)
    };

    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(iterations) = args.iterations {
        config.parameters = config.parameters.with_iterations(iterations);
    }
    if let Some(policy) = args.initial_pools {
        config.simulation.initial_pools = policy;
    }
    if let Some(output) = args.output {
        config.simulation.output = output;
    }

    let params = config.parameters;
    let seed = config.simulation.seed;

    println!("Exemplar Dynamics Simulator");
    println!("===========================");
    println!("Seed: {}", seed);
    println!("Iterations: {}", params.iterations);
    println!("Pool size: {} (sample size {})", params.pool_size, params.sample_size);
    println!(
        "Singleton mean: {} ms, geminate mean: {} ms, sd: {} ms",
        params.singleton_mean, params.geminate_mean, params.std_dev
    );
    println!("Noise half-width: {} ms", params.noise_half_width);
    println!("Initial pools: {}", config.simulation.initial_pools);
    println!();

    let mut driver = match SimulationDriver::from_seed(params, config.simulation.initial_pools, seed) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match driver.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Initial:     singleton {:>7.2} ms, geminate {:>7.2} ms (gap {:.2})",
        outcome.initial_singleton.mean(),
        outcome.initial_geminate.mean(),
        mean_gap(&outcome.initial_singleton, &outcome.initial_geminate)
    );
    println!(
        "External:    singleton {:>7.2} ms, geminate {:>7.2} ms (gap {:.2})",
        outcome.external_singleton.mean(),
        outcome.external_geminate.mean(),
        mean_gap(&outcome.external_singleton, &outcome.external_geminate)
    );
    println!(
        "Competitive: singleton {:>7.2} ms, geminate {:>7.2} ms (gap {:.2}, {} traded)",
        outcome.competitive_singleton.mean(),
        outcome.competitive_geminate.mean(),
        mean_gap(&outcome.competitive_singleton, &outcome.competitive_geminate),
        outcome.trades.traded()
    );

    let report = build_report(&outcome, &params, seed);
    let path = &config.simulation.output;
    if let Err(e) = write_report(&report, path) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    println!();
    println!("Wrote report {} to {}", report.run_id, path.display());
    ExitCode::SUCCESS
}
