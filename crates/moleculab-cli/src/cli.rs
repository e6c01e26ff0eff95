use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Moleculab Developers",
    version,
    about = "Moleculab CLI - Run scripted molecular sandbox scenarios and inspect element catalogs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a workspace from a scenario file and run the simulation for a fixed number of ticks.
    Run(RunArgs),
    /// Validate a catalog file (or the built-in catalog) and print its tables.
    Catalog(CatalogArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the scenario file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub scenario: PathBuf,

    /// Path to a catalog override file. Defaults to the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Simulation Overrides ---
    /// Number of ticks to simulate.
    #[arg(short = 'n', long, value_name = "N")]
    pub ticks: Option<u64>,

    /// Wall-clock seconds per tick, before time scaling.
    #[arg(long, value_name = "SECONDS")]
    pub dt: Option<f64>,

    /// Bath temperature in Kelvin.
    #[arg(short = 'T', long, value_name = "K")]
    pub temperature: Option<f64>,

    /// Multiplier applied to every tick's elapsed time.
    #[arg(long, value_name = "X")]
    pub time_scale: Option<f64>,

    /// Seed for velocity initialization. Unseeded runs draw from OS entropy.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    // --- Output ---
    /// Write the final snapshot as JSON to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the per-tick energy trace as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Set a specific configuration value, overriding the scenario file.
    /// Can be used multiple times. Example: -S simulation.temperature=350
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Path to a catalog override file. Defaults to the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}
