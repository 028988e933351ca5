//! Greeks Profile CLI - Plot Function Values and Finite-Difference Greeks
//!
//! Profiles a built-in function over a spot grid and reports the value,
//! delta, and gamma arrays.
//!
//! # Commands
//!
//! - `greeks-profile profile` - Print the computed arrays as a table
//! - `greeks-profile chart` - Emit a Chart.js-compatible JSON figure
//!
//! # Examples
//!
//! ```text
//! greeks-profile profile --function quadratic --statistic gamma \
//!     --grid-min -2 --grid-max 2 --grid-points 5
//! greeks-profile chart --function bs-call --statistic delta \
//!     --grid-min 50 --grid-max 150 --grid-points 101 --output figure.json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_core::settings::OutputStatistic;

mod commands;
mod error;

pub use error::{CliError, Result};

/// Function profile and greeks plotting CLI
#[derive(Parser)]
#[command(name = "greeks-profile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which built-in function to profile.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FunctionKind {
    /// x squared, with analytic delta 2x
    Quadratic,
    /// Black-Scholes European call price as a function of spot
    BsCall,
}

/// Which statistic to compute.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Statistic {
    /// Function value only
    Value,
    /// Value and first derivative
    Delta,
    /// Value, first, and second derivative
    Gamma,
}

impl From<Statistic> for OutputStatistic {
    fn from(statistic: Statistic) -> Self {
        match statistic {
            Statistic::Value => OutputStatistic::PresentValue,
            Statistic::Delta => OutputStatistic::Delta,
            Statistic::Gamma => OutputStatistic::Gamma,
        }
    }
}

/// Arguments shared by the `profile` and `chart` commands.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Function to profile
    #[arg(short, long, value_enum, default_value = "quadratic")]
    pub function: FunctionKind,

    /// Statistic to compute
    #[arg(short = 't', long, value_enum, default_value = "value")]
    pub statistic: Statistic,

    /// Lower end of the spot grid
    #[arg(long, allow_hyphen_values = true, default_value = "-2.0")]
    pub grid_min: f64,

    /// Upper end of the spot grid
    #[arg(long, allow_hyphen_values = true, default_value = "2.0")]
    pub grid_max: f64,

    /// Number of grid points
    #[arg(long, default_value = "41")]
    pub grid_points: usize,

    /// Finite-differences step width
    #[arg(long, default_value = "1e-4")]
    pub step_width: f64,

    /// Override the configured step width for delta/gamma
    #[arg(long)]
    pub hard_coded_h: Option<f64>,

    /// Use the function's analytic first derivative instead of differencing
    #[arg(long)]
    pub analytic: bool,

    /// Black-Scholes strike (bs-call only)
    #[arg(long, default_value = "100.0")]
    pub strike: f64,

    /// Black-Scholes risk-free rate (bs-call only)
    #[arg(long, allow_hyphen_values = true, default_value = "0.05")]
    pub rate: f64,

    /// Black-Scholes volatility (bs-call only)
    #[arg(long, default_value = "0.2")]
    pub vol: f64,

    /// Black-Scholes expiry in years (bs-call only)
    #[arg(long, default_value = "1.0")]
    pub expiry: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the computed arrays as an aligned table
    Profile {
        #[command(flatten)]
        args: CommonArgs,
    },

    /// Emit a Chart.js-compatible JSON figure
    Chart {
        #[command(flatten)]
        args: CommonArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Profile { args } => commands::profile::run(&args),
        Commands::Chart { args, output } => commands::chart::run(&args, output.as_deref()),
    }
}
