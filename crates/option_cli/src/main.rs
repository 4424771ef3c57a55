//! option-pricer CLI - Black-Scholes pricing from the command line
//!
//! # Commands
//!
//! - `option-pricer price` - Price a single European call/put pair
//! - `option-pricer batch --input <file>` - Price every row of a CSV file

use std::path::Path;

use clap::{Parser, Subcommand};
use option_cli::commands;
use option_cli::config::CliConfig;
use option_cli::Result;
use option_pricer::OptionInputs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes-Merton European option pricer
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "option-pricer.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract
    Price {
        /// Spot price of the underlying (S)
        #[arg(long, allow_negative_numbers = true)]
        spot: f64,

        /// Strike price (K)
        #[arg(long, allow_negative_numbers = true)]
        strike: f64,

        /// Time to expiry in years (T)
        #[arg(long, allow_negative_numbers = true)]
        expiry: f64,

        /// Risk-free rate (r), e.g. 0.05
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        /// Annualised volatility (sigma), e.g. 0.2
        #[arg(long, allow_negative_numbers = true)]
        volatility: f64,

        /// Continuous dividend yield (q)
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        dividend_yield: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Price every row of a CSV file
    Batch {
        /// Path to the input CSV file
        #[arg(short, long)]
        input: String,

        /// Name used for the output file instead of the input file name
        #[arg(long)]
        original_name: Option<String>,

        /// Output directory (defaults to the configured output_dir)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config))?.with_env_override()?;
    config.validate()?;

    init_tracing(cli.verbose, &config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
            format,
        } => {
            let inputs = OptionInputs::new(spot, strike, expiry, rate, volatility)
                .with_dividend_yield(dividend_yield);
            let outcome = commands::price::run(&inputs, &format, &config)?;
            print!("{}", outcome.report);
            if !outcome.report.ends_with('\n') {
                println!();
            }
            outcome.ensure_success()
        }
        Commands::Batch {
            input,
            original_name,
            output_dir,
            format,
        } => {
            let summary = commands::batch::run(
                &input,
                original_name.as_deref(),
                output_dir.as_deref(),
                &format,
                &config,
            )?;
            println!("{}", summary.output_path.display());
            println!(
                "{} rows priced ({} succeeded, {} failed)",
                summary.rows, summary.succeeded, summary.failed
            );
            Ok(())
        }
    }
}
