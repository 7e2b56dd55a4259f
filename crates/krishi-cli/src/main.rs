mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use config::Config;
use krishi_core::error::KrishiError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "krishi",
    version,
    about = "Spray dosage calculator and field advisories for farmers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate concentrate and water for spraying a field
    Dose {
        /// Crop identifier (e.g., rice, wheat)
        #[arg(short, long)]
        crop: String,

        /// Substance name; partial names are accepted
        #[arg(short, long)]
        substance: String,

        /// Field size
        #[arg(long = "size", value_name = "N", allow_hyphen_values = true)]
        size: String,

        /// Area unit: acre or hectare (default from config, else acre)
        #[arg(short, long)]
        unit: Option<String>,

        /// Custom JSON dosage table
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,

        /// Show how the dosage was computed
        #[arg(long)]
        verbose: bool,
    },
    /// Inspect and validate dosage tables
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Show the seasonal advisory
    Advisory {
        /// Month number 1-12 (default: current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Get a recommendation for an observed crop issue (leaf, pest, yellow)
    Issue {
        /// Observed issue
        issue: String,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// List crops and their substances
    List {
        /// Custom JSON dosage table
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,
    },
    /// Show all rates for one crop
    Explain {
        /// Crop identifier (e.g., "rice")
        crop: String,

        /// Custom JSON dosage table
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom dosage table
    Validate {
        /// Path to JSON table file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a command. The config is loaded only by commands that read it, so
/// a broken config file never blocks `config path`, `table schema` or `table validate`.
fn run<L>(cli: Cli, load_config: L) -> Result<(), KrishiError>
where
    L: FnOnce() -> Result<Config, KrishiError>,
{
    match cli.command {
        Commands::Dose {
            crop,
            substance,
            size,
            unit,
            table,
            output,
            verbose,
        } => commands::dose::run(
            commands::dose::DoseArgs {
                crop,
                substance,
                size,
                unit,
                table,
                output,
                verbose,
            },
            &load_config()?,
        ),
        Commands::Table { action } => match action {
            TableAction::List { table } => commands::table::list(table, &load_config()?),
            TableAction::Explain { crop, table } => {
                commands::table::explain(&crop, table, &load_config()?)
            }
            TableAction::Schema => commands::table::schema(),
            TableAction::Validate { file } => commands::table::validate(&file),
        },
        Commands::Advisory { month, output } => {
            commands::advisory::season(month, output, &load_config()?)
        }
        Commands::Issue { issue, output } => {
            commands::advisory::issue(&issue, output, &load_config()?)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&load_config()?),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

/// Extra line printed under user-input errors.
fn hint(err: &KrishiError) -> Option<&'static str> {
    match err {
        KrishiError::UnknownCrop { .. } => {
            Some("Run `krishi table list` to see the supported crops.")
        }
        KrishiError::Validation { .. } => Some("Check the input and try again."),
        _ => None,
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli, Config::load) {
        eprintln!("Error: {e}");
        if e.is_user_error() {
            if let Some(hint) = hint(&e) {
                eprintln!("Hint: {hint}");
            }
        }
        std::process::exit(1);
    }
}
