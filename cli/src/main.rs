//! Automapper CLI - Main entry point
//!
//! This is the main binary for the automapper-cli tool.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use automapper_cli::config::Config;
use automapper_cli::error::CliError;
use automapper_types::ParamStyle;

/// Automapper - MyBatis mapper statements for Oracle tables
#[derive(Parser, Debug)]
#[command(name = "automapper")]
#[command(author, version, about = "MyBatis mapper statements for Oracle tables", long_about = None)]
struct Cli {
    /// Path to config file (default: automapper.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog file or glob, overriding the config
    #[arg(long, global = true, env = "AUTOMAPPER_CATALOG", value_name = "PATH")]
    catalog: Option<String>,

    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print SELECT/INSERT/UPDATE/DELETE statements for a table
    Generate {
        /// Table name (prompted for when omitted)
        table: Option<String>,

        /// Guard UPDATE assignments with <if> tests (default: on)
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        if_update: Option<bool>,

        /// Guard primary key predicates with <if> tests (default: off)
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        if_where: Option<bool>,

        /// Parameter style (model or hashmap)
        #[arg(long, value_parser = parse_param_type)]
        param_type: Option<ParamStyle>,
    },

    /// List tables in the catalog
    Tables {
        /// Only tables whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Validate configuration and catalog
    Check,
}

/// Parse parameter type argument
fn parse_param_type(s: &str) -> Result<ParamStyle, String> {
    s.parse().map_err(|e: automapper_types::ParamStyleParseError| e.to_string())
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?.with_catalog(cli.catalog);

    match cli.command {
        Command::Generate {
            table,
            if_update,
            if_where,
            param_type,
        } => automapper_cli::commands::generate::run(
            &config, table, if_update, if_where, param_type,
        ),
        Command::Tables { filter } => {
            automapper_cli::commands::tables::run(&config, filter.as_deref())
        }
        Command::Check => automapper_cli::commands::check::run(&config),
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
