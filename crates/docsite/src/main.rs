//! docsite CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Validate the site configuration and print a summary
//! - `dump`: Print the normalized configuration as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs};
use output::Output;

/// docsite - documentation site configuration.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (show discovery and load logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Print the normalized site configuration as JSON.
    Dump(DumpArgs),
}

/// Log filter: --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Dump(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["docsite", "check", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(log_filter(false).to_string(), "warn");
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_dump_accepts_config_path() {
        let cli = Cli::try_parse_from(["docsite", "dump", "-c", "site/docsite.yaml"]).unwrap();
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Dump(_)));
    }
}
