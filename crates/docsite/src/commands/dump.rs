//! `docsite dump` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the dump command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl DumpArgs {
    /// Execute the dump command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or written.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (_, site) = SiteConfig::load_or_discover(self.config.as_deref())?;

        let json = if self.compact {
            serde_json::to_string(&site)?
        } else {
            serde_json::to_string_pretty(&site)?
        };
        output.data(&json)?;

        Ok(())
    }
}
