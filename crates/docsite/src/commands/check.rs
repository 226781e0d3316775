//! `docsite check` command implementation.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use docsite_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (path, site) = SiteConfig::load_or_discover(self.config.as_deref())?;

        output.highlight(site.title());
        for line in summary(&site) {
            output.info(&line);
        }
        for warning in warnings(&site) {
            output.warning(&warning);
        }
        output.success(&format!("Configuration is valid: {}", path.display()));

        Ok(())
    }
}

/// Human-readable summary of a loaded configuration.
fn summary(site: &SiteConfig) -> Vec<String> {
    let theme = site.theme();
    let sidebar_items: usize = theme.sidebar().iter().map(|g| g.items().len()).sum();

    let mut lines = vec![format!("Base path: {}", site.base_path())];
    if !site.description().is_empty() {
        lines.push(format!("Description: {}", site.description()));
    }
    lines.push(format!("Nav entries: {}", theme.nav().len()));
    lines.push(format!(
        "Sidebar: {} groups, {sidebar_items} items",
        theme.sidebar().len()
    ));
    lines.push(format!("Social links: {}", theme.social_links().len()));
    match theme.last_updated() {
        Some(last_updated) => lines.push(format!(
            "Last updated: enabled (e.g. \"{}\")",
            last_updated.render(&Utc::now())
        )),
        None => lines.push("Last updated: disabled".to_owned()),
    }
    lines
}

/// Valid but probably unintended settings.
fn warnings(site: &SiteConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if site.theme().nav().is_empty() {
        warnings.push("No navigation entries configured".to_owned());
    }
    for group in site.theme().sidebar() {
        if group.items().is_empty() {
            warnings.push(format!("Sidebar group \"{}\" has no items", group.text()));
        }
    }
    warnings
}
