//! Loading configuration from files.
//!
//! The format is picked from the file extension. A source may hold several
//! definitions (a YAML stream with `---` separators); the last one replaces
//! the earlier ones wholesale, without merging.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::expand::expand_site_fields;
use crate::raw::RawSiteConfig;
use crate::{ConfigError, SiteConfig};

/// Configuration filenames to search for, in order of preference.
pub const CONFIG_FILENAMES: [&str; 4] = [
    "docsite.toml",
    "docsite.yaml",
    "docsite.yml",
    "docsite.json",
];

/// Configuration source format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse every configuration document in `content`.
fn parse_documents(content: &str, format: Format) -> Result<Vec<Value>, ConfigError> {
    match format {
        Format::Toml => Ok(vec![toml::from_str(content)?]),
        Format::Json => Ok(vec![serde_json::from_str(content)?]),
        Format::Yaml => {
            let mut documents = Vec::new();
            for document in serde_yaml::Deserializer::from_str(content) {
                let value = Value::deserialize(document)?;
                if !value.is_null() {
                    documents.push(value);
                }
            }
            Ok(documents)
        }
    }
}

/// Pick the effective definition: last write wins.
fn last_definition(documents: Vec<Value>) -> Result<Value, ConfigError> {
    let count = documents.len();
    if count > 1 {
        tracing::debug!(
            definitions = count,
            "Multiple configuration definitions, using the last one"
        );
    }
    documents
        .into_iter()
        .last()
        .ok_or_else(|| ConfigError::Malformed("no configuration definition found".to_owned()))
}

impl SiteConfig {
    /// Parse and validate configuration text in the given format.
    ///
    /// `title`, `description` and `basePath` support `${VAR}` and
    /// `${VAR:-default}` environment expansion.
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let value = last_definition(parse_documents(content, format)?)?;
        let mut raw: RawSiteConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        expand_site_fields(&mut raw)?;
        raw.validate()
    }

    /// Load configuration from a specific file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let format =
            Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;

        tracing::info!(
            path = %path.display(),
            nav = config.theme.nav.len(),
            sidebar_groups = config.theme.sidebar.len(),
            social_links = config.theme.social_links.len(),
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Load from `config_path`, or discover a config file from the current
    /// directory upwards when no path is given.
    ///
    /// Returns the file the configuration was read from alongside it.
    pub fn load_or_discover(config_path: Option<&Path>) -> Result<(PathBuf, Self), ConfigError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::discover()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAMES[0])))?,
        };
        let config = Self::from_path(&path)?;
        Ok((path, config))
    }

    /// Search for a config file in the current directory and parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        discover_from(&cwd)
    }
}

/// Search for a config file in `start` and its parents.
#[must_use]
pub fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILENAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}
