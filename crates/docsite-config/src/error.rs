//! Configuration errors.

use std::path::PathBuf;

/// Configuration error.
///
/// Validation variants carry the dotted path of the offending field
/// (e.g. `theme.sidebar[0].items[2].link`), available via [`ConfigError::field`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("{field} is required")]
    MissingField {
        /// Path of the missing field.
        field: String,
    },
    /// A link failed the internal-path or absolute-URL rule.
    #[error("{field} has invalid link {link:?}: {reason}")]
    InvalidLink {
        /// Path of the link field.
        field: String,
        /// Offending link value.
        link: String,
        /// Why the link was rejected.
        reason: &'static str,
    },
    /// A text field is empty or whitespace-only.
    #[error("{field} cannot be empty")]
    EmptyText {
        /// Path of the text field.
        field: String,
    },
    /// A social link icon is not in the recognized set.
    #[error("{field} has unknown icon {icon:?}")]
    UnknownIcon {
        /// Path of the icon field.
        field: String,
        /// Offending icon identifier.
        icon: String,
    },
    /// `basePath` does not start and end with `/`.
    #[error("basePath {value:?} must start and end with '/'")]
    InvalidBasePath {
        /// Offending base path.
        value: String,
    },
    /// Raw input does not have the expected shape.
    #[error("Malformed configuration: {0}")]
    Malformed(String),
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// File extension is not one of the supported formats.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`basePath`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

impl ConfigError {
    /// Path of the offending field, for validation errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidLink { field, .. }
            | Self::EmptyText { field }
            | Self::UnknownIcon { field, .. }
            | Self::EnvVar { field, .. } => Some(field.as_str()),
            Self::InvalidBasePath { .. } => Some("basePath"),
            _ => None,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_for_validation_errors() {
        let err = ConfigError::InvalidLink {
            field: "theme.nav[0].link".to_owned(),
            link: "guide".to_owned(),
            reason: "must start with '/'",
        };
        assert_eq!(err.field(), Some("theme.nav[0].link"));

        let err = ConfigError::InvalidBasePath {
            value: "docs".to_owned(),
        };
        assert_eq!(err.field(), Some("basePath"));
    }

    #[test]
    fn test_field_path_absent_for_io_errors() {
        let err = ConfigError::NotFound(PathBuf::from("/missing/docsite.toml"));
        assert!(err.field().is_none());
        assert!(err.to_string().contains("/missing/docsite.toml"));
    }

    #[test]
    fn test_display_names_field() {
        let err = ConfigError::missing("title");
        assert_eq!(err.to_string(), "title is required");

        let err = ConfigError::UnknownIcon {
            field: "theme.socialLinks[1].icon".to_owned(),
            icon: "myspace".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "theme.socialLinks[1].icon has unknown icon \"myspace\""
        );
    }
}
