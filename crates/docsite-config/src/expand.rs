//! Environment variable expansion for file-sourced configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;
use crate::raw::RawSiteConfig;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand `title`, `description` and `basePath` in place.
pub(crate) fn expand_site_fields(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    for (value, field) in [
        (&mut raw.title, "title"),
        (&mut raw.description, "description"),
        (&mut raw.base_path, "basePath"),
    ] {
        if let Some(current) = value.as_deref() {
            *value = Some(expand_env(current, field)?);
        }
    }
    Ok(())
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
