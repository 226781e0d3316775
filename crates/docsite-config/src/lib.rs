//! Site configuration for docsite documentation websites.
//!
//! Describes site metadata, the top navigation bar, the sidebar tree, social
//! links and "last updated" timestamp formatting. The rendering engine consumes
//! the validated [`SiteConfig`]; this crate only loads, validates and
//! normalizes it.
//!
//! ## Loading
//!
//! [`load`] turns an unvalidated structure into a [`SiteConfig`]. It is pure:
//! no I/O, no environment access. [`SiteConfig::from_path`] and
//! [`SiteConfig::load_or_discover`] read `docsite.toml`, `docsite.yaml` or
//! `docsite.json` files and expand `${VAR}` references in `title`,
//! `description` and `basePath` before validating.
//!
//! ## Defaults
//!
//! - `description` defaults to an empty string
//! - `theme`, `theme.nav`, `theme.sidebar` and `theme.socialLinks` default to empty
//! - `theme.lastUpdated.formatOptions` defaults to `{dateStyle: full, timeStyle: medium}`
//! - an absent `theme.lastUpdated` disables the label ([`ThemeConfig::last_updated`] is `None`)
//!
//! Entries marked `enabled: false` are dropped. List order is preserved.
//!
//! ```
//! use serde_json::json;
//!
//! let config = docsite_config::load(json!({
//!     "title": "Mango SQL",
//!     "basePath": "/mango-sql/",
//!     "theme": {
//!         "nav": [{ "text": "Home", "link": "/" }],
//!         "socialLinks": [{ "icon": "github", "link": "https://github.com/kefniark/mango-sql" }]
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(config.description(), "");
//! assert!(config.theme().last_updated().is_none());
//! assert_eq!(config.with_base("/getting-started/"), "/mango-sql/getting-started/");
//! ```

mod error;
mod expand;
mod last_updated;
mod model;
mod raw;
mod source;

pub use error::ConfigError;
pub use last_updated::{FormatOptions, FormatStyle, LastUpdatedConfig};
pub use model::{
    NavItem, SidebarGroup, SidebarItem, SiteConfig, SocialIcon, SocialLink, ThemeConfig,
    UnknownIconError,
};
pub use raw::RawSiteConfig;
pub use source::{CONFIG_FILENAMES, Format, discover_from};

/// Validate an unvalidated configuration structure.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the structure has the wrong shape,
/// otherwise the first validation failure with the offending field path.
pub fn load(raw: serde_json::Value) -> Result<SiteConfig, ConfigError> {
    let raw: RawSiteConfig =
        serde_json::from_value(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    raw.validate()
}
