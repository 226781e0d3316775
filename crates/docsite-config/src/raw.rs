//! Raw configuration shape and validation.
//!
//! [`RawSiteConfig`] mirrors the configuration as written, with every field
//! optional. [`RawSiteConfig::validate`] applies defaults, drops disabled
//! entries and checks invariants, producing a [`SiteConfig`].
//!
//! Validation runs in a fixed order: `title`, `description`, `basePath`, then
//! `theme.nav`, `theme.sidebar`, `theme.socialLinks`, `theme.lastUpdated`.
//! The first failure is returned.

use serde::Deserialize;
use url::Url;

use crate::ConfigError;
use crate::last_updated::{FormatOptions, FormatStyle, LastUpdatedConfig};
use crate::model::{
    NavItem, SidebarGroup, SidebarItem, SiteConfig, SocialIcon, SocialLink, ThemeConfig,
};

/// Site configuration as parsed from a source, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSiteConfig {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) base_path: Option<String>,
    pub(crate) theme: Option<RawThemeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawThemeConfig {
    nav: Option<Vec<RawLinkItem>>,
    sidebar: Option<Vec<RawSidebarGroup>>,
    social_links: Option<Vec<RawSocialLink>>,
    last_updated: Option<RawLastUpdated>,
}

/// Nav or sidebar entry.
#[derive(Debug, Deserialize)]
struct RawLinkItem {
    text: Option<String>,
    link: Option<String>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct RawSidebarGroup {
    text: Option<String>,
    items: Option<Vec<RawLinkItem>>,
    collapsed: Option<bool>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct RawSocialLink {
    icon: Option<String>,
    link: Option<String>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLastUpdated {
    text: Option<String>,
    format_options: Option<RawFormatOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFormatOptions {
    date_style: Option<FormatStyle>,
    time_style: Option<FormatStyle>,
}

fn enabled_by_default() -> bool {
    true
}

impl RawSiteConfig {
    /// Validate and normalize into a [`SiteConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, naming the offending field.
    pub fn validate(self) -> Result<SiteConfig, ConfigError> {
        let title = self.title.ok_or_else(|| ConfigError::missing("title"))?;
        require_text(&title, "title")?;

        let description = self.description.unwrap_or_default();

        let base_path = self
            .base_path
            .ok_or_else(|| ConfigError::missing("basePath"))?;
        require_base_path(&base_path)?;

        let theme = self.theme.unwrap_or_default().validate()?;

        Ok(SiteConfig {
            title,
            description,
            base_path,
            theme,
        })
    }
}

impl RawThemeConfig {
    fn validate(self) -> Result<ThemeConfig, ConfigError> {
        let nav = enabled_entries(self.nav, "theme.nav", |item| item.enabled)
            .map(|(field, item)| item.validate_nav(&field))
            .collect::<Result<Vec<_>, _>>()?;

        let sidebar = enabled_entries(self.sidebar, "theme.sidebar", |group| group.enabled)
            .map(|(field, group)| group.validate(&field))
            .collect::<Result<Vec<_>, _>>()?;

        let social_links =
            enabled_entries(self.social_links, "theme.socialLinks", |link| link.enabled)
                .map(|(field, link)| link.validate(&field))
                .collect::<Result<Vec<_>, _>>()?;

        let last_updated = self
            .last_updated
            .map(|raw| raw.validate("theme.lastUpdated"))
            .transpose()?;

        Ok(ThemeConfig {
            nav,
            sidebar,
            social_links,
            last_updated,
        })
    }
}

impl RawLinkItem {
    fn validate_nav(self, field: &str) -> Result<NavItem, ConfigError> {
        let (text, link) = self.validate(field)?;
        Ok(NavItem { text, link })
    }

    fn validate_sidebar(self, field: &str) -> Result<SidebarItem, ConfigError> {
        let (text, link) = self.validate(field)?;
        Ok(SidebarItem { text, link })
    }

    fn validate(self, field: &str) -> Result<(String, String), ConfigError> {
        let text = require_present(self.text, field, "text")?;
        require_text(&text, &format!("{field}.text"))?;
        let link = require_present(self.link, field, "link")?;
        require_internal_link(&link, &format!("{field}.link"))?;
        Ok((text, link))
    }
}

impl RawSidebarGroup {
    fn validate(self, field: &str) -> Result<SidebarGroup, ConfigError> {
        let text = require_present(self.text, field, "text")?;
        require_text(&text, &format!("{field}.text"))?;

        let items = self
            .items
            .ok_or_else(|| ConfigError::missing(format!("{field}.items")))?;
        let items = enabled_entries(Some(items), &format!("{field}.items"), |item| item.enabled)
            .map(|(item_field, item)| item.validate_sidebar(&item_field))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SidebarGroup {
            text,
            items,
            collapsed: self.collapsed,
        })
    }
}

impl RawSocialLink {
    fn validate(self, field: &str) -> Result<SocialLink, ConfigError> {
        let icon = require_present(self.icon, field, "icon")?;
        let icon = icon
            .parse::<SocialIcon>()
            .map_err(|e| ConfigError::UnknownIcon {
                field: format!("{field}.icon"),
                icon: e.0,
            })?;
        let link = require_present(self.link, field, "link")?;
        require_absolute_url(&link, &format!("{field}.link"))?;
        Ok(SocialLink { icon, link })
    }
}

impl RawLastUpdated {
    fn validate(self, field: &str) -> Result<LastUpdatedConfig, ConfigError> {
        let text = require_present(self.text, field, "text")?;
        require_text(&text, &format!("{field}.text"))?;

        let defaults = FormatOptions::default();
        let format_options = match self.format_options {
            Some(raw) => FormatOptions {
                date_style: raw.date_style.unwrap_or(defaults.date_style),
                time_style: raw.time_style.unwrap_or(defaults.time_style),
            },
            None => defaults,
        };

        Ok(LastUpdatedConfig {
            text,
            format_options,
        })
    }
}

/// Enumerate list entries with their field paths, skipping disabled ones.
///
/// Paths use the entry's position in the source, so errors point at the
/// entry as written even when earlier entries were disabled.
fn enabled_entries<T, F>(
    entries: Option<Vec<T>>,
    field: &str,
    is_enabled: F,
) -> impl Iterator<Item = (String, T)> + use<T, F>
where
    F: Fn(&T) -> bool,
{
    let field = field.to_owned();
    entries
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(move |(index, entry)| {
            let path = format!("{field}[{index}]");
            if is_enabled(&entry) {
                Some((path, entry))
            } else {
                tracing::debug!(field = %path, "Skipping disabled entry");
                None
            }
        })
}

fn require_present(value: Option<String>, parent: &str, name: &str) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::missing(format!("{parent}.{name}")))
}

/// Require a text field to contain something other than whitespace.
fn require_text(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyText {
            field: field.to_owned(),
        });
    }
    Ok(())
}

fn require_base_path(value: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::InvalidBasePath {
            value: value.to_owned(),
        });
    }
    Ok(())
}

/// Require a link to be a path within the site.
fn require_internal_link(link: &str, field: &str) -> Result<(), ConfigError> {
    let reason = if link.trim().is_empty() {
        "cannot be empty"
    } else if !link.starts_with('/') {
        "must start with '/'"
    } else if link.starts_with("//") {
        "must be a site path, not a protocol-relative URL"
    } else {
        return Ok(());
    };
    Err(invalid_link(link, field, reason))
}

/// Require a link to be a well-formed absolute URL, stored exactly as written.
fn require_absolute_url(link: &str, field: &str) -> Result<(), ConfigError> {
    if link.trim().is_empty() {
        return Err(invalid_link(link, field, "cannot be empty"));
    }
    // The URL parser strips these itself, which would hide them from the renderer.
    if link != link.trim_matches(|c: char| c.is_whitespace() || c.is_control()) {
        return Err(invalid_link(link, field, "must not have surrounding whitespace"));
    }
    Url::parse(link)
        .map_err(|_| invalid_link(link, field, "must be a well-formed absolute URL"))?;
    Ok(())
}

fn invalid_link(link: &str, field: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidLink {
        field: field.to_owned(),
        link: link.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_link_rules() {
        assert!(require_internal_link("/", "f").is_ok());
        assert!(require_internal_link("/getting-started/", "f").is_ok());

        let err = require_internal_link("getting-started", "theme.nav[0].link").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLink { .. }));
        assert!(err.to_string().contains("must start with '/'"));

        let err = require_internal_link("   ", "f").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        let err = require_internal_link("//cdn.example.com/x", "f").unwrap_err();
        assert!(err.to_string().contains("protocol-relative"));
    }

    #[test]
    fn test_absolute_url_rules() {
        assert!(require_absolute_url("https://github.com/kefniark/mango-sql", "f").is_ok());
        assert!(require_absolute_url("http://localhost:5173/", "f").is_ok());

        assert!(require_absolute_url("mailto:team@example.com", "f").is_ok());
        assert!(require_absolute_url("ftp://example.com/x", "f").is_ok());
        assert!(require_absolute_url("slack://open", "f").is_ok());

        for bad in ["", "github.com/kefniark", "/mango-sql/", "https://"] {
            let err = require_absolute_url(bad, "theme.socialLinks[0].link").unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidLink { .. }),
                "expected InvalidLink for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_absolute_url_rejects_surrounding_whitespace() {
        for padded in [
            "  https://github.com/kefniark  ",
            "https://github.com/kefniark\n",
            "\thttps://github.com/kefniark",
        ] {
            let err = require_absolute_url(padded, "theme.socialLinks[0].link").unwrap_err();
            assert!(
                err.to_string().contains("surrounding whitespace"),
                "expected whitespace rejection for {padded:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_text_rules() {
        assert!(require_text("Home", "f").is_ok());
        assert!(matches!(
            require_text(" \t\n", "theme.nav[0].text"),
            Err(ConfigError::EmptyText { .. })
        ));
    }

    #[test]
    fn test_base_path_rules() {
        assert!(require_base_path("/").is_ok());
        assert!(require_base_path("/mango-sql/").is_ok());
        assert!(require_base_path("/mango-sql").is_err());
        assert!(require_base_path("mango-sql/").is_err());
        assert!(require_base_path("").is_err());
    }

    #[test]
    fn test_enabled_entries_keep_source_positions() {
        let entries = vec![("a", true), ("b", false), ("c", true)];
        let kept: Vec<_> = enabled_entries(Some(entries), "theme.nav", |e| e.1)
            .map(|(field, e)| (field, e.0))
            .collect();
        assert_eq!(
            kept,
            vec![
                ("theme.nav[0]".to_owned(), "a"),
                ("theme.nav[2]".to_owned(), "c"),
            ]
        );
    }
}
