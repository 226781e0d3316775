//! Normalized site configuration.
//!
//! Values in this module are only produced by the validator, so every
//! [`SiteConfig`] upholds the documented invariants. They are never mutated
//! after construction and can be shared freely across threads.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::last_updated::LastUpdatedConfig;

/// Validated documentation site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) base_path: String,
    pub(crate) theme: ThemeConfig,
}

impl SiteConfig {
    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description (empty when not configured).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Base path the site is served under. Always starts and ends with `/`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Theme configuration.
    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Prefix an internal link with the base path.
    ///
    /// Absolute URLs are returned unchanged.
    #[must_use]
    pub fn with_base(&self, link: &str) -> String {
        if is_external(link) {
            return link.to_owned();
        }
        let base = self.base_path.trim_end_matches('/');
        if link.starts_with('/') {
            format!("{base}{link}")
        } else {
            format!("{base}/{link}")
        }
    }
}

/// Theme chrome: navigation bar, sidebar, social links, last-updated label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub(crate) nav: Vec<NavItem>,
    pub(crate) sidebar: Vec<SidebarGroup>,
    pub(crate) social_links: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_updated: Option<LastUpdatedConfig>,
}

impl ThemeConfig {
    /// Top navigation entries in render order.
    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar groups in render order.
    #[must_use]
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    /// Social links in render order.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Last-updated settings, or `None` when the label is disabled.
    #[must_use]
    pub fn last_updated(&self) -> Option<&LastUpdatedConfig> {
        self.last_updated.as_ref()
    }

    /// First sidebar group containing an item that links to `path`.
    #[must_use]
    pub fn sidebar_group_for(&self, path: &str) -> Option<&SidebarGroup> {
        self.sidebar
            .iter()
            .find(|group| group.items.iter().any(|item| item.link == path))
    }
}

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub(crate) text: String,
    pub(crate) link: String,
}

impl NavItem {
    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target path, relative to the base path.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Whether this entry should be highlighted for the page at `path`.
    ///
    /// The root link `/` only matches the root page; other links match the
    /// page itself and anything below it.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if self.link == "/" {
            return path == "/";
        }
        match path.strip_prefix(self.link.as_str()) {
            Some(rest) => rest.is_empty() || self.link.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Labeled cluster of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub(crate) text: String,
    pub(crate) items: Vec<SidebarItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) collapsed: Option<bool>,
}

impl SidebarGroup {
    /// Group label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Entries in render order. May be empty.
    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    /// Collapse state: `None` when the group is not collapsible,
    /// otherwise whether it starts collapsed.
    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }
}

/// Single sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub(crate) text: String,
    pub(crate) link: String,
}

impl SidebarItem {
    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target path, relative to the base path.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Icon-labeled external link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub(crate) icon: SocialIcon,
    pub(crate) link: String,
}

impl SocialLink {
    /// Icon identifier.
    #[must_use]
    pub fn icon(&self) -> SocialIcon {
        self.icon
    }

    /// Absolute URL.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Recognized social icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    /// All recognized icons.
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    /// Identifier as written in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized icon identifier.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: {0}")]
pub struct UnknownIconError(pub String);

impl FromStr for SocialIcon {
    type Err = UnknownIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIconError(s.to_owned()))
    }
}

/// Whether `link` is an absolute URL rather than a site path.
fn is_external(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(base_path: &str) -> SiteConfig {
        SiteConfig {
            title: "Mango SQL".to_owned(),
            description: String::new(),
            base_path: base_path.to_owned(),
            theme: ThemeConfig::default(),
        }
    }

    fn nav(link: &str) -> NavItem {
        NavItem {
            text: "Entry".to_owned(),
            link: link.to_owned(),
        }
    }

    fn item(text: &str, link: &str) -> SidebarItem {
        SidebarItem {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }

    #[test]
    fn test_with_base_prefixes_internal_links() {
        let config = site("/mango-sql/");
        assert_eq!(config.with_base("/"), "/mango-sql/");
        assert_eq!(
            config.with_base("/getting-started/"),
            "/mango-sql/getting-started/"
        );
        assert_eq!(config.with_base("queries/filters"), "/mango-sql/queries/filters");
    }

    #[test]
    fn test_with_base_root_base_path() {
        let config = site("/");
        assert_eq!(config.with_base("/guide/"), "/guide/");
    }

    #[test]
    fn test_with_base_leaves_external_links() {
        let config = site("/mango-sql/");
        assert_eq!(
            config.with_base("https://github.com/kefniark/mango-sql"),
            "https://github.com/kefniark/mango-sql"
        );
        assert_eq!(
            config.with_base("mailto:team@example.com"),
            "mailto:team@example.com"
        );
    }

    #[test]
    fn test_root_nav_only_matches_root() {
        let home = nav("/");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/getting-started/"));
    }

    #[test]
    fn test_nav_matches_nested_pages() {
        let guide = nav("/getting-started/");
        assert!(guide.is_active("/getting-started/"));
        assert!(guide.is_active("/getting-started/install"));
        assert!(!guide.is_active("/queries/"));
    }

    #[test]
    fn test_nav_without_trailing_slash_respects_segments() {
        let guide = nav("/guide");
        assert!(guide.is_active("/guide"));
        assert!(guide.is_active("/guide/setup"));
        assert!(!guide.is_active("/guides"));
    }

    #[test]
    fn test_sidebar_group_for_finds_owning_group() {
        let theme = ThemeConfig {
            sidebar: vec![
                SidebarGroup {
                    text: "Getting Started".to_owned(),
                    items: vec![item("Install CLI", "/getting-started/")],
                    collapsed: None,
                },
                SidebarGroup {
                    text: "Queries".to_owned(),
                    items: vec![item("Filters", "/queries/filters")],
                    collapsed: Some(false),
                },
            ],
            ..ThemeConfig::default()
        };

        let group = theme.sidebar_group_for("/queries/filters").unwrap();
        assert_eq!(group.text(), "Queries");
        assert!(theme.sidebar_group_for("/unknown").is_none());
    }

    #[test]
    fn test_icon_parse() {
        assert_eq!("github".parse::<SocialIcon>(), Ok(SocialIcon::Github));
        assert_eq!("x".parse::<SocialIcon>(), Ok(SocialIcon::X));
        assert_eq!(
            "GitHub".parse::<SocialIcon>(),
            Err(UnknownIconError("GitHub".to_owned()))
        );
    }

    #[test]
    fn test_icon_identifiers_roundtrip() {
        for icon in SocialIcon::ALL {
            assert_eq!(icon.as_str().parse::<SocialIcon>(), Ok(icon));
            assert_eq!(icon.to_string(), icon.as_str());
        }
    }

    #[test]
    fn test_serialize_uses_camel_case_and_omits_disabled_last_updated() {
        let config = site("/mango-sql/");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["basePath"], "/mango-sql/");
        assert!(json["theme"]["socialLinks"].is_array());
        assert!(json["theme"].get("lastUpdated").is_none());
    }
}
