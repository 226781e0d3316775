//! "Last updated" label settings and timestamp formatting.
//!
//! Styles follow the `Intl.DateTimeFormat` `dateStyle`/`timeStyle` names.
//! Rendering uses the en-US patterns for each style, in UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date or time style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    Full,
    Long,
    Medium,
    Short,
}

impl FormatStyle {
    fn date_pattern(self) -> &'static str {
        match self {
            Self::Full => "%A, %B %-d, %Y",
            Self::Long => "%B %-d, %Y",
            Self::Medium => "%b %-d, %Y",
            Self::Short => "%-m/%-d/%y",
        }
    }

    fn time_pattern(self) -> &'static str {
        match self {
            Self::Full => "%-I:%M:%S %p Coordinated Universal Time",
            Self::Long => "%-I:%M:%S %p UTC",
            Self::Medium => "%-I:%M:%S %p",
            Self::Short => "%-I:%M %p",
        }
    }
}

/// Date and time styles used for the timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub(crate) date_style: FormatStyle,
    pub(crate) time_style: FormatStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            date_style: FormatStyle::Full,
            time_style: FormatStyle::Medium,
        }
    }
}

impl FormatOptions {
    /// Date style.
    #[must_use]
    pub fn date_style(&self) -> FormatStyle {
        self.date_style
    }

    /// Time style.
    #[must_use]
    pub fn time_style(&self) -> FormatStyle {
        self.time_style
    }

    /// Format a timestamp with these styles.
    #[must_use]
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        let date = timestamp.format(self.date_style.date_pattern());
        let time = timestamp.format(self.time_style.time_pattern());
        match self.date_style {
            FormatStyle::Full | FormatStyle::Long => format!("{date} at {time}"),
            FormatStyle::Medium | FormatStyle::Short => format!("{date}, {time}"),
        }
    }
}

/// Settings for the per-page "last updated" label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdatedConfig {
    pub(crate) text: String,
    pub(crate) format_options: FormatOptions,
}

impl LastUpdatedConfig {
    /// Label prefix, e.g. "Updated at".
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Timestamp format options.
    #[must_use]
    pub fn format_options(&self) -> &FormatOptions {
        &self.format_options
    }

    /// Render the full label for a page modified at `timestamp`.
    #[must_use]
    pub fn render(&self, timestamp: &DateTime<Utc>) -> String {
        format!("{} {}", self.text, self.format_options.format(timestamp))
    }
}
