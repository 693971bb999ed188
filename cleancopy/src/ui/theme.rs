//! Module for managing the application's command-line interface (CLI) theme.
//!
//! A theme file is a YAML map from output element to `{ fg: <color> }`.
//! Elements the file leaves out keep their default color, and an unknown
//! color name fails the load.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for lines added in a diff view.
    DiffAdded,
    /// Style for lines removed in a diff view.
    DiffRemoved,
    /// Style for the header/footer of a diff view.
    DiffHeader,
    /// Style for a parameter name in the summary or the params table.
    SummaryParamName,
    /// Style for the number of occurrences in the summary.
    SummaryOccurrences,
}

const ALL_ENTRIES: [ThemeEntry; 10] = [
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Info,
    ThemeEntry::Warn,
    ThemeEntry::Error,
    ThemeEntry::DiffAdded,
    ThemeEntry::DiffRemoved,
    ThemeEntry::DiffHeader,
    ThemeEntry::SummaryParamName,
    ThemeEntry::SummaryOccurrences,
];

/// One of the 16 ANSI colors a theme entry may use.
///
/// Theme files name colors case-insensitively (`red`, `BrightGreen`); any
/// other name is rejected when the file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct ThemeColor(AnsiColors);

const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// A color name outside [`NAMED_COLORS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "invalid theme color '{}'; expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, color)| ThemeColor(*color))
            .ok_or_else(|| ParseThemeColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ThemeColor {
    pub fn ansi(self) -> AnsiColors {
        self.0
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// Looks up the foreground color for `entry`, defaulting to white.
pub fn color_for(theme: &ThemeMap, entry: ThemeEntry) -> AnsiColors {
    theme
        .get(&entry)
        .and_then(|style| style.fg)
        .map(ThemeColor::ansi)
        .unwrap_or(AnsiColors::White)
}

impl ThemeStyle {
    /// Loads a theme from a YAML file; entries it omits fall back to the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let styled = |color| ThemeStyle { fg: Some(ThemeColor(color)) };
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::DiffAdded, styled(AnsiColors::Green));
        default_theme.insert(ThemeEntry::DiffRemoved, styled(AnsiColors::Red));
        default_theme.insert(ThemeEntry::DiffHeader, styled(AnsiColors::Yellow));
        default_theme.insert(ThemeEntry::Success, styled(AnsiColors::Green));
        default_theme.insert(ThemeEntry::Warn, styled(AnsiColors::Yellow));
        default_theme.insert(ThemeEntry::Error, styled(AnsiColors::BrightRed));
        default_theme.insert(ThemeEntry::SummaryParamName, styled(AnsiColors::Cyan));

        for entry in ALL_ENTRIES {
            default_theme.entry(entry).or_insert_with(|| styled(AnsiColors::White));
        }
        default_theme
    }
}
