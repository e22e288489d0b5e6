//! ANSI color tables keyed by UI theme category
//!
//! The active UI theme id is reduced to its category token (text before the
//! first space) and matched by prefix against [`CATEGORY_PREFIXES`], top to
//! bottom. `vs-dark` must be tested before the light fallback since it also
//! starts with `vs`.

use serde::{Deserialize, Serialize};

/// Sixteen ANSI colors: black, red, green, yellow, blue, magenta, cyan,
/// white, then the bright variants in the same order.
pub type ThemeColorTable = [&'static str; 16];

/// Palette used with high-contrast UI themes
pub const HIGH_CONTRAST_COLORS: ThemeColorTable = [
    "#000000", "#cd0000", "#00cd00", "#cdcd00", "#0000ee", "#cd00cd", "#00cdcd", "#e5e5e5",
    "#7f7f7f", "#ff0000", "#00ff00", "#ffff00", "#5c5cff", "#ff00ff", "#00ffff", "#ffffff",
];

/// Palette used with light UI themes
pub const LIGHT_COLORS: ThemeColorTable = [
    "#000000", "#cd3131", "#008000", "#949800", "#0451a5", "#bc05bc", "#0598bc", "#555555",
    "#666666", "#cd3131", "#00aa00", "#b5ba00", "#0451a5", "#bc05bc", "#0598bc", "#a5a5a5",
];

/// Palette used with dark UI themes
pub const DARK_COLORS: ThemeColorTable = [
    "#000000", "#cd3131", "#09885a", "#e5e510", "#2472c8", "#bc3fbc", "#11a8cd", "#e5e5e5",
    "#666666", "#f14c4c", "#17a773", "#f5f543", "#3b8eea", "#d670d6", "#29b8db", "#e5e5e5",
];

/// UI theme family a terminal palette is chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    /// `hc-black*`
    HighContrast,
    /// `vs-dark*`
    Dark,
    /// `vs` and anything unrecognized
    Light,
}

/// Ordered prefix table; first match wins, no match means [`ThemeCategory::Light`].
pub const CATEGORY_PREFIXES: [(&str, ThemeCategory); 2] = [
    ("hc-black", ThemeCategory::HighContrast),
    ("vs-dark", ThemeCategory::Dark),
];

impl ThemeCategory {
    /// Classify an active theme identifier such as `"vs-dark Dark+"`.
    ///
    /// Total: every input, including the empty string, maps to a category.
    pub fn classify(theme_id: &str) -> Self {
        let token = category_token(theme_id);
        CATEGORY_PREFIXES
            .iter()
            .find(|(prefix, _)| token.starts_with(prefix))
            .map_or(ThemeCategory::Light, |&(_, category)| category)
    }

    /// The built-in palette for this category
    pub fn colors(self) -> &'static ThemeColorTable {
        match self {
            ThemeCategory::HighContrast => &HIGH_CONTRAST_COLORS,
            ThemeCategory::Dark => &DARK_COLORS,
            ThemeCategory::Light => &LIGHT_COLORS,
        }
    }

    /// Color for ANSI palette slot `index` (0-15)
    pub fn ansi_color(self, index: usize) -> Option<&'static str> {
        self.colors().get(index).copied()
    }
}

/// Leading segment of a theme id, up to (not including) the first space.
pub fn category_token(theme_id: &str) -> &str {
    theme_id.split_once(' ').map_or(theme_id, |(token, _)| token)
}
