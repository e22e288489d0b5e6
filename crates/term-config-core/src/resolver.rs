//! Terminal settings resolution
//!
//! Every query re-reads its accessors and recomputes from scratch; nothing
//! is cached between calls.

use crate::config::{ConfigurationAccessor, ConfigurationSnapshot, ThemeAccessor};
use crate::context::Platform;
use crate::theme::{ThemeCategory, ThemeColorTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings sections consulted for font fields, most specific first.
const FONT_LAYERS: [&str; 2] = ["terminal.integrated", "editor"];

/// Section holding the per-platform shell map
const SHELL_SECTION: &str = "terminal.integrated.shell";

/// Resolved terminal font.
///
/// A field is `None` only when neither layer sets it; no default is
/// invented here. A leaf of the wrong type (e.g. `fontSize = "14"`) counts
/// as unset, so a mistyped terminal value yields the editor value instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
}

/// All resolved settings, computed from a single configuration read
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTerminalSettings {
    pub platform: Platform,
    pub font: FontDescriptor,
    pub shell: Option<String>,
    pub theme: ThemeCategory,
    pub colors: &'static ThemeColorTable,
}

/// Derives terminal font, shell and palette from layered settings.
///
/// Holds its platform plus the two accessors; construct once and query as
/// often as needed. Hosts pass owned values, references or `Arc`s.
#[derive(Debug, Clone)]
pub struct TerminalConfigResolver<C, T> {
    platform: Platform,
    configuration: C,
    theme: T,
}

impl<C, T> TerminalConfigResolver<C, T>
where
    C: ConfigurationAccessor,
    T: ThemeAccessor,
{
    pub fn new(platform: Platform, configuration: C, theme: T) -> Self {
        Self {
            platform,
            configuration,
            theme,
        }
    }

    /// Platform fixed at construction
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve font family, size and line height.
    ///
    /// Each field cascades on its own: a terminal-level family does not stop
    /// size or line height inheriting from the editor.
    pub fn font(&self) -> FontDescriptor {
        resolve_font(&self.configuration.configuration())
    }

    /// Shell configured for this resolver's platform.
    ///
    /// No other platform's entry is consulted, and a non-string entry counts
    /// as unset. `None` leaves the choice of a system default to the caller.
    pub fn shell(&self) -> Option<String> {
        resolve_shell(&self.configuration.configuration(), self.platform)
    }

    /// Palette for the active UI theme. Ignores configuration entirely.
    pub fn theme(&self) -> &'static ThemeColorTable {
        self.theme_category().colors()
    }

    /// Category of the active UI theme
    pub fn theme_category(&self) -> ThemeCategory {
        let active = self.theme.active_theme();
        let category = ThemeCategory::classify(&active);
        debug!(theme = %active, ?category, "classified terminal theme");
        category
    }

    /// Resolve everything at once
    pub fn resolve(&self) -> ResolvedTerminalSettings {
        let snapshot = self.configuration.configuration();
        let theme = self.theme_category();
        ResolvedTerminalSettings {
            platform: self.platform,
            font: resolve_font(&snapshot),
            shell: resolve_shell(&snapshot, self.platform),
            theme,
            colors: theme.colors(),
        }
    }
}

fn resolve_font(snapshot: &ConfigurationSnapshot) -> FontDescriptor {
    FontDescriptor {
        font_family: first_set(snapshot, "fontFamily", ConfigurationSnapshot::get_str)
            .map(str::to_owned),
        font_size: first_set(snapshot, "fontSize", ConfigurationSnapshot::get_f64),
        line_height: first_set(snapshot, "lineHeight", ConfigurationSnapshot::get_f64),
    }
}

fn resolve_shell(snapshot: &ConfigurationSnapshot, platform: Platform) -> Option<String> {
    let path = format!("{SHELL_SECTION}.{}", platform.shell_key());
    let shell = snapshot.get_str(&path).map(str::to_owned);
    if shell.is_none() {
        debug!(?platform, "no terminal shell configured for platform");
    }
    shell
}

/// First layer in [`FONT_LAYERS`] that sets `field`.
fn first_set<'a, V>(
    snapshot: &'a ConfigurationSnapshot,
    field: &str,
    read: impl Fn(&'a ConfigurationSnapshot, &str) -> Option<V>,
) -> Option<V> {
    for (depth, section) in FONT_LAYERS.iter().enumerate() {
        if let Some(value) = read(snapshot, &format!("{section}.{field}")) {
            if depth > 0 {
                debug!(field, section, "terminal font setting inherited");
            }
            return Some(value);
        }
    }
    None
}
