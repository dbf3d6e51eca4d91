//! Site configuration module.
//!
//! Handles loading and validating an optional `config.toml` next to the
//! generated site. Configuration is sparse: stock defaults are used for any
//! key the file does not set, and unknown keys are rejected to catch typos
//! early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "Programming Flix"   # Branding in the header and index title
//!
//! [analytics]
//! enabled = false                  # Append pageview events to a local log
//! log_path = ".flixdoc/pageviews.jsonl"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"           # Nav, design-note labels
//! link = "#1756a9"
//! code_background = "#f4f4f4"      # Inline code and code blocks
//! note_border = "#f0ad4e"          # Design-note accent stripe
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! link = "#6ea8e0"
//! code_background = "#1c1c1c"
//! note_border = "#b07d3f"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. A config file need only specify the
/// values it wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site branding shown in the header and used for the index page title.
    pub site_name: String,
    /// Pageview logging settings.
    pub analytics: AnalyticsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            analytics: AnalyticsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

fn default_site_name() -> String {
    "Programming Flix".to_string()
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        if self.analytics.enabled && self.analytics.log_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "analytics.log_path must not be empty when analytics is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Pageview logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// When true, `flixdoc build` appends one JSON line per rendered page to
    /// `log_path` (a build is an activation of every page).
    pub enabled: bool,
    /// Path of the JSONL pageview log.
    pub log_path: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: ".flixdoc/pageviews.jsonl".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (nav, design-note labels).
    pub text_muted: String,
    /// Link color.
    pub link: String,
    /// Background for inline code and code blocks.
    pub code_background: String,
    /// Accent stripe on design-note callouts.
    pub note_border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            link: "#1756a9".to_string(),
            code_background: "#f4f4f4".to_string(),
            note_border: "#f0ad4e".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            link: "#6ea8e0".to_string(),
            code_background: "#1c1c1c".to_string(),
            note_border: "#b07d3f".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from the given `config.toml` path.
///
/// A missing file yields the stock defaults; a present file is parsed with
/// unknown keys rejected, then validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# flixdoc Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Site branding: shown in the header of every page and as the index title.
site_name = "Programming Flix"

# ---------------------------------------------------------------------------
# Pageview logging
# ---------------------------------------------------------------------------
[analytics]
# When true, `flixdoc build` appends one JSON line per rendered page to the
# log below (a build activates every page once).
enabled = false

# Path of the JSONL pageview log, relative to the working directory.
log_path = ".flixdoc/pageviews.jsonl"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"       # Nav, design-note labels
link = "#1756a9"
code_background = "#f4f4f4"  # Inline code and code blocks
note_border = "#f0ad4e"      # Design-note accent stripe

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
link = "#6ea8e0"
code_background = "#1c1c1c"
note_border = "#b07d3f"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-link: {light_link};
    --color-code-bg: {light_code_bg};
    --color-note-border: {light_note_border};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-link: {dark_link};
        --color-code-bg: {dark_code_bg};
        --color-note-border: {dark_note_border};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_link = colors.light.link,
        light_code_bg = colors.light.code_background,
        light_note_border = colors.light.note_border,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_link = colors.dark.link,
        dark_code_bg = colors.dark.code_background,
        dark_note_border = colors.dark.note_border,
    )
}
