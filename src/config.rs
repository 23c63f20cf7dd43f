//! Site configuration.
//!
//! Handles loading and validating `config.toml`. The file is optional and
//! sparse — stock defaults cover everything, and a user config overrides
//! just the values it names. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! column_gap = "2rem"       # Gap between footer link columns
//! footer_padding = "3rem"   # Vertical padding inside the footer
//! panel_gap = "1.5rem"      # Gap between side-panel cards
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#0f172a"
//! text_muted = "#475569"    # Taglines, captions, copyright line
//! border = "#e2e8f0"
//! link = "#475569"
//! link_hover = "#0d9488"
//! accent = "#0d9488"        # Brand mark, credit heart
//!
//! [colors.dark]
//! background = "#020617"
//! text = "#ffffff"
//! text_muted = "#94a3b8"
//! border = "#1e293b"
//! link = "#94a3b8"
//! link_hover = "#2dd4bf"
//! accent = "#2dd4bf"
//! ```
//!
//! The color values flow into the generated preview page as CSS custom
//! properties, with the dark scheme behind a `prefers-color-scheme` media
//! query. The fragments themselves only reference the custom properties, so
//! a host app can supply its own values instead.

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
/// All fields have defaults; user config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Spacing values used by the fragment stylesheet.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate config values.
    ///
    /// Every value lands in generated CSS verbatim, so the only rule is that
    /// none of them may be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("theme.column_gap", &self.theme.column_gap),
            ("theme.footer_padding", &self.theme.footer_padding),
            ("theme.panel_gap", &self.theme.panel_gap),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        self.colors.light.validate("colors.light")?;
        self.colors.dark.validate("colors.dark")?;
        Ok(())
    }
}

/// Spacing settings for the generated stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Gap between footer link columns (CSS value).
    pub column_gap: String,
    /// Vertical padding inside the footer (CSS value).
    pub footer_padding: String,
    /// Gap between side-panel cards (CSS value).
    pub panel_gap: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            column_gap: "2rem".to_string(),
            footer_padding: "3rem".to_string(),
            panel_gap: "1.5rem".to_string(),
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
    /// Primary text color (column titles, brand name).
    pub text: String,
    /// Muted text color (taglines, captions, copyright line).
    pub text_muted: String,
    /// Border color (footer top rule, card edges).
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
    /// Accent color (brand mark, credit heart).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#475569".to_string(),
            border: "#e2e8f0".to_string(),
            link: "#475569".to_string(),
            link_hover: "#0d9488".to_string(),
            accent: "#0d9488".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#020617".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1e293b".to_string(),
            link: "#94a3b8".to_string(),
            link_hover: "#2dd4bf".to_string(),
            accent: "#2dd4bf".to_string(),
        }
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        for (key, value) in [
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("link", &self.link),
            ("link_hover", &self.link_hover),
            ("accent", &self.accent),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{section}.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no file exists. Rejects unknown keys and
/// validates the result. Unspecified values fall back to defaults, so a
/// config file can override a single color and nothing else.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# CareConnect Site Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Each key you keep overrides the
# default; everything else stays stock. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme / spacing
# ---------------------------------------------------------------------------
[theme]
# Gap between footer link columns (CSS value).
column_gap = "2rem"

# Vertical padding inside the footer (CSS value).
footer_padding = "3rem"

# Gap between side-panel cards (CSS value).
panel_gap = "1.5rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#0f172a"
text_muted = "#475569"    # Taglines, captions, copyright line
border = "#e2e8f0"
link = "#475569"
link_hover = "#0d9488"
accent = "#0d9488"        # Brand mark, credit heart

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#020617"
text = "#ffffff"
text_muted = "#94a3b8"
border = "#1e293b"
link = "#94a3b8"
link_hover = "#2dd4bf"
accent = "#2dd4bf"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --column-gap: {column_gap};
    --footer-padding: {footer_padding};
    --panel-gap: {panel_gap};
}}"#,
        column_gap = theme.column_gap,
        footer_padding = theme.footer_padding,
        panel_gap = theme.panel_gap,
    )
}
