//! Site configuration module.
//!
//! Handles loading, merging, and validating the Chirp docs site configuration.
//! Resolution is layered: stock defaults are overridden by an optional
//! `docs.toml` in the docs root, and the `VUEPRESS_BASE` environment variable
//! overrides the base path last.
//!
//! ## Config File Location
//!
//! Place `docs.toml` in the docs content root:
//!
//! ```text
//! docs/
//! ├── docs.toml                       # Optional overrides (sparse)
//! ├── game_chat_features.md
//! ├── game_chat_architecture.md
//! └── game_combat_best_practices.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base = "/"                          # URL path prefix for all pages
//! title = "Chirp Docs"
//! description = "Documentation for Project Chirp"
//!
//! [themeConfig]
//! sidebar = [
//!     "/game_chat_features.md",
//!     "/game_chat_architecture.md",
//!     "/game_combat_best_practices.md",
//! ]
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.
//!
//! ## Environment
//!
//! `VUEPRESS_BASE`, when present and non-empty, replaces `base` regardless of
//! what the file says. An empty value is treated as unset. The environment is
//! passed in as a mapping (see [`process_env`]); nothing in this module reads
//! global process state, which keeps resolution pure and testable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable controlling the site base path.
pub const BASE_ENV_VAR: &str = "VUEPRESS_BASE";

/// Name of the optional override file in the docs root.
pub const CONFIG_FILE_NAME: &str = "docs.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration consumed by the external docs build pipeline.
///
/// Field names and nesting mirror what the pipeline recognizes: `base`,
/// `title`, `description`, and `themeConfig` with `nav` and `sidebar`.
/// All fields have stock defaults; `docs.toml` need only specify overrides.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL path prefix for all generated pages. Always non-empty.
    /// `VUEPRESS_BASE` overrides this when present and non-empty.
    pub base: String,
    /// Site title shown in the browser tab and header.
    pub title: String,
    /// Site description (meta tag).
    pub description: String,
    /// Navigation and sidebar structure.
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
            title: "Chirp Docs".to_string(),
            description: "Documentation for Project Chirp".to_string(),
            theme_config: ThemeConfig::default(),
        }
    }
}

/// Nav and sidebar structure, under the `themeConfig` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Top-level navigation bar entries, shown on every page, in order.
    pub nav: Vec<NavEntry>,
    /// Ordered document paths defining sidebar order.
    pub sidebar: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            nav: vec![NavEntry {
                text: "Home".to_string(),
                link: "/".to_string(),
            }],
            sidebar: vec![
                "/game_chat_features.md".to_string(),
                "/game_chat_architecture.md".to_string(),
                "/game_combat_best_practices.md".to_string(),
            ],
        }
    }
}

/// A single navigation bar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Target path or URL.
    pub link: String,
}

impl SiteConfig {
    /// Validate config values.
    ///
    /// The `base` invariant (always non-empty) is enforced here; an empty
    /// `base` can only come from a file override, since the environment
    /// layer treats empty as unset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base.is_empty() {
            return Err(ConfigError::Validation("base must not be empty".into()));
        }
        for (i, entry) in self.theme_config.nav.iter().enumerate() {
            if entry.text.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "themeConfig.nav[{i}].text must not be empty"
                )));
            }
            if entry.link.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "themeConfig.nav[{i}].link must not be empty"
                )));
            }
        }
        for (i, path) in self.theme_config.sidebar.iter().enumerate() {
            if path.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "themeConfig.sidebar[{i}] must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Apply environment overrides from the given mapping.
    ///
    /// `VUEPRESS_BASE` replaces `base` when present and non-empty; an empty
    /// value is treated as unset, so the current value (file override or
    /// stock `"/"`) stands.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) {
        if let Some(value) = env.get(BASE_ENV_VAR) {
            if !value.is_empty() {
                self.base = value.clone();
            }
        }
    }
}

/// Snapshot of the process environment, for passing to [`load_config`].
///
/// The only place the global environment is read. Everything downstream
/// takes the mapping as an argument.
pub fn process_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, including
///   arrays: an overridden `sidebar` replaces the stock list, not appends.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `docs.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `docs.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Resolve the full site configuration for a docs root.
///
/// Layering, lowest to highest precedence: stock defaults, `docs.toml` in
/// `root` (if any), then `VUEPRESS_BASE` from `env`. User values are merged
/// sparsely, unknown keys rejected, and the result validated before the
/// environment layer is applied.
pub fn load_config(root: &Path, env: &HashMap<String, String>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let mut config = resolve_config(base, overlay)?;
    config.apply_env(env);
    Ok(config)
}

/// Returns a fully-commented stock `docs.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Chirp Docs Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as docs.toml in the docs content root. Each key overrides
# the stock default; unspecified keys keep their defaults. Unknown keys will
# cause an error.
#
# The URL base path can also be set via the VUEPRESS_BASE environment
# variable, which wins over this file. An empty variable is ignored.

# URL path prefix for all generated pages. Must not be empty.
base = "/"

# Site title shown in the browser tab and header.
title = "Chirp Docs"

# Site description (meta tag).
description = "Documentation for Project Chirp"

# ---------------------------------------------------------------------------
# Theme: sidebar ordering
# ---------------------------------------------------------------------------
[themeConfig]
# Ordered document paths, relative to the docs root with a leading slash.
# Overriding this replaces the whole list.
sidebar = [
    "/game_chat_features.md",
    "/game_chat_architecture.md",
    "/game_combat_best_practices.md",
]

# ---------------------------------------------------------------------------
# Theme: top navigation bar
# ---------------------------------------------------------------------------
# One [[themeConfig.nav]] block per entry, in display order.
[[themeConfig.nav]]
text = "Home"
link = "/"
"##
}
