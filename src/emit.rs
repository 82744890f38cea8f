//! JSON rendering of the resolved site configuration.
//!
//! The external docs build pipeline recognizes exactly these fields: `base`,
//! `title`, `description`, and `themeConfig` with `nav[].{text,link}` and
//! `sidebar[]`. The field names come straight from [`SiteConfig`]'s serde
//! attributes, so the emitted document and the `docs.toml` schema cannot
//! drift apart.

use crate::config::{ConfigError, SiteConfig};
use std::fs;
use std::path::Path;

/// Render the config as pretty-printed JSON, with a trailing newline.
pub fn to_json(config: &SiteConfig) -> Result<String, ConfigError> {
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    Ok(json)
}

/// Render the config as compact single-line JSON, with a trailing newline.
pub fn to_json_compact(config: &SiteConfig) -> Result<String, ConfigError> {
    let mut json = serde_json::to_string(config)?;
    json.push('\n');
    Ok(json)
}

/// Write the config as JSON to `path`, creating parent directories as needed.
pub fn write_json(config: &SiteConfig, path: &Path, compact: bool) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = if compact {
        to_json_compact(config)?
    } else {
        to_json(config)?
    };
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_ENV_VAR;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn json_has_exact_consumer_field_names() {
        let json = to_json(&SiteConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["base"], "/");
        assert_eq!(value["title"], "Chirp Docs");
        assert_eq!(value["description"], "Documentation for Project Chirp");
        assert_eq!(value["themeConfig"]["nav"][0]["text"], "Home");
        assert_eq!(value["themeConfig"]["nav"][0]["link"], "/");
        assert_eq!(
            value["themeConfig"]["sidebar"][0],
            "/game_chat_features.md"
        );
        // No snake_case leakage
        assert!(value.get("theme_config").is_none());
    }

    #[test]
    fn json_preserves_sidebar_order() {
        let json = to_json(&SiteConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sidebar: Vec<&str> = value["themeConfig"]["sidebar"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            sidebar,
            vec![
                "/game_chat_features.md",
                "/game_chat_architecture.md",
                "/game_combat_best_practices.md",
            ]
        );
    }

    #[test]
    fn json_reflects_env_base() {
        let mut env = HashMap::new();
        env.insert(BASE_ENV_VAR.to_string(), "/chirp/".to_string());
        let mut config = SiteConfig::default();
        config.apply_env(&env);

        let json = to_json_compact(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base"], "/chirp/");
    }

    #[test]
    fn compact_json_is_single_line() {
        let json = to_json_compact(&SiteConfig::default()).unwrap();
        assert_eq!(json.lines().count(), 1);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("site-config.json");
        write_json(&SiteConfig::default(), &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["title"], "Chirp Docs");
    }

    #[test]
    fn json_roundtrips_through_config() {
        let json = to_json(&SiteConfig::default()).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SiteConfig::default());
    }
}
