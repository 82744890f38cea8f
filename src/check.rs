//! Sidebar filesystem contract checks.
//!
//! The sidebar lists document paths like `/game_chat_features.md`, resolved
//! by the external build pipeline relative to the docs content root. The
//! `check` command verifies that contract ahead of a build:
//!
//! - every sidebar entry must exist as a file under the docs root (missing
//!   targets fail the check);
//! - markdown files under the root that no sidebar entry references are
//!   reported as orphans (informational — they still build, they just never
//!   show up in the sidebar).
//!
//! Dotfiles and dot-directories (e.g. the pipeline's own `.vuepress/`) are
//! skipped when scanning for orphans.

use crate::config::{ConfigError, SiteConfig};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Result of checking a config against a docs root.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Sidebar entries with no corresponding file under the docs root.
    pub missing: Vec<String>,
    /// Markdown files under the docs root not referenced by the sidebar.
    pub orphans: Vec<String>,
}

impl CheckReport {
    /// True when every sidebar entry resolved. Orphans do not fail the check.
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolve a sidebar entry to a path under the docs root.
///
/// Entries carry a leading slash (`/game_chat_features.md`); stripping it
/// keeps the join relative so the entry cannot escape the root on platforms
/// where a leading slash means absolute.
fn sidebar_target(root: &Path, entry: &str) -> std::path::PathBuf {
    root.join(entry.trim_start_matches('/'))
}

/// Verify the sidebar against the files actually present under `root`.
///
/// Missing and orphan lists both preserve a stable order: missing entries in
/// sidebar order, orphans sorted by path.
pub fn check_sidebar(root: &Path, config: &SiteConfig) -> Result<CheckReport, ConfigError> {
    let missing: Vec<String> = config
        .theme_config
        .sidebar
        .iter()
        .filter(|entry| !sidebar_target(root, entry).is_file())
        .cloned()
        .collect();

    let referenced: BTreeSet<&str> = config
        .theme_config
        .sidebar
        .iter()
        .map(|s| s.as_str())
        .collect();

    let mut orphans = BTreeSet::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(std::io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walked entries live under root");
        let sidebar_form = format!(
            "/{}",
            rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/")
        );
        if !referenced.contains(sidebar_form.as_str()) {
            orphans.insert(sidebar_form);
        }
    }

    Ok(CheckReport {
        missing,
        orphans: orphans.into_iter().collect(),
    })
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docs_root_with(files: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for f in files {
            let path = tmp.path().join(f);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, "# doc\n").unwrap();
        }
        tmp
    }

    #[test]
    fn all_sidebar_targets_present_passes() {
        let tmp = docs_root_with(&[
            "game_chat_features.md",
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
        ]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(report.passed());
        assert!(report.missing.is_empty());
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn missing_target_fails_in_sidebar_order() {
        let tmp = docs_root_with(&["game_chat_architecture.md"]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(!report.passed());
        assert_eq!(
            report.missing,
            vec![
                "/game_chat_features.md",
                "/game_combat_best_practices.md",
            ]
        );
    }

    #[test]
    fn unreferenced_markdown_reported_as_orphan() {
        let tmp = docs_root_with(&[
            "game_chat_features.md",
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
            "scratch_notes.md",
        ]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(report.passed());
        assert_eq!(report.orphans, vec!["/scratch_notes.md"]);
    }

    #[test]
    fn orphans_in_subdirectories_use_sidebar_form() {
        let tmp = docs_root_with(&[
            "game_chat_features.md",
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
            "guides/setup.md",
        ]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(report.orphans, vec!["/guides/setup.md"]);
    }

    #[test]
    fn hidden_directories_skipped() {
        let tmp = docs_root_with(&[
            "game_chat_features.md",
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
            ".vuepress/snippets/example.md",
        ]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn non_markdown_files_ignored() {
        let tmp = docs_root_with(&[
            "game_chat_features.md",
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
            "logo.png",
            "docs.toml",
        ]);
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn sidebar_entry_that_is_a_directory_counts_as_missing() {
        let tmp = docs_root_with(&[
            "game_chat_architecture.md",
            "game_combat_best_practices.md",
        ]);
        fs::create_dir(tmp.path().join("game_chat_features.md")).unwrap();
        let report = check_sidebar(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(report.missing, vec!["/game_chat_features.md"]);
    }

    #[test]
    fn empty_sidebar_flags_everything_as_orphan() {
        let tmp = docs_root_with(&["game_chat_features.md"]);
        let mut config = SiteConfig::default();
        config.theme_config.sidebar.clear();
        let report = check_sidebar(tmp.path(), &config).unwrap();
        assert!(report.passed());
        assert_eq!(report.orphans, vec!["/game_chat_features.md"]);
    }
}
