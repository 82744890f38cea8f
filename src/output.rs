//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity — positional index + label — with paths shown as
//! the detail. The same two-level pattern is used for the config summary
//! and the check report so both read as a content inventory:
//!
//! ```text
//! Site
//!     Title: Chirp Docs
//!     Description: Documentation for Project Chirp
//!     Base: /chirp/
//! Nav
//! 001 Home → /
//! Sidebar
//! 001 /game_chat_features.md
//! 002 /game_chat_architecture.md
//! 003 /game_combat_best_practices.md
//! ```

use crate::check::CheckReport;
use crate::config::SiteConfig;
use std::path::Path;

/// Header line: zero-padded positional index + label.
fn entity_header(index: usize, label: &str) -> String {
    format!("{:03} {}", index, label)
}

/// Format the resolved config as display lines.
pub fn format_config_summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("    Title: {}", config.title),
        format!("    Description: {}", config.description),
        format!("    Base: {}", config.base),
    ];

    lines.push("Nav".to_string());
    for (i, entry) in config.theme_config.nav.iter().enumerate() {
        lines.push(entity_header(i + 1, &format!("{} → {}", entry.text, entry.link)));
    }

    lines.push("Sidebar".to_string());
    for (i, path) in config.theme_config.sidebar.iter().enumerate() {
        lines.push(entity_header(i + 1, path));
    }

    lines
}

/// Format a check report as display lines.
///
/// Sidebar entries are shown in order with an ok/MISSING status; orphans
/// follow as indented context.
pub fn format_check_report(
    config: &SiteConfig,
    report: &CheckReport,
    root: &Path,
) -> Vec<String> {
    let mut lines = vec![format!("Sidebar ({})", root.display())];
    for (i, path) in config.theme_config.sidebar.iter().enumerate() {
        let status = if report.missing.contains(path) {
            "MISSING"
        } else {
            "ok"
        };
        lines.push(entity_header(i + 1, &format!("{path}: {status}")));
    }

    if !report.orphans.is_empty() {
        lines.push("Orphans (not referenced by sidebar)".to_string());
        for path in &report.orphans {
            lines.push(format!("    {path}"));
        }
    }

    lines
}

pub fn print_config_summary(config: &SiteConfig) {
    for line in format_config_summary(config) {
        println!("{line}");
    }
}

pub fn print_check_report(config: &SiteConfig, report: &CheckReport, root: &Path) {
    for line in format_check_report(config, report, root) {
        println!("{line}");
    }
}
