//! # Chirp Docs
//!
//! Configuration tool for the Project Chirp documentation site. It produces
//! the single structured `SiteConfig` object the external static-site build
//! pipeline consumes — base path, site metadata, and the nav/sidebar
//! structure pointing at the documentation pages — and verifies the sidebar
//! against the files actually on disk.
//!
//! # Architecture: Layered Resolution
//!
//! The config is resolved once at startup from three layers, lowest to
//! highest precedence:
//!
//! ```text
//! 1. Stock defaults   SiteConfig::default()   (title, nav, sidebar, base "/")
//! 2. docs.toml        optional file overlay   (sparse, unknown keys rejected)
//! 3. Environment      VUEPRESS_BASE           (base only; empty = unset)
//! ```
//!
//! The resolved value is read-only thereafter: no runtime mutation, no
//! persistent state. The environment is passed in as a plain mapping
//! ([`config::process_env`] is the single point that touches global process
//! state), so resolution is a pure function and unit tests never need to
//! set real environment variables.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig` type, layered loading, merging, validation |
//! | [`emit`] | JSON rendering with the exact field names the pipeline expects |
//! | [`check`] | Sidebar-vs-filesystem verification (missing targets, orphans) |
//! | [`output`] | CLI output formatting — indexed display of nav and sidebar |
//!
//! # Design Decisions
//!
//! ## The Consumer Owns the Schema
//!
//! The build pipeline recognizes exactly `base`, `title`, `description`,
//! and `themeConfig` with `nav[].{text,link}` and `sidebar[]`. Those names
//! are encoded once, as serde attributes on [`config::SiteConfig`], and both
//! the `docs.toml` overlay and the emitted JSON are derived from them — so
//! the file schema and the output document cannot disagree.
//!
//! ## Environment Wins, Emptiness Loses
//!
//! `VUEPRESS_BASE` is how deploy jobs relocate the site under a path prefix
//! without touching checked-in config, so it takes precedence over
//! `docs.toml`. An empty value is treated as unset rather than producing an
//! empty base: `base` is always a non-empty string.
//!
//! ## Paths Are Supplied, Not Resolved
//!
//! The sidebar lists paths; the external pipeline resolves them. The only
//! filesystem awareness here is the opt-in `check` command, which confirms
//! each sidebar target exists under the docs root before a build is kicked
//! off and flags markdown files the sidebar forgot.

pub mod check;
pub mod config;
pub mod emit;
pub mod output;
