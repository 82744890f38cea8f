use chirp_docs::{check, config, emit, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "chirp-docs")]
#[command(about = "Site configuration tool for the Chirp documentation site")]
#[command(long_about = "\
Site configuration tool for the Chirp documentation site

Resolves the site configuration the docs build pipeline consumes: stock
defaults, overridden by an optional docs.toml in the docs root, with the
VUEPRESS_BASE environment variable taking final say over the base path
(an empty variable is treated as unset).

Docs root structure:

  docs/
  ├── docs.toml                       # Optional overrides (sparse)
  ├── game_chat_features.md
  ├── game_chat_architecture.md
  └── game_combat_best_practices.md

Run 'chirp-docs gen-config' to generate a documented docs.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Docs content directory
    #[arg(long, default_value = "docs", global = true)]
    docs_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the config and emit it as JSON for the build pipeline
    Emit {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Verify sidebar entries against the docs root
    Check,
    /// Print a stock docs.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Emit { output, compact } => {
            let env = config::process_env();
            let site = config::load_config(&cli.docs_root, &env)?;
            match output {
                Some(path) => {
                    emit::write_json(&site, &path, compact)?;
                    output::print_config_summary(&site);
                    println!("==> Wrote {}", path.display());
                }
                None => {
                    let json = if compact {
                        emit::to_json_compact(&site)?
                    } else {
                        emit::to_json(&site)?
                    };
                    print!("{json}");
                }
            }
        }
        Command::Check => {
            let env = config::process_env();
            let site = config::load_config(&cli.docs_root, &env)?;
            println!("==> Checking {}", cli.docs_root.display());
            let report = check::check_sidebar(&cli.docs_root, &site)?;
            output::print_check_report(&site, &report, &cli.docs_root);
            if !report.passed() {
                return Err(format!(
                    "{} sidebar target(s) missing under {}",
                    report.missing.len(),
                    cli.docs_root.display()
                )
                .into());
            }
            println!("==> Sidebar is consistent");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
