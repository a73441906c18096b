//! `folio`: command-line administration of the portfolio store.
//!
//! # Usage
//!
//! ```text
//! folio items list --category academic --type project
//! folio items add --title "X" --description "d" --category academic --type project
//! folio items delete 1718000000000-3fa2c1d9
//! folio --store ./folio.db export > snapshot.json
//! ```

mod commands;
mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context as _, Result};
use clap::Parser;
use commands::Command;
use folio_store_sqlite::SqliteMedium;
use settings::{OutputFormat, Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Manage portfolio profile and items")]
struct Cli {
  /// Path to a TOML config file (store_path, output).
  #[arg(short, long, global = true, value_name = "FILE", default_value = "folio.toml")]
  config: PathBuf,

  /// SQLite file holding the documents; overrides `store_path`.
  #[arg(long, global = true, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Print results as JSON.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so stdout stays machine-readable.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let store_path = expand_tilde(cli.store.as_ref().unwrap_or(&settings.store_path));
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }

  let medium = SqliteMedium::open(&store_path)
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::debug!(path = %store_path.display(), "store opened");

  let format = if cli.json { OutputFormat::Json } else { settings.output };

  let stdout = std::io::stdout();
  commands::run(Arc::new(medium), cli.command, format, &mut stdout.lock())
}
