use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use mercadinho_catalog::JsonFileCatalog;
use mercadinho_core::CatalogSource;
use mercadinho_platform::{ServiceConfig, config::parse_reference_date};
use mercadinho_segmentation::QuickFilter;
use tracing::info;

mod reports;

#[derive(Debug, Parser)]
#[command(name = "mercadinho-board")]
struct Args {
    /// Catalog export (JSON array of products). Overrides MERCADINHO_CATALOG_PATH.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// RFC 3339 timestamp used for turnover. Defaults to now.
    #[arg(long)]
    reference_date: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dashboard statistics and badge counts.
    Stats,
    /// Quick-filter badge counts only.
    Badges,
    /// Products matching a quick filter, e.g. `abc:a`, `turnover:slow`, `no-supplier`.
    Filter { filter: QuickFilter },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mercadinho_board=info".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ServiceConfig::from_env()?;

    let catalog_path = match args.catalog {
        Some(path) => path,
        None => config.require_catalog_path()?.clone(),
    };
    let reference_date = match args.reference_date.as_deref() {
        Some(raw) => parse_reference_date(raw)?,
        None => config.reference_date_or(Utc::now()),
    };

    let catalog = JsonFileCatalog::new(catalog_path);
    let snapshot = catalog
        .snapshot()
        .await
        .with_context(|| format!("loading catalog from {}", catalog.path().display()))?;

    info!(
        snapshot_id = %snapshot.id,
        %reference_date,
        products = snapshot.len(),
        "running segmentation"
    );

    let output = match args.command {
        Command::Stats => {
            serde_json::to_string_pretty(&reports::dashboard(&snapshot, reference_date))?
        }
        Command::Badges => {
            serde_json::to_string_pretty(&reports::badges(&snapshot, reference_date))?
        }
        Command::Filter { filter } => {
            info!(%filter, "applying quick filter");
            serde_json::to_string_pretty(&reports::filtered(&snapshot, filter, reference_date))?
        }
    };
    println!("{output}");

    Ok(())
}
