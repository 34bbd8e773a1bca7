use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use mercadinho_core::{CatalogSnapshot, CatalogSource, Product};
use tracing::info;

use crate::error::CatalogError;
use crate::record::{CatalogRecord, products_from_records};

/// Catalog export stored as a JSON array of [`CatalogRecord`]s. The file is
/// re-read on every snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&raw)?;
        products_from_records(records)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn snapshot(&self) -> anyhow::Result<CatalogSnapshot> {
        let products = self.load().await?;
        let snapshot = CatalogSnapshot::new(products, Utc::now());
        info!(
            path = %self.path.display(),
            products = snapshot.len(),
            snapshot_id = %snapshot.id,
            "loaded catalog snapshot"
        );
        Ok(snapshot)
    }
}
