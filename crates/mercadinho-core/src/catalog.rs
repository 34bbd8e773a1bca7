use async_trait::async_trait;

use crate::models::CatalogSnapshot;

/// Supplies the full product list the analytics operate on. Implementations
/// own refreshing; callers take a fresh snapshot per render cycle.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn snapshot(&self) -> anyhow::Result<CatalogSnapshot>;
}
