use async_trait::async_trait;
use chrono::Utc;
use mercadinho_core::{CatalogSnapshot, CatalogSource, Product};
use tokio::sync::RwLock;

/// Catalog held in process. Each `snapshot` copies the current list under a
/// fresh snapshot id.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub async fn replace(&self, products: Vec<Product>) {
        let mut guard = self.products.write().await;
        *guard = products;
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn snapshot(&self) -> anyhow::Result<CatalogSnapshot> {
        let products = self.products.read().await;
        Ok(CatalogSnapshot::new(products.clone(), Utc::now()))
    }
}
