use std::path::PathBuf;

use mercadinho_core::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("product {0} appears more than once in the catalog")]
    DuplicateProduct(ProductId),
    #[error("product {id} has a negative {field}")]
    NegativeAmount { id: ProductId, field: &'static str },
    #[error("product {id} has a {field} too large to represent")]
    AmountOverflow { id: ProductId, field: &'static str },
}
