pub mod catalog;
pub mod models;

pub use catalog::CatalogSource;
pub use models::{CatalogSnapshot, Product, ProductId};
