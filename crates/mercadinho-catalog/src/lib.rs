pub mod error;
pub mod json_file;
pub mod memory;
pub mod record;

pub use error::CatalogError;
pub use json_file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
pub use record::{CatalogRecord, products_from_records};
