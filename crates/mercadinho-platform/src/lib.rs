pub mod config;
pub mod contracts;

pub use config::ServiceConfig;
pub use contracts::{BadgeReport, DashboardReport, FilteredProductsReport, ProductRow};
