pub mod app_config;
pub mod tables_file;

pub use app_config::Config;
pub use tables_file::{load_pricing_map, PricingTablesFile, StoreError};
