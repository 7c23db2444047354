//! # catalog-dash
//!
//! Continent classification and aggregation pipelines for a streaming
//! catalog, as shown on its interactive dashboard.
//!
//! ## Usage
//!
//! ```bash
//! catalog-dash report --continent europe --show movie
//! catalog-dash directors --top-n 5 -f json
//! ```
//!
//! ## Modules
//!
//! - `catalog` - Catalog records, CSV loading and the load-once store
//! - `geo` - Country to continent classification
//! - `pipeline` - Aggregations behind each chart
//! - `dashboard` - Selection handling and the full report
//! - `config` - Layered configuration (defaults, file, environment, flags)
//! - `cli` - Argument parsing, routing and output rendering
//! - `error` - Coded error type shared by every module
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod pipeline;

pub use catalog::{Catalog, CatalogRecord, CatalogStore, ShowType};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardReport, PipelineSettings, Selection, ShowChoice};
pub use error::{DashError, Result};
pub use geo::{Continent, ContinentLookup, CountryMode};
