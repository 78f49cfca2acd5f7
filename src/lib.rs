pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::ExportEngine, pipeline::ExportPipeline};
pub use domain::model::{Bulk, ExportResult, COLUMNS};
pub use utils::error::{ExportError, Result};
