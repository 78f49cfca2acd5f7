pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{Bulk, Entry, ExportResult, Score, COLUMNS};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
