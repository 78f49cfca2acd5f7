use crate::domain::model::{Bulk, ExportResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Bulk>;
    fn transform(&self, bulk: Bulk) -> Result<ExportResult>;
    fn load(&self, result: ExportResult) -> Result<String>;
}
