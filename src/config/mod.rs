pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nrs-export")]
#[command(about = "Export an NRS bulk JSON document to a flat CSV table")]
pub struct CliConfig {
    #[arg(long, default_value = "bulk.json")]
    pub input: String,

    #[arg(long, default_value = "nrs.csv")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, "json")?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}
