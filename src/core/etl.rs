use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting export process...");

        // Extract
        tracing::info!("Reading bulk document...");
        let bulk = self.pipeline.extract()?;
        tracing::info!(
            "Parsed {} entries and {} scores",
            bulk.entries.len(),
            bulk.scores.len()
        );

        // Transform
        tracing::info!("Building CSV rows...");
        let result = self.pipeline.transform(bulk)?;
        tracing::info!("Built {} rows", result.rows);

        // Load
        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
