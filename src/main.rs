use clap::Parser;
use nrs_export::utils::{logger, validation::Validate};
use nrs_export::{CliConfig, ExportEngine, ExportPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nrs-export");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let storage = LocalStorage::new();
    let pipeline = ExportPipeline::new(storage, config);
    let engine = ExportEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("Export completed successfully");
            println!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
