use clap::Parser;
use csv_filter::utils::logger;
use csv_filter::{CliConfig, CsvPipeline, IdentityTransform};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-filter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let pipeline = CsvPipeline::new(config, IdentityTransform);

    let stdout = std::io::stdout();
    match pipeline.run(stdout.lock()) {
        Ok(rows) => {
            tracing::info!("Processed {} rows", rows);
        }
        Err(e) => {
            tracing::error!("CSV processing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
