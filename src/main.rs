use clap::Parser;
use egoscan::utils::logger;
use egoscan::utils::validation::{validate_required_field, Validate};
use egoscan::{CliConfig, IdentifierExtractor, LocalDirectory, OutputFormat, Result, ScanResult};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting egoscan");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("Scan failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let folder = validate_required_field("folder", &config.folder)?;

    let extractor = IdentifierExtractor::new(LocalDirectory::new());
    let result = extractor.scan(folder)?;

    tracing::info!("Found {} ego ids in {}", result.len(), folder);
    emit(&result, config.format)
}

fn emit(result: &ScanResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for id in &result.ids {
                println!("{}", id);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(result)?);
        }
    }
    Ok(())
}
