pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalDirectory, CliConfig, OutputFormat};
pub use core::extractor::IdentifierExtractor;
pub use domain::model::ScanResult;
pub use utils::error::{Result, ScanError};
