pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "egoscan")]
#[command(about = "List the ego identifiers present in an ego-network dataset folder")]
pub struct CliConfig {
    /// Dataset folder containing <id>.edges files
    pub folder: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One ego id per line
    Plain,
    /// The whole result as a JSON object
    Json,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let folder = validate_required_field("folder", &self.folder)?;
        validate_path("folder", folder)?;
        Ok(())
    }
}
