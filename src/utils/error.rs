use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Cannot parse ego id from '{file}': leading segment '{segment}' is not an integer")]
    ParseError {
        file: String,
        segment: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl ScanError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::IoError(e) => format!("Could not read the folder: {}", e),
            ScanError::SerializationError(e) => format!("Could not serialize the result: {}", e),
            ScanError::ConfigError { message } => message.clone(),
            ScanError::ParseError { file, segment, .. } => format!(
                "File '{}' looks like an edges file but '{}' is not a numeric ego id",
                file, segment
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::IoError(_) => "Check that the folder exists and is readable",
            ScanError::SerializationError(_) => "Try the plain output format",
            ScanError::ConfigError { .. } => "Pass the dataset folder as the first argument",
            ScanError::ParseError { .. } => {
                "Ego-network files must be named '<id>.edges'; remove or rename stray files"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::ConfigError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
