//! Error types for the obfuscation engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ObfuscatorError>;

#[derive(Error, Debug)]
pub enum ObfuscatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Format '{0}' is recognized but not implemented yet")]
    NotImplementedFormat(&'static str),

    #[error("Sensitive field '{0}' not present in input header")]
    UnknownSensitiveField(String),

    #[error("{}identifier value is empty", .row.map(|r| format!("Row {r}: ")).unwrap_or_default())]
    MissingIdentifier { row: Option<u64> },

    #[error("Row {row}: {message}")]
    Format { row: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ObfuscatorError {
    /// Attach the 1-based data-row index to an error raised below the
    /// adapter, which does not know which row it is processing.
    pub(crate) fn at_row(self, row: u64) -> Self {
        match self {
            Self::MissingIdentifier { .. } => Self::MissingIdentifier { row: Some(row) },
            other => other,
        }
    }
}
