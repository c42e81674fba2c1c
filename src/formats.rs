//! Format registry and the adapter contract

use std::io::{Read, Write};

use crate::csv_adapter::CsvAdapter;
use crate::errors::{ObfuscatorError, Result};
use crate::policy::ObfuscationPolicy;

/// A structural encoding the engine knows about.
///
/// `Jsonl` (line-delimited record batches) and `Parquet` (columnar binary)
/// are recognized, planned variants; asking for their adapter yields
/// [`ObfuscatorError::NotImplementedFormat`] rather than a panicking stub,
/// so callers can tell "unknown encoding" from "known but not built".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Jsonl,
    Parquet,
}

/// A stateless capability translating between one structural encoding and
/// the engine's record abstraction.
pub trait FormatAdapter: Send + Sync {
    /// Stream records from `input` to `output`, replacing each sensitive
    /// field per `policy`. Holds at most one record in memory at a time and
    /// preserves the input's structural shape. Returns the number of data
    /// records written (header excluded).
    fn process(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        policy: &ObfuscationPolicy,
    ) -> Result<u64>;
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
            Self::Parquet => "parquet",
        }
    }

    /// Resolve an explicit format identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        match identifier.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" | "jsonl" | "ndjson" => Ok(Self::Jsonl),
            "parquet" | "pq" => Ok(Self::Parquet),
            _ => Err(ObfuscatorError::UnsupportedFormat(identifier.to_string())),
        }
    }

    /// Detect the format from the lower-cased suffix after the final `.`.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let suffix = filename
            .rsplit_once('.')
            .map(|(_, suffix)| suffix)
            .filter(|suffix| !suffix.is_empty())
            .ok_or_else(|| ObfuscatorError::UnsupportedFormat(filename.to_string()))?;
        Self::from_identifier(suffix)
    }

    /// Resolve from an explicit identifier or a filename. The explicit
    /// identifier always takes precedence when both are supplied.
    pub fn resolve(identifier: Option<&str>, filename: Option<&str>) -> Result<Self> {
        match (identifier, filename) {
            (Some(id), _) => Self::from_identifier(id),
            (None, Some(name)) => Self::from_filename(name),
            (None, None) => Err(ObfuscatorError::UnsupportedFormat("unspecified".to_string())),
        }
    }

    /// The adapter implementing this encoding, if one is built.
    pub fn adapter(&self) -> Result<&'static dyn FormatAdapter> {
        match self {
            Self::Csv => Ok(&CsvAdapter),
            Self::Jsonl | Self::Parquet => {
                Err(ObfuscatorError::NotImplementedFormat(self.name()))
            }
        }
    }
}
