//! Streaming obfuscation of sensitive fields in tabular data.
//!
//! Values in caller-designated sensitive fields are replaced with either a
//! deterministic keyed token (HMAC-SHA-256, truncated hex) or a fixed mask
//! string. Everything else, including the structural shape of the input, is
//! preserved. Processing is single-pass and holds one record in memory at a
//! time, so inputs of any size stream in constant memory.

pub mod config;
pub mod csv_adapter;
pub mod errors;
pub mod formats;
pub mod handler;
pub mod logger;
pub mod obfuscator;
pub mod policy;
pub mod token;

// Re-exports
pub use csv_adapter::CsvAdapter;
pub use errors::{ObfuscatorError, Result};
pub use formats::{Format, FormatAdapter};
pub use handler::{process_request, ObfuscationRequest, ObfuscationResponse};
pub use obfuscator::obfuscate_stream;
pub use policy::{Mode, ObfuscationPolicy};
