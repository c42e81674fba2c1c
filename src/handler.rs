//! JSON request handler for service-style invocation
//!
//! Accepts the structured payload an orchestration layer would send and
//! runs one obfuscation pass between two local paths. Remote-object
//! transfer and secret retrieval stay with the caller, which is why the
//! secret key arrives as an explicit argument.

use std::fs::File;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::Result;
use crate::formats::Format;
use crate::obfuscator::obfuscate_stream;
use crate::policy::{ObfuscationPolicy, DEFAULT_MASK, DEFAULT_TOKEN_LENGTH};

#[derive(Debug, Deserialize)]
pub struct ObfuscationRequest {
    /// Path of the file to read.
    pub source: String,
    /// Path the obfuscated output is written to.
    pub target: String,
    /// Field names to obfuscate.
    pub fields: Vec<String>,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Explicit format identifier; detected from `source` when omitted.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub mask: bool,
    #[serde(default)]
    pub mask_value: Option<String>,
    #[serde(default)]
    pub token_length: Option<usize>,
}

fn default_primary_key() -> String {
    "id".to_string()
}

#[derive(Debug, Serialize)]
pub struct ObfuscationResponse {
    pub status: String,
    pub target: String,
    pub records: u64,
}

impl ObfuscationRequest {
    fn into_policy(self, secret_key: &[u8]) -> Result<(ObfuscationPolicy, String, String)> {
        let policy = if self.mask {
            ObfuscationPolicy::mask(
                self.fields,
                self.primary_key,
                self.mask_value.unwrap_or_else(|| DEFAULT_MASK.to_string()),
            )?
        } else {
            ObfuscationPolicy::token(
                secret_key.to_vec(),
                self.fields,
                self.primary_key,
                self.token_length.unwrap_or(DEFAULT_TOKEN_LENGTH),
            )?
        };
        Ok((policy, self.source, self.target))
    }
}

/// Parse a JSON payload and run the obfuscation it describes.
pub fn process_request(payload: &str, secret_key: &[u8]) -> Result<ObfuscationResponse> {
    let request: ObfuscationRequest = serde_json::from_str(payload)?;
    info!(source = %request.source, target = %request.target, "handling obfuscation request");

    let format = Format::resolve(request.format.as_deref(), Some(&request.source))?;
    let (policy, source, target) = request.into_policy(secret_key)?;

    let input = File::open(&source)?;
    let output = File::create(&target)?;
    let records = obfuscate_stream(input, output, &policy, format)?;

    Ok(ObfuscationResponse {
        status: "ok".to_string(),
        target,
        records,
    })
}
