//! Deterministic keyed token generation

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{ObfuscatorError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Hex length of a full SHA-256 digest; the upper bound for token length.
pub const MAX_TOKEN_LENGTH: usize = 64;

/// Derive the replacement token for one (identifier, field) pair.
///
/// The canonical message length-prefixes both components with their byte
/// length as a big-endian u64, so distinct pairs can never feed the same
/// bytes to the MAC (plain concatenation would make ("1", "abc") and
/// ("1a", "bc") collide). Output is the lower-case hex digest truncated
/// to `length` characters; identical inputs produce identical tokens in
/// every process, always.
pub fn generate(key: &[u8], identifier: &str, field_name: &str, length: usize) -> Result<String> {
    if identifier.is_empty() {
        return Err(ObfuscatorError::MissingIdentifier { row: None });
    }

    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| ObfuscatorError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(&(identifier.len() as u64).to_be_bytes());
    mac.update(identifier.as_bytes());
    mac.update(&(field_name.len() as u64).to_be_bytes());
    mac.update(field_name.as_bytes());

    let mut token = hex::encode(mac.finalize().into_bytes());
    token.truncate(length);
    Ok(token)
}
