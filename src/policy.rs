//! Obfuscation policy: the validated, immutable configuration of one run

use crate::errors::{ObfuscatorError, Result};
use crate::token;

pub const DEFAULT_MASK: &str = "***";
pub const DEFAULT_TOKEN_LENGTH: usize = 16;

/// Replacement strategy for sensitive fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Deterministic keyed hash of the record identifier and field name.
    Token,
    /// Fixed configured string, independent of the input.
    Mask,
}

/// Everything one run needs to decide how a field value is replaced.
///
/// Constructed once, validated at construction, immutable afterwards.
/// Holds no mutable state, so it can be shared freely across runs.
#[derive(Debug, Clone)]
pub struct ObfuscationPolicy {
    secret_key: Vec<u8>,
    mode: Mode,
    sensitive_fields: Vec<String>,
    identifier_field: String,
    token_length: usize,
    mask_value: String,
}

impl ObfuscationPolicy {
    /// Token-mode policy. Requires a non-empty key and a token length
    /// between 1 and the full digest's hex length.
    pub fn token(
        secret_key: Vec<u8>,
        sensitive_fields: Vec<String>,
        identifier_field: impl Into<String>,
        token_length: usize,
    ) -> Result<Self> {
        if secret_key.is_empty() {
            return Err(ObfuscatorError::Config(
                "token mode requires a non-empty secret key".into(),
            ));
        }
        if token_length == 0 || token_length > token::MAX_TOKEN_LENGTH {
            return Err(ObfuscatorError::Config(format!(
                "token length must be between 1 and {}, got {}",
                token::MAX_TOKEN_LENGTH,
                token_length
            )));
        }
        let policy = Self {
            secret_key,
            mode: Mode::Token,
            sensitive_fields,
            identifier_field: identifier_field.into(),
            token_length,
            mask_value: DEFAULT_MASK.to_string(),
        };
        policy.validate_fields()?;
        Ok(policy)
    }

    /// Mask-mode policy. An empty mask value is permitted; no key is needed.
    pub fn mask(
        sensitive_fields: Vec<String>,
        identifier_field: impl Into<String>,
        mask_value: impl Into<String>,
    ) -> Result<Self> {
        let policy = Self {
            secret_key: Vec::new(),
            mode: Mode::Mask,
            sensitive_fields,
            identifier_field: identifier_field.into(),
            token_length: DEFAULT_TOKEN_LENGTH,
            mask_value: mask_value.into(),
        };
        policy.validate_fields()?;
        Ok(policy)
    }

    fn validate_fields(&self) -> Result<()> {
        if self.sensitive_fields.is_empty() {
            return Err(ObfuscatorError::Config(
                "at least one sensitive field is required".into(),
            ));
        }
        if self.sensitive_fields.iter().any(|f| f.is_empty()) {
            return Err(ObfuscatorError::Config(
                "sensitive field names must be non-empty".into(),
            ));
        }
        if self.identifier_field.is_empty() {
            return Err(ObfuscatorError::Config(
                "identifier field name must be non-empty".into(),
            ));
        }
        Ok(())
    }

    /// Replacement value for one field of one record. Mask mode ignores the
    /// identifier entirely; token mode requires it to be non-empty.
    pub fn obfuscate(&self, identifier: &str, field_name: &str) -> Result<String> {
        match self.mode {
            Mode::Mask => Ok(self.mask_value.clone()),
            Mode::Token => {
                token::generate(&self.secret_key, identifier, field_name, self.token_length)
            }
        }
    }

    /// Exact, case-sensitive membership test. No normalization.
    pub fn is_sensitive(&self, field_name: &str) -> bool {
        self.sensitive_fields.iter().any(|f| f == field_name)
    }

    pub fn sensitive_fields(&self) -> &[String] {
        &self.sensitive_fields
    }

    pub fn identifier_field(&self) -> &str {
        &self.identifier_field
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
