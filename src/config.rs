//! Secret-key resolution for the CLI and service wrappers

use config as config_rs;

use crate::errors::{ObfuscatorError, Result};

/// Environment variable the key falls back to when no flag is given.
pub const KEY_ENV: &str = "OBFUSCATOR_KEY";

/// Resolve the HMAC secret key. Layering: the environment variable is the
/// base, a caller-supplied value (CLI flag, request field) overrides it.
pub fn resolve_secret_key(override_key: Option<&str>) -> Result<Vec<u8>> {
    let mut builder = config_rs::Config::builder();

    if let Ok(key) = std::env::var(KEY_ENV) {
        builder = builder.set_override("secret_key", key).map_err(config_error)?;
    }
    if let Some(key) = override_key {
        builder = builder
            .set_override("secret_key", key.to_string())
            .map_err(config_error)?;
    }

    let cfg = builder.build().map_err(config_error)?;
    let key = cfg.get::<String>("secret_key").map_err(|_| {
        ObfuscatorError::Config(format!(
            "obfuscation key missing: set {KEY_ENV} or pass --key"
        ))
    })?;

    if key.is_empty() {
        return Err(ObfuscatorError::Config(format!(
            "obfuscation key is empty: set {KEY_ENV} or pass --key"
        )));
    }
    Ok(key.into_bytes())
}

fn config_error(err: config_rs::ConfigError) -> ObfuscatorError {
    ObfuscatorError::Config(err.to_string())
}
