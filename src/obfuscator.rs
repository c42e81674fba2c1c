//! Processing entry point

use std::io::{Read, Write};

use tracing::info;

use crate::errors::Result;
use crate::formats::Format;
use crate::policy::ObfuscationPolicy;

/// Obfuscate every sensitive field of `input` per `policy`, writing the
/// transformed records to `output` in the same structural encoding.
///
/// Runs synchronously to completion or failure; the only blocking points
/// are reads and writes on the caller-supplied streams. Returns the number
/// of data records processed.
pub fn obfuscate_stream<R, W>(
    mut input: R,
    mut output: W,
    policy: &ObfuscationPolicy,
    format: Format,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let adapter = format.adapter()?;
    let count = adapter.process(&mut input, &mut output, policy)?;

    info!(
        format = format.name(),
        records = count,
        fields = ?policy.sensitive_fields(),
        "obfuscation complete"
    );
    Ok(count)
}
