//! Delimited-text adapter: header-plus-rows CSV with RFC 4180 quoting

use std::borrow::Cow;
use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::errors::{ObfuscatorError, Result};
use crate::formats::FormatAdapter;
use crate::policy::ObfuscationPolicy;

/// Comma-separated values with a mandatory header row. Fields are quoted
/// on output only when they contain the delimiter, a quote, or a line
/// break, matching the read dialect.
pub struct CsvAdapter;

impl FormatAdapter for CsvAdapter {
    fn process(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        policy: &ObfuscationPolicy,
    ) -> Result<u64> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            // No header line at all: nothing to process, nothing to write.
            return Ok(0);
        }

        // Fail closed before a single output byte: every declared sensitive
        // field and the identifier field must exist in the header.
        // Silently skipping an absent field would fake redaction.
        for field in policy.sensitive_fields() {
            if !headers.iter().any(|h| h == field) {
                return Err(ObfuscatorError::UnknownSensitiveField(field.clone()));
            }
        }
        let identifier_index = headers
            .iter()
            .position(|h| h == policy.identifier_field())
            .ok_or_else(|| {
                ObfuscatorError::UnknownSensitiveField(policy.identifier_field().to_string())
            })?;

        let sensitive_indexes: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|&(_, name)| policy.is_sensitive(name))
            .map(|(index, _)| index)
            .collect();

        let mut writer = WriterBuilder::new().from_writer(output);
        writer.write_record(&headers)?;

        let mut count: u64 = 0;
        for (index, row) in reader.records().enumerate() {
            let row_number = index as u64 + 1;
            let record = row.map_err(|e| structural_error(e, row_number))?;
            let identifier = &record[identifier_index];

            let mut fields: Vec<Cow<'_, str>> = Vec::with_capacity(record.len());
            for (field_index, value) in record.iter().enumerate() {
                if sensitive_indexes.contains(&field_index) {
                    let replacement = policy
                        .obfuscate(identifier, &headers[field_index])
                        .map_err(|e| e.at_row(row_number))?;
                    fields.push(Cow::Owned(replacement));
                } else {
                    fields.push(Cow::Borrowed(value));
                }
            }

            writer.write_record(fields.iter().map(|field| field.as_bytes()))?;
            count += 1;
        }

        writer.flush()?;
        debug!(records = count, "csv adapter finished");
        Ok(count)
    }
}

/// A row whose field count differs from the header is a structural fault
/// of that row; everything else stays a plain CSV error.
fn structural_error(err: csv::Error, row: u64) -> ObfuscatorError {
    if let csv::ErrorKind::UnequalLengths { expected_len, len, .. } = err.kind() {
        return ObfuscatorError::Format {
            row,
            message: format!("expected {expected_len} fields, found {len}"),
        };
    }
    ObfuscatorError::Csv(err)
}
