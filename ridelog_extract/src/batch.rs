//! JSON codec for message batches.
//!
//! Input is either a JSON array of message objects or JSON Lines with one
//! object per line; the first non-blank character decides which.

use ridelog_core::{EnrichedRecord, Error, RawMessage, Result};
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchFormat {
    #[default]
    JsonArray,
    JsonLines,
}

fn message_from(value: Value, position: usize) -> Result<RawMessage> {
    if !value.is_object() {
        return Err(Error::BatchShape(format!(
            "record {position} is not an object"
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| Error::BatchShape(format!("record {position}: {e}")))
}

/// Parse a batch, detecting array vs JSON Lines.
pub fn read_batch(input: &str) -> Result<Vec<RawMessage>> {
    match input.trim_start().chars().next() {
        None => Ok(Vec::new()),
        Some('[') => {
            let value: Value = serde_json::from_str(input)
                .map_err(|e| Error::BatchShape(format!("invalid JSON array: {e}")))?;
            let Value::Array(items) = value else {
                return Err(Error::BatchShape("expected a JSON array".to_string()));
            };
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| message_from(item, i + 1))
                .collect()
        }
        Some('{') => input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                let value: Value = serde_json::from_str(line)
                    .map_err(|e| Error::BatchShape(format!("line {}: {e}", i + 1)))?;
                message_from(value, i + 1)
            })
            .collect(),
        Some(other) => Err(Error::BatchShape(format!(
            "expected '[' or '{{' at start of input, found '{other}'"
        ))),
    }
}

/// Write enriched records in input order.
pub fn write_batch<W: Write>(
    records: &[EnrichedRecord],
    format: BatchFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        BatchFormat::JsonArray => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        BatchFormat::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridelog_core::ExtractionResult;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_array() {
        let batch = read_batch(r#"[{"message": "a"}, {"text": "b", "wa_date": "2024-03-01"}]"#)
            .expect("Failed to read array batch");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].text, "a");
        assert_eq!(batch[1].conversation_date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_json_lines() {
        let batch = read_batch("{\"text\": \"a\"}\n\n{\"text\": \"b\"}\n")
            .expect("Failed to read JSON Lines batch");
        let texts: Vec<&str> = batch.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[test]
    fn empty_input_is_empty_batch() {
        assert!(read_batch("  \n").is_ok_and(|b| b.is_empty()));
        assert!(read_batch("[]").is_ok_and(|b| b.is_empty()));
    }

    #[test]
    fn unrecognized_shapes() {
        for input in ["\"just a string\"", "[1, 2]", "{\"text\": \"a\"}\n42", "[{\"text\": "] {
            let err = read_batch(input).err();
            assert!(matches!(err, Some(Error::BatchShape(_))), "{input}");
            assert!(err.is_some_and(|e| e.is_configuration()), "{input}");
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn json_lines_output() {
        let records = vec![EnrichedRecord {
            message: RawMessage::new("hi"),
            result: ExtractionResult::general(),
        }];
        let mut out = Vec::new();
        write_batch(&records, BatchFormat::JsonLines, &mut out).expect("Failed to write batch");
        let text = String::from_utf8(out).expect("Output is not UTF-8");
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""category":"general""#));
        assert!(text.contains(r#""origin":null"#));
    }
}
