// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Serialized record payloads: normalization, parsing and the fail-safe
// verdict for payloads that cannot be parsed

use serde::Serialize;
use tracing::warn;

use super::config::RedactorConfig;
use super::evaluator::{evaluate_record, Record};
use super::patterns::DetectorSet;
use crate::error::{RedactorError, Result};

/// Redacted payload text and its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadOutcome {
    pub text: String,
    pub is_pii: bool,
    /// Set when the payload could not be parsed and was passed through
    #[serde(skip)]
    pub unparseable: bool,
}

/// Undo spreadsheet-style quoting: `""` becomes `"` and the enclosing
/// quotes are stripped
pub fn normalize_payload(raw: &str) -> String {
    raw.replace("\"\"", "\"").trim_matches('"').to_string()
}

/// Parse a payload into a record
///
/// Valid JSON is parsed as is. Only a payload that fails to parse is
/// normalized and tried again, so `""` inside valid JSON stays an empty string.
pub fn parse_record(raw: &str) -> Result<Record> {
    if let Ok(record) = serde_json::from_str::<Record>(raw) {
        return Ok(record);
    }
    let normalized = normalize_payload(raw);
    serde_json::from_str::<Record>(&normalized)
        .map_err(|e| RedactorError::UnparseablePayload(e.to_string()))
}

/// Redact one serialized record
///
/// A payload that does not parse into a JSON object is flagged as PII and
/// returned exactly as received.
pub fn redact_payload(raw: &str, patterns: &DetectorSet, config: &RedactorConfig) -> PayloadOutcome {
    let record = match parse_record(raw) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, len = raw.len(), "Passing unparseable payload through flagged");
            return PayloadOutcome {
                text: raw.to_string(),
                is_pii: true,
                unparseable: true,
            };
        }
    };

    let verdict = evaluate_record(&record, patterns, config);
    match serde_json::to_string(&verdict.fields) {
        Ok(text) => PayloadOutcome {
            text,
            is_pii: verdict.is_pii,
            unparseable: false,
        },
        Err(e) => {
            warn!(error = %e, "Failed to serialize redacted record");
            PayloadOutcome {
                text: raw.to_string(),
                is_pii: true,
                unparseable: false,
            }
        }
    }
}
