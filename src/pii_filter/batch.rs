// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Batch driver: redacts (record_id, payload) pairs in order

use serde::Serialize;
use tracing::info;

use super::redactor::Redactor;

/// One row of redacted output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedRecord {
    pub record_id: String,
    pub redacted_data_json: String,
    pub is_pii: bool,
}

/// Redact every record, one output per input, in input order
///
/// Records that fail to parse are passed through flagged rather than dropped.
pub fn redact_batch<I>(records: I, redactor: &Redactor) -> Vec<RedactedRecord>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut unparseable = 0usize;

    let output: Vec<RedactedRecord> = records
        .into_iter()
        .map(|(record_id, payload)| {
            let outcome = redactor.redact_payload(&payload);
            if outcome.unparseable {
                unparseable += 1;
            }
            RedactedRecord {
                record_id,
                redacted_data_json: outcome.text,
                is_pii: outcome.is_pii,
            }
        })
        .collect();

    info!(
        records = output.len(),
        flagged = output.iter().filter(|r| r.is_pii).count(),
        unparseable,
        "Batch redacted"
    );

    output
}
