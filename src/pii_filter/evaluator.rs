// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Record-level verdict: runs the field classifier over every field and
// combines per-field signals with the two-tier scoring rule

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::config::RedactorConfig;
use super::detector::{classify_field, stringify_value, CategorySet};
use super::patterns::DetectorSet;

/// A parsed record: field name to JSON value, in payload order
pub type Record = IndexMap<String, Value>;

/// Verdict for one record plus its redacted fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordVerdict {
    pub is_pii: bool,
    /// Every non-null field, masked where a detector fired
    pub fields: IndexMap<String, String>,
}

/// Per-record scoring accumulator
#[derive(Debug, Default)]
struct ScoringState {
    is_pii: bool,
    single_combo_hit_count: usize,
}

impl ScoringState {
    /// Fold one field's categories into the verdict. Never clears `is_pii`.
    fn observe(&mut self, matched: CategorySet) {
        if matched.standalone_count() > 0 {
            self.is_pii = true;
        }
        match matched.combinatorial_count() {
            0 => {}
            1 => self.single_combo_hit_count += 1,
            _ => self.is_pii = true,
        }
    }

    /// Two weak signals in different fields count as one strong signal
    fn finish(self) -> bool {
        self.is_pii || self.single_combo_hit_count >= 2
    }
}

/// Evaluate one record against the detector set
///
/// Every non-null field is classified and written to the output, even after
/// the verdict is already positive. No state survives the call.
pub fn evaluate_record(
    record: &Record,
    patterns: &DetectorSet,
    config: &RedactorConfig,
) -> RecordVerdict {
    let mut state = ScoringState::default();
    let mut fields = IndexMap::with_capacity(record.len());

    for (key, value) in record {
        let Some(text) = stringify_value(value) else {
            continue;
        };

        let outcome = classify_field(&text, patterns, config);
        if config.log_detections && outcome.is_modified() {
            debug!(
                field = %key,
                categories = ?outcome.matched.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                "PII detected in field"
            );
        }

        state.observe(outcome.matched);
        fields.insert(key.clone(), outcome.masked_value);
    }

    RecordVerdict {
        is_pii: state.finish(),
        fields,
    }
}
