// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Redactor: compiled detector set plus configuration behind one handle

use std::collections::HashMap;

use super::batch::{redact_batch, RedactedRecord};
use super::config::{PIICategory, RedactorConfig};
use super::detector::{detect_pii, Detection};
use super::evaluator::{evaluate_record, Record, RecordVerdict};
use super::patterns::{compile_patterns, DetectorSet};
use super::payload::{redact_payload, PayloadOutcome};
use crate::error::Result;

/// Main entry point for redacting records
///
/// Immutable after construction, so one instance can be shared across
/// worker threads without locking.
///
/// # Example
/// ```
/// use pii_redactor::Redactor;
///
/// let redactor = Redactor::with_defaults().unwrap();
/// let outcome = redactor.redact_payload(r#"{"phone": "9876543210"}"#);
/// assert!(outcome.is_pii);
/// assert_eq!(outcome.text, r#"{"phone":"98XXXXXX10"}"#);
/// ```
#[derive(Debug, Clone)]
pub struct Redactor {
    patterns: DetectorSet,
    config: RedactorConfig,
}

impl Redactor {
    /// Compile the detectors enabled in `config`
    pub fn new(config: RedactorConfig) -> Result<Self> {
        let patterns = compile_patterns(&config)?;
        Ok(Self { patterns, config })
    }

    /// All detectors enabled, default opaque token
    pub fn with_defaults() -> Result<Self> {
        Self::new(RedactorConfig::default())
    }

    pub fn config(&self) -> &RedactorConfig {
        &self.config
    }

    pub fn detector_set(&self) -> &DetectorSet {
        &self.patterns
    }

    /// Evaluate an already parsed record
    pub fn evaluate(&self, record: &Record) -> RecordVerdict {
        evaluate_record(record, &self.patterns, &self.config)
    }

    /// Normalize, parse and evaluate a serialized record
    pub fn redact_payload(&self, raw: &str) -> PayloadOutcome {
        redact_payload(raw, &self.patterns, &self.config)
    }

    /// Match spans per category in free text
    pub fn detect(&self, text: &str) -> HashMap<PIICategory, Vec<Detection>> {
        detect_pii(text, &self.patterns)
    }

    /// Redact `(record_id, payload)` pairs, preserving input order
    pub fn redact_batch<I>(&self, records: I) -> Vec<RedactedRecord>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        redact_batch(records, self)
    }
}
