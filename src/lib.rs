// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Deterministic PII detection and redaction for structured data records

//! Classifies the fields of structured records for personally-identifiable
//! information and produces a redacted copy plus a per-record verdict.
//!
//! # Examples
//!
//! ```
//! use pii_redactor::{Redactor, RedactorConfig};
//!
//! let redactor = Redactor::new(RedactorConfig::default()).unwrap();
//!
//! // One name alone is a weak signal
//! let outcome = redactor.redact_payload(r#"{"name": "John Smith"}"#);
//! assert!(!outcome.is_pii);
//! assert_eq!(outcome.text, r#"{"name":"JXXX SXXXX"}"#);
//!
//! // A name and an email in different fields flag the record
//! let outcome = redactor.redact_payload(
//!     r#"{"name": "John Smith", "email": "john.smith@example.com"}"#,
//! );
//! assert!(outcome.is_pii);
//! ```

pub mod error;
pub mod pii_filter;

pub use error::{RedactorError, Result};
pub use pii_filter::batch::RedactedRecord;
pub use pii_filter::config::{MaskingStrategy, PIICategory, RedactorConfig, Tier};
pub use pii_filter::detector::{CategorySet, Detection, FieldOutcome};
pub use pii_filter::evaluator::{Record, RecordVerdict};
pub use pii_filter::payload::PayloadOutcome;
pub use pii_filter::Redactor;
