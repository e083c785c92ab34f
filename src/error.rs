// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the PII redactor

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedactorError {
    #[error("Failed to compile pattern '{pattern}': {source}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to compile pattern set: {0}")]
    PatternSet(regex::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The record payload is not a JSON object, even after normalization
    #[error("Unparseable payload: {0}")]
    UnparseablePayload(String),
}

pub type Result<T> = std::result::Result<T, RedactorError>;
