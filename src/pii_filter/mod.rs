// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII Filter - record-level detection and redaction
//
// - RegexSet answers every detector for a field in one pass
// - Standalone categories flag a record on their own
// - Combinatorial categories need two independent hits

pub mod batch;
pub mod config;
pub mod detector;
pub mod evaluator;
pub mod masking;
pub mod patterns;
pub mod payload;
pub mod redactor;

pub use redactor::Redactor;
