// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Regex pattern compilation for PII detection
// Uses RegexSet so one pass over a field answers every detector at once

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::config::{PIICategory, RedactorConfig};
use super::detector::CategorySet;
use crate::error::{RedactorError, Result};

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: PIICategory,
    pub regex: Regex,
    pub description: &'static str,
}

/// The immutable detector set shared by every record evaluation
#[derive(Debug, Clone)]
pub struct DetectorSet {
    pub regex_set: RegexSet,
    pub patterns: Vec<CompiledPattern>,
}

/// Pattern definitions (category, pattern, description)
type PatternDef = (PIICategory, &'static str, &'static str);

// Standalone detectors, strongest first
static STANDALONE_PATTERNS: Lazy<Vec<PatternDef>> = Lazy::new(|| {
    vec![
        (PIICategory::Phone, r"\b\d{10}\b", "10 digit phone number"),
        (PIICategory::NationalId, r"\b\d{12}\b", "12 digit national ID"),
        (
            PIICategory::PassportLike,
            r"\b[A-Z]\d{7}\b",
            "Passport number",
        ),
        // The provider must be a single dotless word, otherwise this is an email.
        // Group 1 is the handle without its delimiters.
        (
            PIICategory::PaymentHandle,
            r"(?:^|[^\w.@-])([\w.-]+@[A-Za-z][A-Za-z0-9]*)(?:$|[^\w.@-]|\.(?:\s|$))",
            "Payment handle",
        ),
    ]
});

// Combinatorial detectors, in overwrite order
static COMBINATORIAL_PATTERNS: Lazy<Vec<PatternDef>> = Lazy::new(|| {
    vec![
        (
            PIICategory::PersonName,
            r"\b[A-Z][a-z]+ [A-Z][a-z]+\b",
            "First and last name",
        ),
        (
            PIICategory::EmailAddress,
            r"\b[\w.%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            "Email address",
        ),
        (
            PIICategory::PostalAddress,
            r"\d{1,4} [\w\s]+, [\w\s]+, \d{6}",
            "Street address with 6 digit postal code",
        ),
        (
            PIICategory::IpAddress,
            r"\b\d{1,3}(?:\.\d{1,3}){3}\b",
            "IPv4 address",
        ),
    ]
});

/// Compile the enabled detectors into a [`DetectorSet`]
pub fn compile_patterns(config: &RedactorConfig) -> Result<DetectorSet> {
    let mut pattern_strings = Vec::new();
    let mut patterns = Vec::new();

    for (category, pattern, description) in STANDALONE_PATTERNS
        .iter()
        .chain(COMBINATORIAL_PATTERNS.iter())
    {
        if !config.is_enabled(*category) {
            continue;
        }
        let regex = Regex::new(pattern).map_err(|source| RedactorError::PatternCompile {
            pattern: pattern.to_string(),
            source,
        })?;
        pattern_strings.push(*pattern);
        patterns.push(CompiledPattern {
            category: *category,
            regex,
            description: *description,
        });
    }

    // All detectors disabled is a valid (if useless) configuration
    let regex_set = if pattern_strings.is_empty() {
        RegexSet::empty()
    } else {
        RegexSet::new(&pattern_strings).map_err(RedactorError::PatternSet)?
    };

    Ok(DetectorSet {
        regex_set,
        patterns,
    })
}

impl DetectorSet {
    /// Every enabled category whose pattern occurs anywhere in `text`
    pub fn matches(&self, text: &str) -> CategorySet {
        self.regex_set
            .matches(text)
            .iter()
            .map(|idx| self.patterns[idx].category)
            .collect()
    }

    /// Categories this set can detect
    pub fn categories(&self) -> CategorySet {
        self.patterns.iter().map(|p| p.category).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
