// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Field classification: decides per field value which categories fired and
// what the value is overwritten with

use serde_json::Value;
use std::collections::HashMap;

use super::config::{PIICategory, RedactorConfig, Tier};
use super::masking::apply_mask;
use super::patterns::DetectorSet;

/// Standalone checks in precedence order. The first group with a hit wins
/// and the rest of the pass is skipped.
const STANDALONE_CHECKS: &[&[PIICategory]] = &[
    &[PIICategory::Phone],
    &[
        PIICategory::NationalId,
        PIICategory::PassportLike,
        PIICategory::PaymentHandle,
    ],
];

/// Combinatorial checks in overwrite order. Every group with a hit writes
/// its mask; a group counts once however many of its members fired.
const COMBINATORIAL_CHECKS: &[&[PIICategory]] = &[
    &[PIICategory::PersonName],
    &[PIICategory::EmailAddress],
    &[PIICategory::PostalAddress, PIICategory::IpAddress],
];

/// Small copyable set of categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, category: PIICategory) {
        self.0 |= category.bit();
    }

    pub fn contains(&self, category: PIICategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in detector evaluation order
    pub fn iter(&self) -> impl Iterator<Item = PIICategory> {
        let set = *self;
        PIICategory::ALL.into_iter().filter(move |c| set.contains(*c))
    }

    pub fn standalone_count(&self) -> usize {
        self.count_tier(Tier::Standalone)
    }

    pub fn combinatorial_count(&self) -> usize {
        self.count_tier(Tier::Combinatorial)
    }

    fn count_tier(&self, tier: Tier) -> usize {
        self.iter().filter(|c| c.tier() == tier).count()
    }

    /// First member of `group`, if any
    fn first_of(&self, group: &[PIICategory]) -> Option<PIICategory> {
        group.iter().copied().find(|c| self.contains(*c))
    }
}

impl FromIterator<PIICategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = PIICategory>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Result of classifying one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub masked_value: String,
    pub matched: CategorySet,
}

impl FieldOutcome {
    pub fn is_modified(&self) -> bool {
        !self.matched.is_empty()
    }

    fn write(&mut self, text: &str, category: PIICategory, config: &RedactorConfig) {
        self.masked_value = apply_mask(text, category.mask_strategy(), &config.redaction_text);
        self.matched.insert(category);
    }
}

/// A single PII match span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub value: String,
    pub start: usize,
    pub end: usize,
    /// Description of the pattern that matched
    pub description: &'static str,
}

/// Textual form of a field value; `None` for null, which is never classified
pub fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Classify one field value in two passes
///
/// 1. Standalone pass: Phone, else any of NationalId/PassportLike/PaymentHandle.
///    At most one category and one mask.
/// 2. Combinatorial pass: PersonName, EmailAddress, PostalAddress/IpAddress.
///    Runs regardless of pass 1; each hit overwrites the value, so the last
///    hit in this order decides the final masked value.
///
/// Masks are always computed from the original text. A final mask that
/// still matches a detector is replaced by the opaque token.
pub fn classify_field(text: &str, patterns: &DetectorSet, config: &RedactorConfig) -> FieldOutcome {
    let hits = patterns.matches(text);
    let mut outcome = FieldOutcome {
        masked_value: text.to_string(),
        matched: CategorySet::new(),
    };

    if let Some(category) = STANDALONE_CHECKS
        .iter()
        .find_map(|group| hits.first_of(group))
    {
        outcome.write(text, category, config);
    }

    for group in COMBINATORIAL_CHECKS {
        if let Some(category) = hits.first_of(group) {
            outcome.write(text, category, config);
        }
    }

    // A partial mask keeps original characters; if those still match a
    // detector the mask would flag again on the redacted output
    if outcome.is_modified() && !patterns.matches(&outcome.masked_value).is_empty() {
        outcome.masked_value = config.redaction_text.clone();
    }

    outcome
}

/// Every match span per category, for diagnostics and benchmarks
pub fn detect_pii(text: &str, patterns: &DetectorSet) -> HashMap<PIICategory, Vec<Detection>> {
    let mut detections: HashMap<PIICategory, Vec<Detection>> = HashMap::new();

    let matches = patterns.regex_set.matches(text);

    for pattern_idx in matches.iter() {
        let pattern = &patterns.patterns[pattern_idx];

        for capture in pattern.regex.captures_iter(text) {
            // Prefer the inner group for patterns that consume delimiters
            if let Some(mat) = capture.get(1).or_else(|| capture.get(0)) {
                detections
                    .entry(pattern.category)
                    .or_default()
                    .push(Detection {
                        value: mat.as_str().to_string(),
                        start: mat.start(),
                        end: mat.end(),
                        description: pattern.description,
                    });
            }
        }
    }

    detections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pii_filter::patterns::compile_patterns;
    use serde_json::json;

    fn classify(text: &str) -> FieldOutcome {
        let config = RedactorConfig::default();
        let patterns = compile_patterns(&config).unwrap();
        classify_field(text, &patterns, &config)
    }

    #[test]
    fn test_category_set() {
        let mut set = CategorySet::new();
        assert!(set.is_empty());

        set.insert(PIICategory::EmailAddress);
        set.insert(PIICategory::Phone);
        set.insert(PIICategory::Phone);

        assert_eq!(set.len(), 2);
        assert_eq!(set.standalone_count(), 1);
        assert_eq!(set.combinatorial_count(), 1);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![PIICategory::Phone, PIICategory::EmailAddress]
        );
    }

    #[test]
    fn test_phone_field() {
        let outcome = classify("9876543210");
        assert_eq!(outcome.masked_value, "98XXXXXX10");
        assert!(outcome.matched.contains(PIICategory::Phone));
        assert_eq!(outcome.matched.len(), 1);
    }

    #[test]
    fn test_national_id_field() {
        let outcome = classify("123456789012");
        assert_eq!(outcome.masked_value, "[REDACTED_PII]");
        assert!(outcome.matched.contains(PIICategory::NationalId));
    }

    #[test]
    fn test_standalone_pass_contributes_one_category() {
        // Phone short-circuits the passport check
        let outcome = classify("9876543210 A1234567");
        assert_eq!(outcome.matched.standalone_count(), 1);
        assert!(outcome.matched.contains(PIICategory::Phone));
        assert!(!outcome.matched.contains(PIICategory::PassportLike));

        let outcome = classify("A1234567 ravi@okaxis");
        assert_eq!(outcome.matched.standalone_count(), 1);
        assert!(outcome.matched.contains(PIICategory::PassportLike));
    }

    #[test]
    fn test_clean_field_is_untouched() {
        let outcome = classify("premium plan");
        assert_eq!(outcome.masked_value, "premium plan");
        assert!(!outcome.is_modified());
    }

    #[test]
    fn test_last_combinatorial_writer_wins() {
        let outcome = classify("John Smith john.smith@example.com");
        assert_eq!(outcome.matched.combinatorial_count(), 2);
        assert_eq!(outcome.masked_value, "Jo***@example.com");
    }

    #[test]
    fn test_combinatorial_overrides_standalone_mask() {
        let outcome = classify("John Smith 9876543210");
        assert!(outcome.matched.contains(PIICategory::Phone));
        assert!(outcome.matched.contains(PIICategory::PersonName));
        assert_eq!(outcome.masked_value, "JXXX SXXXX");
    }

    #[test]
    fn test_address_and_ip_count_once() {
        let outcome = classify("12 MG Road, Bengaluru, 560001 via 10.0.0.1");
        assert_eq!(outcome.matched.combinatorial_count(), 1);
        assert!(outcome.matched.contains(PIICategory::PostalAddress));
        assert_eq!(outcome.masked_value, "[REDACTED_PII]");
    }

    #[test]
    fn test_mask_that_still_matches_falls_back_to_token() {
        // Phone mask keeps the trailing "@b", which reads as a payment handle
        let outcome = classify("a 9876543210 z@b");
        assert!(outcome.matched.contains(PIICategory::Phone));
        assert_eq!(outcome.masked_value, "[REDACTED_PII]");

        // Email mask keeps a domain holding a phone-shaped run
        let outcome = classify("a@9876543210.ab");
        assert!(outcome.matched.contains(PIICategory::EmailAddress));
        assert_eq!(outcome.masked_value, "[REDACTED_PII]");
    }

    #[test]
    fn test_stringify_value() {
        assert_eq!(stringify_value(&json!(null)), None);
        assert_eq!(stringify_value(&json!("text")), Some("text".to_string()));
        assert_eq!(
            stringify_value(&json!(9876543210u64)),
            Some("9876543210".to_string())
        );
        assert_eq!(stringify_value(&json!(true)), Some("true".to_string()));
        assert_eq!(
            stringify_value(&json!({"ip": "10.0.0.1"})),
            Some(r#"{"ip":"10.0.0.1"}"#.to_string())
        );
    }

    #[test]
    fn test_detect_pii_spans() {
        let config = RedactorConfig::default();
        let patterns = compile_patterns(&config).unwrap();

        let text = "Call 9876543210 or pay ravi@okaxis";
        let detections = detect_pii(text, &patterns);

        let phone = &detections[&PIICategory::Phone][0];
        assert_eq!(phone.value, "9876543210");
        assert_eq!(&text[phone.start..phone.end], "9876543210");

        let handle = &detections[&PIICategory::PaymentHandle][0];
        assert_eq!(handle.value, "ravi@okaxis");
        assert_eq!(handle.description, "Payment handle");
        assert_eq!(phone.description, "10 digit phone number");
    }
}
