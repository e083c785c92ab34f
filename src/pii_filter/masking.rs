// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking strategies for detected PII

use super::config::MaskingStrategy;

const PHONE_FILLER: &str = "XXXXXX";

/// Apply a masking strategy to a whole field value
///
/// # Arguments
/// * `value` - Textual field value that matched a detector
/// * `strategy` - Strategy of the matching category
/// * `redaction_text` - Opaque token used for `Redact` and as the fallback
///
/// # Returns
/// The masked value. Partial masks fall back to the opaque token when the
/// value does not have the shape they need, so masking never fails.
pub fn apply_mask(value: &str, strategy: MaskingStrategy, redaction_text: &str) -> String {
    let masked = match strategy {
        MaskingStrategy::Redact => None,
        MaskingStrategy::PartialPhone => mask_phone(value),
        MaskingStrategy::PartialName => mask_name(value),
        MaskingStrategy::PartialEmail => mask_email(value),
    };
    masked.unwrap_or_else(|| redaction_text.to_string())
}

/// First two and last two characters around a fixed filler: 98XXXXXX10
fn mask_phone(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 4 {
        return None;
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    Some(format!("{}{}{}", head, PHONE_FILLER, tail))
}

/// Initials of the first two words: JXXX SXXXX
fn mask_name(value: &str) -> Option<String> {
    let mut words = value.split_whitespace();
    let first = words.next()?.chars().next()?;
    let last = words.next()?.chars().next()?;
    Some(format!("{}XXX {}XXXX", first, last))
}

/// First two characters of the local part plus the domain: jo***@example.com
///
/// Text after the domain is dropped so nothing trailing the address survives
/// the overwrite.
fn mask_email(value: &str) -> Option<String> {
    let (local, rest) = value.split_once('@')?;
    if rest.contains('@') {
        return None;
    }
    let domain_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '-'))
        .unwrap_or(rest.len());
    if domain_len == 0 {
        return None;
    }
    let head: String = local.chars().take(2).collect();
    Some(format!("{}***@{}", head, &rest[..domain_len]))
}
