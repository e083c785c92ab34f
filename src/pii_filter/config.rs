// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the PII redactor

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque token written over values that get no partial reveal
pub const DEFAULT_REDACTION_TEXT: &str = "[REDACTED_PII]";

/// PII categories the detector set knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PIICategory {
    Phone,
    NationalId,
    PassportLike,
    PaymentHandle,
    PersonName,
    EmailAddress,
    PostalAddress,
    IpAddress,
}

/// How strongly a category indicates a sensitive record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// One hit flags the record
    Standalone,
    /// Needs a second independent hit
    Combinatorial,
}

/// Masking strategies for detected PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingStrategy {
    Redact,       // Replace with the opaque token
    PartialPhone, // 98XXXXXX10
    PartialName,  // JXXX SXXXX
    PartialEmail, // jo***@example.com
}

impl PIICategory {
    /// Every category, in detector evaluation order
    pub const ALL: [PIICategory; 8] = [
        PIICategory::Phone,
        PIICategory::NationalId,
        PIICategory::PassportLike,
        PIICategory::PaymentHandle,
        PIICategory::PersonName,
        PIICategory::EmailAddress,
        PIICategory::PostalAddress,
        PIICategory::IpAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PIICategory::Phone => "phone",
            PIICategory::NationalId => "national_id",
            PIICategory::PassportLike => "passport_like",
            PIICategory::PaymentHandle => "payment_handle",
            PIICategory::PersonName => "person_name",
            PIICategory::EmailAddress => "email_address",
            PIICategory::PostalAddress => "postal_address",
            PIICategory::IpAddress => "ip_address",
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            PIICategory::Phone
            | PIICategory::NationalId
            | PIICategory::PassportLike
            | PIICategory::PaymentHandle => Tier::Standalone,
            PIICategory::PersonName
            | PIICategory::EmailAddress
            | PIICategory::PostalAddress
            | PIICategory::IpAddress => Tier::Combinatorial,
        }
    }

    pub fn mask_strategy(&self) -> MaskingStrategy {
        match self {
            PIICategory::Phone => MaskingStrategy::PartialPhone,
            PIICategory::PersonName => MaskingStrategy::PartialName,
            PIICategory::EmailAddress => MaskingStrategy::PartialEmail,
            _ => MaskingStrategy::Redact,
        }
    }

    pub(crate) fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for PIICategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the redactor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedactorConfig {
    // Detection flags
    pub detect_phone: bool,
    pub detect_national_id: bool,
    pub detect_passport: bool,
    pub detect_payment_handle: bool,
    pub detect_person_name: bool,
    pub detect_email: bool,
    pub detect_postal_address: bool,
    pub detect_ip_address: bool,

    // Masking configuration
    pub redaction_text: String,

    // Behavior configuration
    pub log_detections: bool,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            detect_phone: true,
            detect_national_id: true,
            detect_passport: true,
            detect_payment_handle: true,
            detect_person_name: true,
            detect_email: true,
            detect_postal_address: true,
            detect_ip_address: true,

            redaction_text: DEFAULT_REDACTION_TEXT.to_string(),

            log_detections: true,
        }
    }
}

impl RedactorConfig {
    /// Load configuration from a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the detector for `category` is enabled
    pub fn is_enabled(&self, category: PIICategory) -> bool {
        match category {
            PIICategory::Phone => self.detect_phone,
            PIICategory::NationalId => self.detect_national_id,
            PIICategory::PassportLike => self.detect_passport,
            PIICategory::PaymentHandle => self.detect_payment_handle,
            PIICategory::PersonName => self.detect_person_name,
            PIICategory::EmailAddress => self.detect_email,
            PIICategory::PostalAddress => self.detect_postal_address,
            PIICategory::IpAddress => self.detect_ip_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedactorError;

    #[test]
    fn test_category_as_str() {
        assert_eq!(PIICategory::Phone.as_str(), "phone");
        assert_eq!(PIICategory::NationalId.as_str(), "national_id");
        assert_eq!(PIICategory::IpAddress.to_string(), "ip_address");
    }

    #[test]
    fn test_tiers() {
        let standalone: Vec<_> = PIICategory::ALL
            .iter()
            .filter(|c| c.tier() == Tier::Standalone)
            .collect();
        assert_eq!(standalone.len(), 4);
        assert_eq!(PIICategory::PaymentHandle.tier(), Tier::Standalone);
        assert_eq!(PIICategory::EmailAddress.tier(), Tier::Combinatorial);
    }

    #[test]
    fn test_mask_strategies() {
        assert_eq!(
            PIICategory::Phone.mask_strategy(),
            MaskingStrategy::PartialPhone
        );
        assert_eq!(
            PIICategory::PostalAddress.mask_strategy(),
            MaskingStrategy::Redact
        );
    }

    #[test]
    fn test_default_config() {
        let config = RedactorConfig::default();
        assert!(PIICategory::ALL.iter().all(|c| config.is_enabled(*c)));
        assert_eq!(config.redaction_text, "[REDACTED_PII]");
        assert!(config.log_detections);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            RedactorConfig::from_json(r#"{"detect_ip_address": false, "redaction_text": "***"}"#)
                .unwrap();
        assert!(!config.is_enabled(PIICategory::IpAddress));
        assert!(config.is_enabled(PIICategory::Phone));
        assert_eq!(config.redaction_text, "***");
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = RedactorConfig::from_json(r#"{"detect_ssn": true}"#).unwrap_err();
        assert!(matches!(err, RedactorError::InvalidConfig(_)));
    }
}
