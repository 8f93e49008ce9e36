//! Field validation — the single input gate ahead of every request.
//!
//! Handlers validate with [`validate_field`] before building payloads;
//! everything downstream of this module assumes validated input.

use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Intentionally loose: local@domain.tld with no whitespace. Full RFC 5322
    /// acceptance is the vendor's job.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// Canonical 8-4-4-4-12 hex form only. Braced and URN forms are rejected.
    static ref UUID_RE: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

/// What a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty after trimming.
    Required,
    Email,
    Uuid,
    Url,
    /// ISO 8601: either a plain date (`2024-05-01`) or a full RFC 3339
    /// timestamp.
    Date,
}

/// Validate a single field value, failing with a message that carries the
/// human-readable field label.
///
/// All kinds imply `Required`: an empty value fails before the format check.
pub fn validate_field(label: &str, value: &str, kind: FieldKind) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: label.to_string(),
        });
    }

    match kind {
        FieldKind::Required => Ok(()),
        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail {
                    field: label.to_string(),
                    value: value.to_string(),
                })
            }
        }
        FieldKind::Uuid => {
            if UUID_RE.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidUuid {
                    field: label.to_string(),
                    value: value.to_string(),
                })
            }
        }
        FieldKind::Url => match url::Url::parse(value) {
            Ok(_) => Ok(()),
            Err(_) => Err(ValidationError::InvalidUrl {
                field: label.to_string(),
                value: value.to_string(),
            }),
        },
        FieldKind::Date => {
            let plain = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
            let full = DateTime::parse_from_rfc3339(value).is_ok();
            if plain || full {
                Ok(())
            } else {
                Err(ValidationError::InvalidDate {
                    field: label.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }
}
