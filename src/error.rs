//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors. Non-2xx responses keep the vendor's error body for
/// diagnosis.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("DocuSign API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Input validation errors, raised before any request is issued.
///
/// Every variant names the offending field so the message can be surfaced
/// to an end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be a valid email address, got \"{value}\"")]
    InvalidEmail { field: String, value: String },

    #[error("{field} must be a valid UUID, got \"{value}\"")]
    InvalidUuid { field: String, value: String },

    #[error("{field} must be a valid URL, got \"{value}\"")]
    InvalidUrl { field: String, value: String },

    #[error("{field} must be an ISO 8601 date, got \"{value}\"")]
    InvalidDate { field: String, value: String },

    #[error(
        "document reference \"{reference}\" is neither a binary attachment name nor base64 content"
    )]
    UnresolvableDocument { reference: String },

    #[error("at least one of {accepted} must be provided")]
    NoUpdateFields { accepted: String },

    #[error("{0}")]
    Other(String),
}
