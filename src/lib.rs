//! # DocuSign SDK
//!
//! A Rust SDK for the DocuSign eSignature REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared helpers, domain payload types and builders, errors,
//!    network URL selection
//! 2. **HTTP** — `DocuSignHttp` with per-endpoint retry policies and offset
//!    pagination
//! 3. **High-Level Client** — `DocuSign` with nested per-resource sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docusign_sdk::prelude::*;
//!
//! let client = DocuSign::builder()
//!     .environment(Environment::Demo)
//!     .account_id("your-account-id")
//!     .access_token("oauth-token")
//!     .build()?;
//!
//! let mut envelope = EnvelopeBuilder::new("Please sign", EnvelopeStatus::Sent);
//! envelope.add_document(base64_pdf, "contract.pdf");
//! envelope.add_signer_with_default_tabs("signer@example.com", "Ada Lovelace");
//!
//! let created = client.envelopes().create(&envelope.build()).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers used across all domains: file extensions, binary
/// attachments, document-source resolution.
pub mod shared;

/// Domain modules (vertical slices): payload types, builders, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Base URL selection (environment + region).
pub mod network;

/// Field validation — the single input gate ahead of every request.
pub mod validate;

/// Per-item batch execution with optional continue-on-failure.
pub mod batch;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport with retry policies and pagination.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DocuSign` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Envelope domain
    pub use crate::domain::envelope::{
        generate_client_user_id, CarbonCopy, CustomFields, Document, DownloadedDocument,
        EnvelopeBuilder, EnvelopeDefinition, EnvelopeFilters, EnvelopeStatus, FormulaTab, ListTab,
        MergeField, Notification, RadioGroupTab, RecipientAuth, Recipients, SignHereTab, Signer,
        Tab, TabPosition, TabSet, TemplateEnvelope, TemplateRole, TextCustomField, TextTab,
        DEFAULT_SIGNATURE_X, DEFAULT_SIGNATURE_Y,
    };

    // Other domains
    pub use crate::domain::brand::{BrandDefinition, BrandUpdate};
    pub use crate::domain::bulk_send::BulkSendList;
    pub use crate::domain::doc_gen::DocGenField;
    pub use crate::domain::envelope_lock::MAX_LOCK_DURATION_SECS;
    pub use crate::domain::power_form::PowerFormDefinition;
    pub use crate::domain::signing_group::GroupMember;
    pub use crate::domain::template::{TemplateBuilder, TemplateFilters, TemplateUpdate};

    // Shared helpers
    pub use crate::shared::{
        file_extension, resolve_document_base64, Attachments, BinaryAttachment,
    };

    // Validation
    pub use crate::validate::{validate_field, FieldKind};

    // Batch execution
    pub use crate::batch::{for_each_item, ItemFailure, ItemOutcome};

    // Errors
    pub use crate::error::{HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::{Environment, Region};

    // Client + sub-clients
    pub use crate::client::{
        BrandsClient, BulkSendClient, DocuSign, DocuSignBuilder, DocumentGenerationClient,
        EnvelopeLocksClient, EnvelopesClient, FoldersClient, PowerFormsClient,
        SigningGroupsClient, TemplatesClient,
    };
    pub use crate::http::{RetryConfig, RetryPolicy};
}
