//! High-level client — `DocuSign` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::domain::brand::client::Brands;
use crate::domain::bulk_send::client::BulkSend;
use crate::domain::doc_gen::client::DocumentGeneration;
use crate::domain::envelope::client::Envelopes;
use crate::domain::envelope_lock::client::EnvelopeLocks;
use crate::domain::folder::client::Folders;
use crate::domain::power_form::client::PowerForms;
use crate::domain::signing_group::client::SigningGroups;
use crate::domain::template::client::Templates;
use crate::error::{SdkError, ValidationError};
use crate::http::DocuSignHttp;
use crate::network::{self, Environment, Region};

// Re-export sub-client types for convenience.
pub use crate::domain::brand::client::Brands as BrandsClient;
pub use crate::domain::bulk_send::client::BulkSend as BulkSendClient;
pub use crate::domain::doc_gen::client::DocumentGeneration as DocumentGenerationClient;
pub use crate::domain::envelope::client::Envelopes as EnvelopesClient;
pub use crate::domain::envelope_lock::client::EnvelopeLocks as EnvelopeLocksClient;
pub use crate::domain::folder::client::Folders as FoldersClient;
pub use crate::domain::power_form::client::PowerForms as PowerFormsClient;
pub use crate::domain::signing_group::client::SigningGroups as SigningGroupsClient;
pub use crate::domain::template::client::Templates as TemplatesClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors per resource: `client.envelopes()`,
/// `client.templates()`, etc.
pub struct DocuSign {
    pub(crate) http: DocuSignHttp,
}

impl DocuSign {
    pub fn builder() -> DocuSignBuilder {
        DocuSignBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn envelopes(&self) -> Envelopes<'_> {
        Envelopes { client: self }
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }

    pub fn bulk_send(&self) -> BulkSend<'_> {
        BulkSend { client: self }
    }

    pub fn power_forms(&self) -> PowerForms<'_> {
        PowerForms { client: self }
    }

    pub fn folders(&self) -> Folders<'_> {
        Folders { client: self }
    }

    pub fn signing_groups(&self) -> SigningGroups<'_> {
        SigningGroups { client: self }
    }

    pub fn brands(&self) -> Brands<'_> {
        Brands { client: self }
    }

    pub fn envelope_locks(&self) -> EnvelopeLocks<'_> {
        EnvelopeLocks { client: self }
    }

    pub fn document_generation(&self) -> DocumentGeneration<'_> {
        DocumentGeneration { client: self }
    }

    /// The account-scoped URL prefix requests are issued against.
    pub fn account_base(&self) -> &str {
        self.http.account_base()
    }

    /// Replace the OAuth access token (e.g. after a refresh).
    pub async fn set_access_token(&self, token: impl Into<String>) {
        self.http.set_access_token(Some(token.into())).await;
    }

    pub async fn clear_access_token(&self) {
        self.http.clear_access_token().await;
    }
}

impl Clone for DocuSign {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DocuSignBuilder {
    environment: Environment,
    region: Region,
    base_url: Option<String>,
    account_id: Option<String>,
    access_token: Option<String>,
}

impl Default for DocuSignBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::Demo,
            region: Region::Na,
            base_url: None,
            account_id: None,
            access_token: None,
        }
    }
}

impl DocuSignBuilder {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Override the computed base URL entirely (e.g. for a proxy).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// The API account id every request is scoped under. Required.
    pub fn account_id(mut self, account_id: &str) -> Self {
        self.account_id = Some(account_id.to_string());
        self
    }

    /// Pre-set the OAuth access token on construction.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<DocuSign, SdkError> {
        let account_id = self
            .account_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ValidationError::Required {
                field: "Account ID".to_string(),
            })?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| network::base_url(self.environment, self.region));

        Ok(DocuSign {
            http: DocuSignHttp::new(&base_url, &account_id, self.access_token),
        })
    }
}
