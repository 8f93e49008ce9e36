//! Template domain — reusable envelope skeletons.

pub mod client;

use crate::domain::envelope::{
    Document, SignHereTab, Tab, TabPosition, TabSet, DEFAULT_SIGNATURE_X, DEFAULT_SIGNATURE_Y,
};
use crate::error::ValidationError;
use serde::Serialize;

pub use client::Templates;

/// A role placeholder inside a template: no concrete person, just the slot
/// recipients are bound into at send time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSigner {
    pub recipient_id: String,
    pub routing_order: String,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<TabSet>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecipients {
    pub signers: Vec<RoleSigner>,
}

/// A template payload, ready to POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    pub email_subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
    pub documents: Vec<Document>,
    pub recipients: RoleRecipients,
}

/// Accumulates a template: documents plus one signer role carrying a default
/// signature tab on the first document.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    email_subject: String,
    description: Option<String>,
    email_blurb: Option<String>,
    role_name: String,
    documents: Vec<Document>,
}

impl TemplateBuilder {
    pub fn new(email_subject: impl Into<String>) -> Self {
        Self {
            email_subject: email_subject.into(),
            description: None,
            email_blurb: None,
            role_name: "Signer".to_string(),
            documents: Vec::new(),
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }

    pub fn email_blurb(&mut self, blurb: impl Into<String>) -> &mut Self {
        self.email_blurb = Some(blurb.into());
        self
    }

    pub fn role_name(&mut self, role_name: impl Into<String>) -> &mut Self {
        self.role_name = role_name.into();
        self
    }

    /// Add a document; ids are sequential strings in insertion order, as for
    /// envelopes.
    pub fn add_document(&mut self, document_base64: impl Into<String>, file_name: &str) -> u32 {
        let id = self.documents.len() as u32 + 1;
        self.documents
            .push(Document::from_file_name(document_base64, id, file_name));
        id
    }

    pub fn build(self) -> TemplateDefinition {
        let mut tabs = TabSet::new();
        tabs.push(Tab::SignHere(SignHereTab::new(
            "1",
            1,
            TabPosition::Absolute {
                x: DEFAULT_SIGNATURE_X,
                y: DEFAULT_SIGNATURE_Y,
            },
        )));

        TemplateDefinition {
            email_subject: self.email_subject,
            description: self.description,
            email_blurb: self.email_blurb,
            documents: self.documents,
            recipients: RoleRecipients {
                signers: vec![RoleSigner {
                    recipient_id: "1".to_string(),
                    routing_order: "1".to_string(),
                    role_name: self.role_name,
                    tabs: Some(tabs),
                }],
            },
        }
    }
}

/// Fields a template update may change. At least one must be set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TemplateUpdate {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.email_subject.is_none() && self.description.is_none() && self.name.is_none() {
            return Err(ValidationError::NoUpdateFields {
                accepted: "emailSubject, description, name".to_string(),
            });
        }
        Ok(())
    }
}

/// Filters accepted by the template listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct TemplateFilters {
    pub search_text: Option<String>,
    pub folder_id: Option<String>,
    pub shared_by_me: bool,
}

impl TemplateFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search_text) = &self.search_text {
            query.push(("search_text", search_text.clone()));
        }
        if let Some(folder_id) = &self.folder_id {
            query.push(("folder_ids", folder_id.clone()));
        }
        if self.shared_by_me {
            query.push(("shared_by_me", "true".to_string()));
        }
        query
    }
}
