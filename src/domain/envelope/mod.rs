//! Envelope domain — documents, recipients, tabs, and the envelope builders.
//!
//! Everything here is pure request shaping: values go in through typed
//! constructors and come out as vendor-shaped JSON via `serde`. Payloads are
//! built immediately before one HTTP call and never mutated after send.

pub mod client;
pub mod tabs;

use crate::shared;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use client::{DownloadedDocument, Envelopes};
pub use tabs::{
    FormulaTab, ListItem, ListTab, MergeField, Radio, RadioGroupTab, SignHereTab, Tab, TabPosition,
    TabSet, TextTab,
};

/// Default x offset for signature tabs placed without an explicit position.
pub const DEFAULT_SIGNATURE_X: u32 = 100;
/// Default y offset for signature tabs placed without an explicit position.
pub const DEFAULT_SIGNATURE_Y: u32 = 150;
/// Vertical distance between the default signature tabs of consecutive
/// signers, so stacked signature lines do not overlap.
pub const SIGNER_TAB_Y_STEP: u32 = 50;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Envelope status as sent in requests: `created` parks a draft, `sent`
/// dispatches immediately, `voided`/`deleted` are update-only transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Created,
    Sent,
    Voided,
    Deleted,
}

impl EnvelopeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeStatus::Created => "created",
            EnvelopeStatus::Sent => "sent",
            EnvelopeStatus::Voided => "voided",
            EnvelopeStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Document ────────────────────────────────────────────────────────────────

/// An uploaded envelope document. Ids are per-envelope sequential strings
/// ("1", "2", …) in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_base64: String,
    pub document_id: String,
    pub name: String,
    pub file_extension: String,
}

impl Document {
    /// The extension is lower-cased; an empty extension falls back to the
    /// default so the vendor can always pick a converter.
    pub fn new(
        document_base64: impl Into<String>,
        document_id: u32,
        name: impl Into<String>,
        file_extension: &str,
    ) -> Self {
        let ext = file_extension.trim().to_lowercase();
        Self {
            document_base64: document_base64.into(),
            document_id: document_id.to_string(),
            name: name.into(),
            file_extension: if ext.is_empty() {
                shared::DEFAULT_FILE_EXTENSION.to_string()
            } else {
                ext
            },
        }
    }

    /// Derive the extension from the file name's final dot-segment.
    pub fn from_file_name(
        document_base64: impl Into<String>,
        document_id: u32,
        name: &str,
    ) -> Self {
        let ext = shared::file_extension(name);
        Self::new(document_base64, document_id, name, &ext)
    }
}

// ─── Recipients ──────────────────────────────────────────────────────────────

/// Additional identity verification demanded of a signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientAuth {
    AccessCode(String),
    Phone(String),
    Sms(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAuthentication {
    pub recip_may_provide_number: String,
    pub sender_provided_numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsAuthentication {
    pub sender_provided_numbers: Vec<String>,
}

/// A signing recipient. `recipient_id` is unique within the envelope's
/// recipient set and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub email: String,
    pub name: String,
    pub recipient_id: String,
    pub routing_order: String,
    /// Marks the signer for embedded signing; required before a recipient
    /// view can be created for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_authentication: Option<PhoneAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_authentication: Option<SmsAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<TabSet>,
}

impl Signer {
    /// Minimal signer block; the four identity fields are set verbatim and
    /// validation stays with the caller.
    pub fn new(email: impl Into<String>, name: impl Into<String>, recipient_id: u32, routing_order: u32) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            recipient_id: recipient_id.to_string(),
            routing_order: routing_order.to_string(),
            client_user_id: None,
            role_name: None,
            access_code: None,
            phone_authentication: None,
            sms_authentication: None,
            tabs: None,
        }
    }

    pub fn with_client_user_id(mut self, client_user_id: impl Into<String>) -> Self {
        self.client_user_id = Some(client_user_id.into());
        self
    }

    /// Mark an already-added signer for embedded signing.
    pub fn set_client_user_id(&mut self, client_user_id: impl Into<String>) {
        self.client_user_id = Some(client_user_id.into());
    }

    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    pub fn with_auth(mut self, auth: RecipientAuth) -> Self {
        match auth {
            RecipientAuth::AccessCode(code) => self.access_code = Some(code),
            RecipientAuth::Phone(number) => {
                self.phone_authentication = Some(PhoneAuthentication {
                    recip_may_provide_number: "true".to_string(),
                    sender_provided_numbers: vec![number],
                });
            }
            RecipientAuth::Sms(number) => {
                self.sms_authentication = Some(SmsAuthentication {
                    sender_provided_numbers: vec![number],
                });
            }
        }
        self
    }

    pub fn push_tab(&mut self, tab: Tab) {
        self.tabs.get_or_insert_with(TabSet::new).push(tab);
    }

    pub fn set_tabs(&mut self, tabs: TabSet) {
        self.tabs = Some(tabs);
    }
}

/// A copy-only recipient. No tabs — carbon copies receive the completed
/// documents but take no action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCopy {
    pub email: String,
    pub name: String,
    pub recipient_id: String,
    pub routing_order: String,
}

impl CarbonCopy {
    pub fn new(email: impl Into<String>, name: impl Into<String>, recipient_id: u32, routing_order: u32) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            recipient_id: recipient_id.to_string(),
            routing_order: routing_order.to_string(),
        }
    }
}

/// The envelope's recipient set. Signers and carbon copies share one id
/// namespace: carbon-copy ids continue the sequence after all signers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub signers: Vec<Signer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub carbon_copies: Vec<CarbonCopy>,
}

/// Role-based recipient binding for template instantiation. Tab placement is
/// pre-baked in the template, so a role only carries tabs when merge fields
/// are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRole {
    pub email: String,
    pub name: String,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<TabSet>,
}

impl TemplateRole {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role_name: role_name.into(),
            tabs: None,
        }
    }

    pub fn with_merge_fields(mut self, fields: Vec<MergeField>) -> Self {
        if !fields.is_empty() {
            let set: TabSet = fields
                .into_iter()
                .map(|f| Tab::Text(f.into_text_tab()))
                .collect();
            self.tabs = Some(set);
        }
        self
    }
}

// ─── Notification / custom fields ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub reminder_enabled: String,
    pub reminder_delay: String,
    pub reminder_frequency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expirations {
    pub expire_enabled: String,
    pub expire_after: String,
    pub expire_warn: String,
}

/// Reminder and expiration settings. Building one always opts out of the
/// account defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub use_account_defaults: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Reminders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expirations: Option<Expirations>,
}

impl Notification {
    pub fn new() -> Self {
        Self {
            use_account_defaults: "false".to_string(),
            reminders: None,
            expirations: None,
        }
    }

    /// Remind after `delay_days`, then every `frequency_days`.
    pub fn with_reminders(mut self, delay_days: u32, frequency_days: u32) -> Self {
        self.reminders = Some(Reminders {
            reminder_enabled: "true".to_string(),
            reminder_delay: delay_days.to_string(),
            reminder_frequency: frequency_days.to_string(),
        });
        self
    }

    /// Expire after `after_days`, warning `warn_days` ahead.
    pub fn with_expiration(mut self, after_days: u32, warn_days: u32) -> Self {
        self.expirations = Some(Expirations {
            expire_enabled: "true".to_string(),
            expire_after: after_days.to_string(),
            expire_warn: warn_days.to_string(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_none() && self.expirations.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCustomField {
    pub field_id: String,
    pub name: String,
    pub value: String,
    pub show: String,
    pub required: String,
}

impl TextCustomField {
    pub fn new(
        field_id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        show: bool,
        required: bool,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            name: name.into(),
            value: value.into(),
            show: if show { "true" } else { "false" }.to_string(),
            required: if required { "true" } else { "false" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFields {
    pub text_custom_fields: Vec<TextCustomField>,
}

// ─── Envelope payloads ───────────────────────────────────────────────────────

/// A document-upload envelope, ready to POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDefinition {
    pub email_subject: String,
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
    pub documents: Vec<Document>,
    pub recipients: Recipients,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reassign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_wet_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_signer_visibility: Option<String>,
}

/// A template-instantiation envelope. Documents and tab placement come from
/// the template; only the role bindings are supplied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEnvelope {
    pub template_id: String,
    pub email_subject: String,
    pub template_roles: Vec<TemplateRole>,
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
}

impl TemplateEnvelope {
    pub fn new(
        template_id: impl Into<String>,
        email_subject: impl Into<String>,
        template_roles: Vec<TemplateRole>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            email_subject: email_subject.into(),
            template_roles,
            status: EnvelopeStatus::Sent,
            email_blurb: None,
        }
    }

    pub fn with_email_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.email_blurb = Some(blurb.into());
        self
    }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Accumulates an envelope payload, assigning document ids and recipient ids
/// sequentially in insertion order. Carbon-copy ids are finalized at
/// [`EnvelopeBuilder::build`] so they always continue the signer sequence.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    email_subject: String,
    status: EnvelopeStatus,
    email_blurb: Option<String>,
    documents: Vec<Document>,
    signers: Vec<Signer>,
    carbon_copies: Vec<(String, String)>,
    notification: Option<Notification>,
    custom_fields: Vec<TextCustomField>,
    brand_id: Option<String>,
    allow_markup: Option<bool>,
    allow_reassign: Option<bool>,
    enable_wet_sign: Option<bool>,
    enforce_signer_visibility: Option<bool>,
}

impl EnvelopeBuilder {
    pub fn new(email_subject: impl Into<String>, status: EnvelopeStatus) -> Self {
        Self {
            email_subject: email_subject.into(),
            status,
            email_blurb: None,
            documents: Vec::new(),
            signers: Vec::new(),
            carbon_copies: Vec::new(),
            notification: None,
            custom_fields: Vec::new(),
            brand_id: None,
            allow_markup: None,
            allow_reassign: None,
            enable_wet_sign: None,
            enforce_signer_visibility: None,
        }
    }

    /// Add a document; returns its assigned id ("1", "2", … by insertion
    /// order). The extension is derived from the file name.
    pub fn add_document(&mut self, document_base64: impl Into<String>, file_name: &str) -> u32 {
        let id = self.documents.len() as u32 + 1;
        self.documents
            .push(Document::from_file_name(document_base64, id, file_name));
        id
    }

    /// Add a signer with the next sequential recipient id, routing order
    /// equal to the id. Returns the signer for tab attachment.
    pub fn add_signer(&mut self, email: impl Into<String>, name: impl Into<String>) -> &mut Signer {
        let idx = self.signers.len();
        let id = idx as u32 + 1;
        self.signers.push(Signer::new(email, name, id, id));
        &mut self.signers[idx]
    }

    /// Add a signer with an explicit routing order.
    pub fn add_signer_with_routing(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
        routing_order: u32,
    ) -> &mut Signer {
        let idx = self.signers.len();
        let id = idx as u32 + 1;
        self.signers.push(Signer::new(email, name, id, routing_order));
        &mut self.signers[idx]
    }

    /// Add a signer carrying one signature tab per document added so far, at
    /// the default position shifted down [`SIGNER_TAB_Y_STEP`] pixels per
    /// signer ordinal so stacked signature lines stay distinct.
    pub fn add_signer_with_default_tabs(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> &mut Signer {
        let document_count = self.documents.len() as u32;
        let ordinal = self.signers.len() as u32 + 1;
        let signer = self.add_signer(email, name);
        for doc in 1..=document_count {
            signer.push_tab(Tab::SignHere(SignHereTab::new(
                doc.to_string(),
                1,
                TabPosition::Absolute {
                    x: DEFAULT_SIGNATURE_X,
                    y: DEFAULT_SIGNATURE_Y + (ordinal - 1) * SIGNER_TAB_Y_STEP,
                },
            )));
        }
        signer
    }

    /// Queue a carbon copy; its recipient id is assigned at build time,
    /// continuing the sequence after all signers.
    pub fn add_carbon_copy(&mut self, email: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.carbon_copies.push((email.into(), name.into()));
        self
    }

    pub fn email_blurb(&mut self, blurb: impl Into<String>) -> &mut Self {
        self.email_blurb = Some(blurb.into());
        self
    }

    pub fn notification(&mut self, notification: Notification) -> &mut Self {
        if !notification.is_empty() {
            self.notification = Some(notification);
        }
        self
    }

    pub fn custom_field(&mut self, field: TextCustomField) -> &mut Self {
        self.custom_fields.push(field);
        self
    }

    pub fn brand_id(&mut self, brand_id: impl Into<String>) -> &mut Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn allow_markup(&mut self, allow: bool) -> &mut Self {
        self.allow_markup = Some(allow);
        self
    }

    pub fn allow_reassign(&mut self, allow: bool) -> &mut Self {
        self.allow_reassign = Some(allow);
        self
    }

    pub fn enable_wet_sign(&mut self, enable: bool) -> &mut Self {
        self.enable_wet_sign = Some(enable);
        self
    }

    pub fn enforce_signer_visibility(&mut self, enforce: bool) -> &mut Self {
        self.enforce_signer_visibility = Some(enforce);
        self
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn signer_count(&self) -> usize {
        self.signers.len()
    }

    pub fn build(self) -> EnvelopeDefinition {
        let signer_count = self.signers.len() as u32;
        let carbon_copies = self
            .carbon_copies
            .into_iter()
            .enumerate()
            .map(|(idx, (email, name))| {
                let id = signer_count + idx as u32 + 1;
                CarbonCopy::new(email, name, id, id)
            })
            .collect();

        EnvelopeDefinition {
            email_subject: self.email_subject,
            status: self.status,
            email_blurb: self.email_blurb,
            documents: self.documents,
            recipients: Recipients {
                signers: self.signers,
                carbon_copies,
            },
            notification: self.notification,
            custom_fields: if self.custom_fields.is_empty() {
                None
            } else {
                Some(CustomFields {
                    text_custom_fields: self.custom_fields,
                })
            },
            brand_id: self.brand_id,
            allow_markup: self.allow_markup.map(str_flag),
            allow_reassign: self.allow_reassign.map(str_flag),
            enable_wet_sign: self.enable_wet_sign.map(str_flag),
            enforce_signer_visibility: self.enforce_signer_visibility.map(str_flag),
        }
    }
}

fn str_flag(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Generate a unique client user id for embedded signing when the caller
/// does not supply one.
pub fn generate_client_user_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect();
    format!(
        "embedded-{}-{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}

/// Filters accepted by envelope and folder listing endpoints. Dates are
/// validated as ISO 8601 before the query string is assembled.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeFilters {
    pub status: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub search_text: Option<String>,
}

impl EnvelopeFilters {
    pub(crate) fn to_query(&self) -> Result<Vec<(&'static str, String)>, crate::error::ValidationError> {
        use crate::validate::{validate_field, FieldKind};

        let mut query = Vec::new();
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(from_date) = &self.from_date {
            validate_field("From Date", from_date, FieldKind::Date)?;
            query.push(("from_date", from_date.clone()));
        }
        if let Some(to_date) = &self.to_date {
            validate_field("To Date", to_date, FieldKind::Date)?;
            query.push(("to_date", to_date.clone()));
        }
        if let Some(search_text) = &self.search_text {
            query.push(("search_text", search_text.clone()));
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    const B64: &str = "JVBERi0xLjQ=";

    #[test]
    fn test_round_trip_single_signer_envelope() {
        let mut builder = EnvelopeBuilder::new("Please sign", EnvelopeStatus::Sent);
        builder.add_document(B64, "contract.pdf");
        let signer = builder.add_signer("a@b.com", "A B");
        signer.push_tab(Tab::SignHere(SignHereTab::new(
            "1",
            1,
            TabPosition::Absolute {
                x: DEFAULT_SIGNATURE_X,
                y: DEFAULT_SIGNATURE_Y,
            },
        )));

        let v = to_value(builder.build()).unwrap();
        assert_eq!(v["status"], "sent");
        assert_eq!(v["emailSubject"], "Please sign");
        assert_eq!(v["documents"][0]["documentId"], "1");
        assert_eq!(v["documents"][0]["fileExtension"], "pdf");
        assert_eq!(v["documents"][0]["documentBase64"], B64);
        assert_eq!(v["recipients"]["signers"][0]["recipientId"], "1");
        assert_eq!(v["recipients"]["signers"][0]["email"], "a@b.com");
        assert_eq!(v["recipients"]["signers"][0]["name"], "A B");
        assert_eq!(
            v["recipients"]["signers"][0]["tabs"]["signHereTabs"][0]["xPosition"],
            "100"
        );
    }

    #[test]
    fn test_document_ids_follow_insertion_order() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Created);
        assert_eq!(builder.add_document(B64, "one.pdf"), 1);
        assert_eq!(builder.add_document(B64, "two.DOCX"), 2);
        assert_eq!(builder.add_document(B64, "three"), 3);

        let envelope = builder.build();
        assert_eq!(envelope.documents[1].file_extension, "docx");
        assert_eq!(envelope.documents[2].file_extension, "pdf");
        assert_eq!(envelope.documents[2].document_id, "3");
    }

    #[test]
    fn test_additional_signers_get_one_tab_per_document() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Sent);
        for name in ["a.pdf", "b.pdf"] {
            builder.add_document(B64, name);
        }
        builder.add_signer("first@example.com", "First Signer");
        for i in 0..3 {
            builder.add_signer_with_default_tabs(format!("s{i}@example.com"), format!("Signer {i}"));
        }

        let v = to_value(builder.build()).unwrap();
        let signers = v["recipients"]["signers"].as_array().unwrap();
        assert_eq!(signers.len(), 4);

        let mut y_offsets = std::collections::BTreeSet::new();
        let mut tab_count = 0;
        for signer in &signers[1..] {
            let tabs = signer["tabs"]["signHereTabs"].as_array().unwrap();
            // One tab per document.
            assert_eq!(tabs.len(), 2);
            tab_count += tabs.len();
            for tab in tabs {
                y_offsets.insert(tab["yPosition"].as_str().unwrap().to_string());
            }
        }
        // N additional signers × M documents tabs in total.
        assert_eq!(tab_count, 3 * 2);
        // Each signer's tabs sit at a distinct y offset.
        assert_eq!(y_offsets.len(), 3);
        assert!(y_offsets.contains("200"));
        assert!(y_offsets.contains("250"));
        assert!(y_offsets.contains("300"));
    }

    #[test]
    fn test_carbon_copy_ids_continue_signer_sequence() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Sent);
        builder.add_document(B64, "a.pdf");
        builder.add_signer("one@example.com", "One");
        builder.add_signer("two@example.com", "Two");
        builder.add_carbon_copy("cc@example.com", "CC One");
        builder.add_carbon_copy("cc2@example.com", "CC Two");

        let envelope = builder.build();
        assert_eq!(envelope.recipients.carbon_copies[0].recipient_id, "3");
        assert_eq!(envelope.recipients.carbon_copies[0].routing_order, "3");
        assert_eq!(envelope.recipients.carbon_copies[1].recipient_id, "4");
    }

    #[test]
    fn test_optional_blocks_are_omitted_when_unset() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Created);
        builder.add_document(B64, "a.pdf");
        builder.add_signer("a@b.com", "A");

        let v = to_value(builder.build()).unwrap();
        assert!(v.get("notification").is_none());
        assert!(v.get("customFields").is_none());
        assert!(v.get("brandId").is_none());
        assert!(v.get("emailBlurb").is_none());
        assert!(v.get("allowMarkup").is_none());
    }

    #[test]
    fn test_notification_wire_shape() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Sent);
        builder.add_document(B64, "a.pdf");
        builder.add_signer("a@b.com", "A");
        builder.notification(Notification::new().with_reminders(2, 1).with_expiration(120, 3));

        let v = to_value(builder.build()).unwrap();
        let n = &v["notification"];
        assert_eq!(n["useAccountDefaults"], "false");
        assert_eq!(n["reminders"]["reminderEnabled"], "true");
        assert_eq!(n["reminders"]["reminderDelay"], "2");
        assert_eq!(n["expirations"]["expireAfter"], "120");
        assert_eq!(n["expirations"]["expireWarn"], "3");
    }

    #[test]
    fn test_custom_fields_wire_shape() {
        let mut builder = EnvelopeBuilder::new("s", EnvelopeStatus::Sent);
        builder.add_document(B64, "a.pdf");
        builder.add_signer("a@b.com", "A");
        builder.custom_field(TextCustomField::new("1", "department", "legal", true, false));

        let v = to_value(builder.build()).unwrap();
        let field = &v["customFields"]["textCustomFields"][0];
        assert_eq!(field["name"], "department");
        assert_eq!(field["show"], "true");
        assert_eq!(field["required"], "false");
    }

    #[test]
    fn test_signer_auth_variants() {
        let code = Signer::new("a@b.com", "A", 1, 1).with_auth(RecipientAuth::AccessCode("1234".into()));
        assert_eq!(code.access_code.as_deref(), Some("1234"));
        assert!(code.phone_authentication.is_none());

        let phone = Signer::new("a@b.com", "A", 1, 1).with_auth(RecipientAuth::Phone("+15550100".into()));
        let v = to_value(&phone).unwrap();
        assert_eq!(v["phoneAuthentication"]["recipMayProvideNumber"], "true");
        assert_eq!(v["phoneAuthentication"]["senderProvidedNumbers"][0], "+15550100");

        let sms = Signer::new("a@b.com", "A", 1, 1).with_auth(RecipientAuth::Sms("+15550100".into()));
        let v = to_value(&sms).unwrap();
        assert_eq!(v["smsAuthentication"]["senderProvidedNumbers"][0], "+15550100");
        assert!(v.get("phoneAuthentication").is_none());
    }

    #[test]
    fn test_template_envelope_defaults_to_sent() {
        let role = TemplateRole::new("a@b.com", "A B", "Signer")
            .with_merge_fields(vec![MergeField::new("{{name}}", "A B")]);
        let envelope = TemplateEnvelope::new("11111111-2222-4333-8444-555555555555", "Sign", vec![role]);

        let v = to_value(&envelope).unwrap();
        assert_eq!(v["status"], "sent");
        assert_eq!(v["templateRoles"][0]["roleName"], "Signer");
        assert_eq!(v["templateRoles"][0]["tabs"]["textTabs"][0]["locked"], "true");
    }

    #[test]
    fn test_template_role_without_merge_fields_has_no_tabs() {
        let role = TemplateRole::new("a@b.com", "A B", "Signer").with_merge_fields(vec![]);
        assert!(role.tabs.is_none());
    }

    #[test]
    fn test_generated_client_user_id_shape() {
        let id = generate_client_user_id();
        assert!(id.starts_with("embedded-"));
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 7);
    }

    #[test]
    fn test_filters_reject_bad_dates() {
        let filters = EnvelopeFilters {
            from_date: Some("not-a-date".into()),
            ..Default::default()
        };
        assert!(filters.to_query().is_err());

        let filters = EnvelopeFilters {
            status: Some("completed".into()),
            from_date: Some("2024-01-01".into()),
            search_text: Some("invoice".into()),
            ..Default::default()
        };
        let query = filters.to_query().unwrap();
        assert_eq!(query.len(), 3);
        assert!(query.contains(&("from_date", "2024-01-01".to_string())));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(to_value(EnvelopeStatus::Sent).unwrap(), "sent");
        assert_eq!(to_value(EnvelopeStatus::Voided).unwrap(), "voided");
    }
}
