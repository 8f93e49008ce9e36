//! Envelopes sub-client — create, send, query, download.

use crate::client::DocuSign;
use crate::domain::envelope::{
    generate_client_user_id, EnvelopeDefinition, EnvelopeFilters, EnvelopeStatus, TemplateEnvelope,
};
use crate::error::{SdkError, ValidationError};
use crate::shared::BinaryAttachment;
use crate::validate::{validate_field, FieldKind};
use serde::Serialize;
use serde_json::Value;

pub struct Envelopes<'a> {
    pub(crate) client: &'a DocuSign,
}

/// A downloaded envelope document: raw bytes plus metadata, never JSON.
#[derive(Debug, Clone)]
pub struct DownloadedDocument {
    pub envelope_id: String,
    pub document_id: String,
    pub attachment: BinaryAttachment,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdate {
    status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    voided_reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResendBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    resend_envelope_reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipientUpdate {
    recipient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipientsUpdateBody {
    signers: Vec<RecipientUpdate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipientViewRequest {
    email: String,
    user_name: String,
    return_url: String,
    authentication_method: String,
    client_user_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CorrectViewRequest {
    return_url: String,
}

impl<'a> Envelopes<'a> {
    /// POST a built envelope. The builder owns id assignment and payload
    /// shape; this only issues the call.
    pub async fn create(&self, envelope: &EnvelopeDefinition) -> Result<Value, SdkError> {
        validate_field("Email Subject", &envelope.email_subject, FieldKind::Required)?;
        Ok(self.client.http.post_json("/envelopes", envelope).await?)
    }

    /// Instantiate a template as a sent envelope.
    pub async fn create_from_template(&self, envelope: &TemplateEnvelope) -> Result<Value, SdkError> {
        validate_field("Template ID", &envelope.template_id, FieldKind::Uuid)?;
        validate_field("Email Subject", &envelope.email_subject, FieldKind::Required)?;
        for role in &envelope.template_roles {
            validate_field("Recipient Email", &role.email, FieldKind::Email)?;
            validate_field("Recipient Name", &role.name, FieldKind::Required)?;
        }
        Ok(self.client.http.post_json("/envelopes", envelope).await?)
    }

    pub async fn get(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}"), &[])
            .await?)
    }

    /// List envelopes. With `limit` set, one page of at most `limit` items;
    /// otherwise every page is fetched and flattened.
    pub async fn get_all(
        &self,
        filters: &EnvelopeFilters,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, SdkError> {
        let query = filters.to_query()?;

        if let Some(limit) = limit {
            let mut query = query;
            query.push(("count", limit.to_string()));
            let response: Value = self.client.http.get_json("/envelopes", &query).await?;
            return Ok(collection(&response, "envelopes"));
        }

        Ok(self
            .client
            .http
            .get_all_items("/envelopes", "envelopes", &query)
            .await?)
    }

    /// Dispatch a draft envelope.
    pub async fn send(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        self.update_status(envelope_id, EnvelopeStatus::Sent, None).await
    }

    /// Void a sent envelope. The reason is required and shown to recipients.
    pub async fn void(&self, envelope_id: &str, reason: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Void Reason", reason, FieldKind::Required)?;
        self.update_status(envelope_id, EnvelopeStatus::Voided, Some(reason.to_string()))
            .await
    }

    /// Delete a draft. Only envelopes still in `created` can be deleted; the
    /// vendor enforces this server-side via the status transition.
    pub async fn delete(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        self.update_status(envelope_id, EnvelopeStatus::Deleted, None).await
    }

    /// Re-notify pending recipients.
    pub async fn resend(&self, envelope_id: &str, reason: Option<&str>) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        let body = ResendBody {
            resend_envelope_reason: reason.filter(|r| !r.is_empty()).map(str::to_string),
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/envelopes/{envelope_id}?resend_envelope=true"), &body)
            .await?)
    }

    pub async fn recipients(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}/recipients"), &[])
            .await?)
    }

    /// Correct a recipient's email and/or name. At least one of the two must
    /// be given.
    pub async fn update_recipient(
        &self,
        envelope_id: &str,
        recipient_id: &str,
        email: Option<&str>,
        name: Option<&str>,
    ) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Recipient ID", recipient_id, FieldKind::Required)?;
        if email.is_none() && name.is_none() {
            return Err(ValidationError::NoUpdateFields {
                accepted: "email, name".to_string(),
            }
            .into());
        }
        if let Some(email) = email {
            validate_field("Email", email, FieldKind::Email)?;
        }

        let body = RecipientsUpdateBody {
            signers: vec![RecipientUpdate {
                recipient_id: recipient_id.to_string(),
                email: email.map(str::to_string),
                name: name.map(str::to_string),
            }],
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/envelopes/{envelope_id}/recipients"), &body)
            .await?)
    }

    pub async fn audit_events(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}/audit_events"), &[])
            .await?)
    }

    pub async fn list_documents(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}/documents"), &[])
            .await?)
    }

    /// Download one document as raw bytes. `document_id` may be a sequence
    /// number or one of the synthetic ids (`combined`, `archive`,
    /// `certificate`); only dashed values are checked as UUIDs.
    pub async fn download_document(
        &self,
        envelope_id: &str,
        document_id: &str,
    ) -> Result<DownloadedDocument, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Document ID", document_id, FieldKind::Required)?;
        if document_id.contains('-') {
            validate_field("Document ID", document_id, FieldKind::Uuid)?;
        }

        let (bytes, content_type) = self
            .client
            .http
            .get_bytes(&format!("/envelopes/{envelope_id}/documents/{document_id}"))
            .await?;

        Ok(DownloadedDocument {
            envelope_id: envelope_id.to_string(),
            document_id: document_id.to_string(),
            attachment: BinaryAttachment::new(
                format!("document_{envelope_id}_{document_id}.pdf"),
                content_type.unwrap_or_else(|| "application/pdf".to_string()),
                bytes,
            ),
        })
    }

    /// Create an embedded-signing URL for a recipient. A `client_user_id` is
    /// generated when the caller does not provide the one the envelope was
    /// created with.
    pub async fn recipient_view(
        &self,
        envelope_id: &str,
        signer_email: &str,
        signer_name: &str,
        return_url: &str,
        authentication_method: Option<&str>,
        client_user_id: Option<&str>,
    ) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Signer Email", signer_email, FieldKind::Email)?;
        validate_field("Signer Name", signer_name, FieldKind::Required)?;
        validate_field("Return URL", return_url, FieldKind::Url)?;

        let body = RecipientViewRequest {
            email: signer_email.to_string(),
            user_name: signer_name.to_string(),
            return_url: return_url.to_string(),
            authentication_method: authentication_method.unwrap_or("None").to_string(),
            client_user_id: client_user_id
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .unwrap_or_else(generate_client_user_id),
        };
        Ok(self
            .client
            .http
            .post_json(&format!("/envelopes/{envelope_id}/views/recipient"), &body)
            .await?)
    }

    /// Create a correction URL for a sent envelope.
    pub async fn correct_view(&self, envelope_id: &str, return_url: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Return URL", return_url, FieldKind::Url)?;
        let body = CorrectViewRequest {
            return_url: return_url.to_string(),
        };
        Ok(self
            .client
            .http
            .post_json(&format!("/envelopes/{envelope_id}/views/correct"), &body)
            .await?)
    }

    async fn update_status(
        &self,
        envelope_id: &str,
        status: EnvelopeStatus,
        voided_reason: Option<String>,
    ) -> Result<Value, SdkError> {
        let body = StatusUpdate {
            status,
            voided_reason,
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/envelopes/{envelope_id}"), &body)
            .await?)
    }
}

/// Pull a named array out of a list response, tolerating its absence.
pub(crate) fn collection(response: &Value, key: &str) -> Vec<Value> {
    response
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_status_update_omits_reason_unless_voiding() {
        let v = to_value(StatusUpdate {
            status: EnvelopeStatus::Sent,
            voided_reason: None,
        })
        .unwrap();
        assert_eq!(v, json!({ "status": "sent" }));

        let v = to_value(StatusUpdate {
            status: EnvelopeStatus::Voided,
            voided_reason: Some("signed on paper".into()),
        })
        .unwrap();
        assert_eq!(v["voidedReason"], "signed on paper");
    }

    #[test]
    fn test_recipient_update_body_shape() {
        let body = RecipientsUpdateBody {
            signers: vec![RecipientUpdate {
                recipient_id: "2".into(),
                email: Some("new@example.com".into()),
                name: None,
            }],
        };
        let v = to_value(&body).unwrap();
        assert_eq!(v["signers"][0]["recipientId"], "2");
        assert_eq!(v["signers"][0]["email"], "new@example.com");
        assert!(v["signers"][0].get("name").is_none());
    }

    #[test]
    fn test_collection_tolerates_missing_key() {
        let response = json!({ "resultSetSize": "0" });
        assert!(collection(&response, "envelopes").is_empty());

        let response = json!({ "envelopes": [{"envelopeId": "x"}] });
        assert_eq!(collection(&response, "envelopes").len(), 1);
    }
}
