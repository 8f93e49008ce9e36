//! Document generation sub-client.

use crate::client::DocuSign;
use crate::domain::doc_gen::{DocGenField, DocGenFormFieldEntry, DocGenFormFieldsBody};
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct DocumentGeneration<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> DocumentGeneration<'a> {
    /// Form fields available in a draft envelope's DocGen documents.
    pub async fn form_fields(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}/docGenFormFields"), &[])
            .await?)
    }

    /// Populate form fields with dynamic data before sending.
    pub async fn update_form_fields(
        &self,
        envelope_id: &str,
        document_id: &str,
        fields: Vec<DocGenField>,
    ) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Document ID", document_id, FieldKind::Required)?;
        for field in &fields {
            validate_field("Field Name", &field.name, FieldKind::Required)?;
        }

        let body = DocGenFormFieldsBody {
            doc_gen_form_fields: vec![DocGenFormFieldEntry {
                document_id: document_id.to_string(),
                doc_gen_form_field_list: fields,
            }],
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/envelopes/{envelope_id}/docGenFormFields"), &body)
            .await?)
    }
}
