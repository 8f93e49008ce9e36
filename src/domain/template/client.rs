//! Templates sub-client.

use crate::client::DocuSign;
use crate::domain::envelope::client::collection;
use crate::domain::template::{TemplateDefinition, TemplateFilters, TemplateUpdate};
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct Templates<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> Templates<'a> {
    pub async fn create(&self, template: &TemplateDefinition) -> Result<Value, SdkError> {
        validate_field("Email Subject", &template.email_subject, FieldKind::Required)?;
        for document in &template.documents {
            validate_field("Document Name", &document.name, FieldKind::Required)?;
        }
        Ok(self.client.http.post_json("/templates", template).await?)
    }

    pub async fn get(&self, template_id: &str) -> Result<Value, SdkError> {
        validate_field("Template ID", template_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/templates/{template_id}"), &[])
            .await?)
    }

    /// List templates. With `limit` set, one page; otherwise all pages.
    pub async fn get_all(
        &self,
        filters: &TemplateFilters,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, SdkError> {
        let query = filters.to_query();

        if let Some(limit) = limit {
            let mut query = query;
            query.push(("count", limit.to_string()));
            let response: Value = self.client.http.get_json("/templates", &query).await?;
            return Ok(collection(&response, "envelopeTemplates"));
        }

        Ok(self
            .client
            .http
            .get_all_items("/templates", "envelopeTemplates", &query)
            .await?)
    }

    pub async fn update(&self, template_id: &str, update: &TemplateUpdate) -> Result<Value, SdkError> {
        validate_field("Template ID", template_id, FieldKind::Uuid)?;
        update.validate()?;
        Ok(self
            .client
            .http
            .put_json(&format!("/templates/{template_id}"), update)
            .await?)
    }

    pub async fn delete(&self, template_id: &str) -> Result<Value, SdkError> {
        validate_field("Template ID", template_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .delete_json(&format!("/templates/{template_id}"))
            .await?)
    }
}
