//! PowerForms sub-client.

use crate::client::DocuSign;
use crate::domain::envelope::client::collection;
use crate::domain::power_form::PowerFormDefinition;
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct PowerForms<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> PowerForms<'a> {
    pub async fn create(&self, form: &PowerFormDefinition) -> Result<Value, SdkError> {
        validate_field("Template ID", &form.template_id, FieldKind::Uuid)?;
        validate_field("Name", &form.name, FieldKind::Required)?;
        Ok(self.client.http.post_json("/powerforms", form).await?)
    }

    pub async fn get(&self, power_form_id: &str) -> Result<Value, SdkError> {
        validate_field("PowerForm ID", power_form_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/powerforms/{power_form_id}"), &[])
            .await?)
    }

    pub async fn get_all(&self, limit: Option<u32>) -> Result<Vec<Value>, SdkError> {
        if let Some(limit) = limit {
            let query = [("count", limit.to_string())];
            let response: Value = self.client.http.get_json("/powerforms", &query).await?;
            return Ok(collection(&response, "powerForms"));
        }

        Ok(self
            .client
            .http
            .get_all_items("/powerforms", "powerForms", &[])
            .await?)
    }

    pub async fn delete(&self, power_form_id: &str) -> Result<Value, SdkError> {
        validate_field("PowerForm ID", power_form_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .delete_json(&format!("/powerforms/{power_form_id}"))
            .await?)
    }
}
