//! Bulk send sub-client.

use crate::client::DocuSign;
use crate::domain::bulk_send::BulkSendList;
use crate::domain::envelope::client::collection;
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde::Serialize;
use serde_json::Value;

pub struct BulkSend<'a> {
    pub(crate) client: &'a DocuSign,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkSendRequest {
    envelope_or_template_id: String,
}

impl<'a> BulkSend<'a> {
    /// Create a recipient list. Every entry is validated before the request
    /// goes out — a list with one bad address never reaches the vendor.
    pub async fn create_list(&self, list: &BulkSendList) -> Result<Value, SdkError> {
        validate_field("List Name", &list.name, FieldKind::Required)?;
        for copy in &list.bulk_copies {
            for signer in &copy.recipients.signers {
                validate_field("Recipient Email", &signer.email, FieldKind::Email)?;
                validate_field("Recipient Name", &signer.name, FieldKind::Required)?;
            }
        }
        Ok(self.client.http.post_json("/bulk_send_lists", list).await?)
    }

    pub async fn get(&self, list_id: &str) -> Result<Value, SdkError> {
        validate_field("List ID", list_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/bulk_send_lists/{list_id}"), &[])
            .await?)
    }

    pub async fn get_all(&self, limit: Option<u32>) -> Result<Vec<Value>, SdkError> {
        if let Some(limit) = limit {
            let query = [("count", limit.to_string())];
            let response: Value = self.client.http.get_json("/bulk_send_lists", &query).await?;
            return Ok(collection(&response, "bulkSendLists"));
        }

        Ok(self
            .client
            .http
            .get_all_items("/bulk_send_lists", "bulkSendLists", &[])
            .await?)
    }

    pub async fn delete_list(&self, list_id: &str) -> Result<Value, SdkError> {
        validate_field("List ID", list_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .delete_json(&format!("/bulk_send_lists/{list_id}"))
            .await?)
    }

    /// Dispatch the list against an envelope or template.
    pub async fn send(&self, list_id: &str, envelope_or_template_id: &str) -> Result<Value, SdkError> {
        validate_field("List ID", list_id, FieldKind::Uuid)?;
        validate_field("Envelope/Template ID", envelope_or_template_id, FieldKind::Uuid)?;
        let body = BulkSendRequest {
            envelope_or_template_id: envelope_or_template_id.to_string(),
        };
        Ok(self
            .client
            .http
            .post_json(&format!("/bulk_send_lists/{list_id}/send"), &body)
            .await?)
    }

    /// Progress of a dispatched batch.
    pub async fn batch_status(&self, list_id: &str, batch_id: &str) -> Result<Value, SdkError> {
        validate_field("List ID", list_id, FieldKind::Uuid)?;
        validate_field("Batch ID", batch_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/bulk_send_lists/{list_id}/batches/{batch_id}"), &[])
            .await?)
    }
}
