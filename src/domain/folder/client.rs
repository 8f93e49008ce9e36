//! Folders sub-client.

use crate::client::DocuSign;
use crate::domain::envelope::client::collection;
use crate::domain::envelope::EnvelopeFilters;
use crate::domain::folder::{EnvelopeIdEntry, FolderMoveBody};
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct Folders<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> Folders<'a> {
    /// The account's folder tree.
    pub async fn get_all(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.get_json("/folders", &[]).await?)
    }

    /// Envelopes and templates filed in a folder.
    pub async fn items(&self, folder_id: &str, limit: Option<u32>) -> Result<Vec<Value>, SdkError> {
        validate_field("Folder ID", folder_id, FieldKind::Required)?;
        let path = format!("/folders/{folder_id}");

        if let Some(limit) = limit {
            let query = [("count", limit.to_string())];
            let response: Value = self.client.http.get_json(&path, &query).await?;
            return Ok(collection(&response, "folderItems"));
        }

        Ok(self
            .client
            .http
            .get_all_items(&path, "folderItems", &[])
            .await?)
    }

    /// Move envelopes into a folder. `envelope_ids` is comma-separated; each
    /// id is UUID-checked before the request.
    pub async fn move_envelopes(&self, folder_id: &str, envelope_ids: &str) -> Result<Value, SdkError> {
        validate_field("Folder ID", folder_id, FieldKind::Required)?;
        validate_field("Envelope IDs", envelope_ids, FieldKind::Required)?;

        let ids: Vec<String> = envelope_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        for id in &ids {
            validate_field("Envelope ID", id, FieldKind::Uuid)?;
        }

        let body = FolderMoveBody {
            envelope_ids: ids
                .into_iter()
                .map(|envelope_id| EnvelopeIdEntry { envelope_id })
                .collect(),
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/folders/{folder_id}"), &body)
            .await?)
    }

    /// Search a system folder (drafts, sent items, …) for envelopes.
    pub async fn search(
        &self,
        search_folder_id: &str,
        filters: &EnvelopeFilters,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, SdkError> {
        validate_field("Search Folder ID", search_folder_id, FieldKind::Required)?;
        let query = filters.to_query()?;
        let path = format!("/search_folders/{search_folder_id}");

        if let Some(limit) = limit {
            let mut query = query;
            query.push(("count", limit.to_string()));
            let response: Value = self.client.http.get_json(&path, &query).await?;
            return Ok(collection(&response, "folderItems"));
        }

        Ok(self
            .client
            .http
            .get_all_items(&path, "folderItems", &query)
            .await?)
    }
}
