//! Signing groups sub-client.

use crate::client::DocuSign;
use crate::domain::envelope::client::collection;
use crate::domain::signing_group::{GroupEntry, GroupMember, GroupsBody};
use crate::error::{SdkError, ValidationError};
use crate::validate::{validate_field, FieldKind};
use serde::Serialize;
use serde_json::Value;

pub struct SigningGroups<'a> {
    pub(crate) client: &'a DocuSign,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupUpdateEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    users: Vec<GroupMember>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupUpdateBody {
    groups: Vec<GroupUpdateEntry>,
}

impl<'a> SigningGroups<'a> {
    /// Create a shared signing group. Any member can sign on behalf of the
    /// group.
    pub async fn create(&self, group_name: &str, members: Vec<GroupMember>) -> Result<Value, SdkError> {
        validate_field("Group Name", group_name, FieldKind::Required)?;
        for member in &members {
            validate_field("Member Email", &member.email, FieldKind::Email)?;
            validate_field("Member Name", &member.user_name, FieldKind::Required)?;
        }

        let body = GroupsBody {
            groups: vec![GroupEntry::shared(group_name, members)],
        };
        Ok(self.client.http.post_json("/signing_groups", &body).await?)
    }

    pub async fn get(&self, signing_group_id: &str) -> Result<Value, SdkError> {
        validate_field("Signing Group ID", signing_group_id, FieldKind::Required)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/signing_groups/{signing_group_id}"), &[])
            .await?)
    }

    pub async fn get_all(&self, limit: Option<u32>) -> Result<Vec<Value>, SdkError> {
        if let Some(limit) = limit {
            let query = [("count", limit.to_string())];
            let response: Value = self.client.http.get_json("/signing_groups", &query).await?;
            return Ok(collection(&response, "groups"));
        }

        Ok(self
            .client
            .http
            .get_all_items("/signing_groups", "groups", &[])
            .await?)
    }

    /// Rename a group and/or replace its member list. At least one of the
    /// two must be given.
    pub async fn update(
        &self,
        signing_group_id: &str,
        group_name: Option<&str>,
        members: Option<Vec<GroupMember>>,
    ) -> Result<Value, SdkError> {
        validate_field("Signing Group ID", signing_group_id, FieldKind::Required)?;
        if group_name.is_none() && members.is_none() {
            return Err(ValidationError::NoUpdateFields {
                accepted: "groupName, members".to_string(),
            }
            .into());
        }

        let members = members.unwrap_or_default();
        for member in &members {
            validate_field("Member Email", &member.email, FieldKind::Email)?;
            validate_field("Member Name", &member.user_name, FieldKind::Required)?;
        }

        let body = GroupUpdateBody {
            groups: vec![GroupUpdateEntry {
                group_name: group_name.map(str::to_string),
                users: members,
            }],
        };
        Ok(self
            .client
            .http
            .put_json(&format!("/signing_groups/{signing_group_id}"), &body)
            .await?)
    }

    pub async fn delete(&self, signing_group_id: &str) -> Result<Value, SdkError> {
        validate_field("Signing Group ID", signing_group_id, FieldKind::Required)?;
        Ok(self
            .client
            .http
            .delete_json(&format!("/signing_groups/{signing_group_id}"))
            .await?)
    }
}
