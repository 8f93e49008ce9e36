//! Signing group domain — groups where any member signs on behalf of all.

pub mod client;

use serde::Serialize;

pub use client::SigningGroups;

/// A signing group member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_name: String,
    pub email: String,
}

impl GroupMember {
    pub fn new(email: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
        }
    }
}

/// One group inside the create/update envelope the vendor expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupEntry {
    pub group_name: String,
    pub group_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<GroupMember>,
}

impl GroupEntry {
    pub(crate) fn shared(group_name: impl Into<String>, users: Vec<GroupMember>) -> Self {
        Self {
            group_name: group_name.into(),
            group_type: "sharedSigningGroup".to_string(),
            users,
        }
    }
}

/// Signing group requests always travel inside a `groups` array, even for a
/// single group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupsBody {
    pub groups: Vec<GroupEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_create_body_wraps_group_in_array() {
        let body = GroupsBody {
            groups: vec![GroupEntry::shared(
                "Legal",
                vec![
                    GroupMember::new("a@example.com", "Alice"),
                    GroupMember::new("b@example.com", "Bob"),
                ],
            )],
        };
        let v = to_value(&body).unwrap();
        assert_eq!(v["groups"][0]["groupName"], "Legal");
        assert_eq!(v["groups"][0]["groupType"], "sharedSigningGroup");
        assert_eq!(v["groups"][0]["users"][1]["userName"], "Bob");
    }
}
