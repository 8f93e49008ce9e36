//! Bulk send domain — recipient lists and batch dispatch.

pub mod client;

use serde::Serialize;

pub use client::BulkSend;

/// One recipient slot in a bulk send list. The role name binds the recipient
/// into the template being sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSigner {
    pub email: String,
    pub name: String,
    pub role_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRecipients {
    pub signers: Vec<BulkSigner>,
}

/// One envelope copy of the batch: the vendor materializes an envelope per
/// entry when the list is sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCopy {
    pub recipients: BulkRecipients,
}

/// A named bulk send list, ready to POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendList {
    pub name: String,
    pub bulk_copies: Vec<BulkCopy>,
}

impl BulkSendList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bulk_copies: Vec::new(),
        }
    }

    /// Add one recipient as a single-signer copy. The role name defaults to
    /// `Signer`, matching the default template role.
    pub fn add_recipient(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
        role_name: Option<&str>,
    ) -> &mut Self {
        self.bulk_copies.push(BulkCopy {
            recipients: BulkRecipients {
                signers: vec![BulkSigner {
                    email: email.into(),
                    name: name.into(),
                    role_name: role_name.unwrap_or("Signer").to_string(),
                }],
            },
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_list_wire_shape() {
        let mut list = BulkSendList::new("Q3 renewals");
        list.add_recipient("a@example.com", "Alice", None);
        list.add_recipient("b@example.com", "Bob", Some("Countersigner"));

        let v = to_value(&list).unwrap();
        assert_eq!(v["name"], "Q3 renewals");
        let copies = v["bulkCopies"].as_array().unwrap();
        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0]["recipients"]["signers"][0]["roleName"], "Signer");
        assert_eq!(
            copies[1]["recipients"]["signers"][0]["roleName"],
            "Countersigner"
        );
        assert_eq!(copies[1]["recipients"]["signers"][0]["email"], "b@example.com");
    }
}
