//! Folder domain — listing, item queries, and envelope moves.

pub mod client;

use serde::Serialize;

pub use client::Folders;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnvelopeIdEntry {
    pub envelope_id: String,
}

/// Body of a folder move: the envelopes to relocate into the target folder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FolderMoveBody {
    pub envelope_ids: Vec<EnvelopeIdEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_move_body_wraps_each_id() {
        let body = FolderMoveBody {
            envelope_ids: vec![
                EnvelopeIdEntry {
                    envelope_id: "a".into(),
                },
                EnvelopeIdEntry {
                    envelope_id: "b".into(),
                },
            ],
        };
        let v = to_value(&body).unwrap();
        assert_eq!(v["envelopeIds"][0]["envelopeId"], "a");
        assert_eq!(v["envelopeIds"][1]["envelopeId"], "b");
    }
}
