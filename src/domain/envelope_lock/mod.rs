//! Envelope lock domain — exclusive-edit locks on envelopes.
//!
//! Locking returns a lock token; updating or releasing the lock requires
//! presenting that token back in the `X-DocuSign-Edit` header.

pub mod client;

use serde::Serialize;

pub use client::EnvelopeLocks;

/// Longest lock the vendor accepts, in seconds (30 minutes).
pub const MAX_LOCK_DURATION_SECS: u32 = 1800;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LockRequest {
    pub lock_duration_in_seconds: String,
    pub locked_by_app: String,
    pub lock_type: String,
}

impl LockRequest {
    pub(crate) fn edit(duration_secs: u32, locked_by_app: &str) -> Self {
        Self {
            lock_duration_in_seconds: duration_secs.to_string(),
            locked_by_app: locked_by_app.to_string(),
            lock_type: "edit".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LockDurationUpdate {
    pub lock_duration_in_seconds: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_lock_request_wire_shape() {
        let v = to_value(LockRequest::edit(300, "workflow-runner")).unwrap();
        assert_eq!(v["lockDurationInSeconds"], "300");
        assert_eq!(v["lockedByApp"], "workflow-runner");
        assert_eq!(v["lockType"], "edit");
    }
}
