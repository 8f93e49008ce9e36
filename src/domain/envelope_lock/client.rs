//! Envelope locks sub-client.

use crate::client::DocuSign;
use crate::domain::envelope_lock::{LockDurationUpdate, LockRequest, MAX_LOCK_DURATION_SECS};
use crate::error::{SdkError, ValidationError};
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct EnvelopeLocks<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> EnvelopeLocks<'a> {
    /// Lock an envelope for exclusive editing. The response carries the lock
    /// token needed for [`update`](Self::update) and [`unlock`](Self::unlock).
    pub async fn lock(
        &self,
        envelope_id: &str,
        duration_secs: u32,
        locked_by_app: &str,
    ) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        check_duration(duration_secs)?;

        let body = LockRequest::edit(duration_secs, locked_by_app);
        Ok(self
            .client
            .http
            .post_json(&format!("/envelopes/{envelope_id}/lock"), &body)
            .await?)
    }

    /// Current lock information for an envelope.
    pub async fn get(&self, envelope_id: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/envelopes/{envelope_id}/lock"), &[])
            .await?)
    }

    /// Extend or shorten an existing lock.
    pub async fn update(
        &self,
        envelope_id: &str,
        lock_token: &str,
        duration_secs: u32,
    ) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Lock Token", lock_token, FieldKind::Required)?;
        check_duration(duration_secs)?;

        let body = LockDurationUpdate {
            lock_duration_in_seconds: duration_secs.to_string(),
        };
        Ok(self
            .client
            .http
            .put_json_locked(&format!("/envelopes/{envelope_id}/lock"), lock_token, &body)
            .await?)
    }

    /// Release a lock.
    pub async fn unlock(&self, envelope_id: &str, lock_token: &str) -> Result<Value, SdkError> {
        validate_field("Envelope ID", envelope_id, FieldKind::Uuid)?;
        validate_field("Lock Token", lock_token, FieldKind::Required)?;
        Ok(self
            .client
            .http
            .delete_json_locked(&format!("/envelopes/{envelope_id}/lock"), lock_token)
            .await?)
    }
}

fn check_duration(duration_secs: u32) -> Result<(), ValidationError> {
    if duration_secs == 0 || duration_secs > MAX_LOCK_DURATION_SECS {
        return Err(ValidationError::Other(format!(
            "Lock Duration must be between 1 and {MAX_LOCK_DURATION_SECS} seconds, got {duration_secs}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_bounds() {
        assert!(check_duration(0).is_err());
        assert!(check_duration(1).is_ok());
        assert!(check_duration(1800).is_ok());
        assert!(check_duration(1801).is_err());
    }
}
