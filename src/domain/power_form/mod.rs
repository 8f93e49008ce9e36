//! PowerForm domain — self-service signing forms backed by a template.

pub mod client;

use serde::Serialize;

pub use client::PowerForms;

/// A PowerForm payload, ready to POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFormDefinition {
    pub template_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_can_sign_on_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_use: Option<String>,
}

impl PowerFormDefinition {
    pub fn new(template_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            name: name.into(),
            email_subject: None,
            email_body: None,
            signer_can_sign_on_mobile: None,
            max_use: None,
        }
    }

    pub fn with_email_subject(mut self, subject: impl Into<String>) -> Self {
        self.email_subject = Some(subject.into());
        self
    }

    pub fn with_email_body(mut self, body: impl Into<String>) -> Self {
        self.email_body = Some(body.into());
        self
    }

    pub fn with_mobile_signing(mut self, allowed: bool) -> Self {
        self.signer_can_sign_on_mobile = Some(if allowed { "true" } else { "false" }.to_string());
        self
    }

    /// Cap how many envelopes the form may generate.
    pub fn with_max_use(mut self, max_use: u32) -> Self {
        self.max_use = Some(max_use.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_options_serialize_as_vendor_strings() {
        let form = PowerFormDefinition::new("11111111-2222-4333-8444-555555555555", "Intake")
            .with_mobile_signing(false)
            .with_max_use(25);
        let v = to_value(&form).unwrap();
        assert_eq!(v["signerCanSignOnMobile"], "false");
        assert_eq!(v["maxUse"], "25");
        assert!(v.get("emailSubject").is_none());
    }
}
