//! Binary attachments carried alongside workflow items.
//!
//! Uploaded documents arrive either as literal base64 strings or as named
//! attachments on the current item; downloaded documents leave the SDK as
//! [`BinaryAttachment`] values (raw bytes plus file metadata), never as
//! JSON-encoded blobs.

use crate::error::ValidationError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::collections::HashMap;

/// Raw bytes plus the metadata downstream steps need to handle them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryAttachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl BinaryAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Base64 of the raw bytes, as the vendor expects document content.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }
}

/// Named binary attachments on the current item.
#[derive(Debug, Clone, Default)]
pub struct Attachments(HashMap<String, BinaryAttachment>);

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, attachment: BinaryAttachment) {
        self.0.insert(name.into(), attachment);
    }

    pub fn get(&self, name: &str) -> Option<&BinaryAttachment> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve a user-given document reference to base64 content.
///
/// The reference is tried as an attachment name first, then as a literal
/// base64 string. Anything else is an unresolvable-reference error, raised
/// before any request is issued.
pub fn resolve_document_base64(
    attachments: &Attachments,
    reference: &str,
) -> Result<String, ValidationError> {
    if let Some(attachment) = attachments.get(reference) {
        return Ok(attachment.to_base64());
    }

    if !reference.is_empty() && BASE64.decode(reference).is_ok() {
        return Ok(reference.to_string());
    }

    Err(ValidationError::UnresolvableDocument {
        reference: reference.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_name_takes_precedence() {
        let mut attachments = Attachments::new();
        attachments.insert(
            "contract",
            BinaryAttachment::new("contract.pdf", "application/pdf", b"%PDF-1.4".to_vec()),
        );
        let resolved = resolve_document_base64(&attachments, "contract").unwrap();
        assert_eq!(resolved, BASE64.encode(b"%PDF-1.4"));
    }

    #[test]
    fn test_literal_base64_passes_through() {
        let attachments = Attachments::new();
        let literal = BASE64.encode(b"hello");
        assert_eq!(
            resolve_document_base64(&attachments, &literal).unwrap(),
            literal
        );
    }

    #[test]
    fn test_unresolvable_reference_fails() {
        let attachments = Attachments::new();
        let err = resolve_document_base64(&attachments, "no such attachment!").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnresolvableDocument { ref reference } if reference == "no such attachment!"
        ));
    }

    #[test]
    fn test_empty_reference_fails() {
        let attachments = Attachments::new();
        assert!(resolve_document_base64(&attachments, "").is_err());
    }
}
