//! End-to-end request-shaping tests: build complete payloads through the
//! public API and assert the exact vendor JSON, the way a per-operation
//! handler would assemble them.

use docusign_sdk::prelude::*;
use serde_json::to_value;

const PDF_B64: &str = "JVBERi0xLjQKJcOkw7zDtsOf";

/// One document, one signer, a CC, reminders, custom fields, and a merge
/// field — the full envelope-create surface in a single payload.
#[test]
fn full_envelope_payload_shape() {
    let mut attachments = Attachments::new();
    attachments.insert(
        "upload",
        BinaryAttachment::new("contract.pdf", "application/pdf", b"%PDF-1.4 fake".to_vec()),
    );
    let content = resolve_document_base64(&attachments, "upload").unwrap();

    let mut envelope = EnvelopeBuilder::new("Q3 contract for signature", EnvelopeStatus::Sent);
    envelope.add_document(content, "contract.pdf");
    envelope.email_blurb("Please review and sign.");
    envelope.brand_id("brand-1");
    envelope.allow_reassign(false);
    envelope.notification(Notification::new().with_reminders(2, 1).with_expiration(120, 3));
    envelope.custom_field(TextCustomField::new("1", "costCenter", "CC-42", true, true));

    {
        let signer = envelope.add_signer("ada@example.com", "Ada Lovelace");
        signer.push_tab(Tab::SignHere(SignHereTab::new(
            "1",
            1,
            TabPosition::Absolute {
                x: DEFAULT_SIGNATURE_X,
                y: DEFAULT_SIGNATURE_Y,
            },
        )));
        signer.push_tab(Tab::Text(MergeField::new("{{po_number}}", "PO-991").into_text_tab()));
        signer.push_tab(Tab::List(ListTab::from_options(
            "1",
            1,
            TabPosition::Absolute { x: 100, y: 300 },
            "Red, Blue, Green",
        )));
    }
    envelope.add_carbon_copy("legal@example.com", "Legal Desk");

    let v = to_value(envelope.build()).unwrap();

    assert_eq!(v["status"], "sent");
    assert_eq!(v["emailSubject"], "Q3 contract for signature");
    assert_eq!(v["emailBlurb"], "Please review and sign.");
    assert_eq!(v["brandId"], "brand-1");
    assert_eq!(v["allowReassign"], "false");

    assert_eq!(v["documents"][0]["documentId"], "1");
    assert_eq!(v["documents"][0]["fileExtension"], "pdf");

    let signer = &v["recipients"]["signers"][0];
    assert_eq!(signer["recipientId"], "1");
    assert_eq!(signer["routingOrder"], "1");
    assert_eq!(signer["tabs"]["signHereTabs"][0]["yPosition"], "150");
    assert_eq!(signer["tabs"]["textTabs"][0]["tabLabel"], "merge_{{po_number}}");
    assert_eq!(signer["tabs"]["listTabs"][0]["listItems"][0]["value"], "red");

    // CC id continues after the signers.
    let cc = &v["recipients"]["carbonCopies"][0];
    assert_eq!(cc["recipientId"], "2");
    assert_eq!(cc["email"], "legal@example.com");

    assert_eq!(v["notification"]["reminders"]["reminderFrequency"], "1");
    assert_eq!(v["customFields"]["textCustomFields"][0]["value"], "CC-42");
}

#[test]
fn embedded_signing_envelope_carries_client_user_id() {
    let mut envelope = EnvelopeBuilder::new("Embedded", EnvelopeStatus::Created);
    envelope.add_document(PDF_B64, "nda.pdf");
    {
        let signer = envelope.add_signer("s@example.com", "S");
        signer.set_client_user_id(generate_client_user_id());
        signer.push_tab(Tab::SignHere(SignHereTab::new(
            "1",
            1,
            TabPosition::at_anchor("/sign/"),
        )));
    }

    let v = to_value(envelope.build()).unwrap();
    let signer = &v["recipients"]["signers"][0];
    assert!(signer["clientUserId"]
        .as_str()
        .unwrap()
        .starts_with("embedded-"));
    // Anchored tab carries no absolute coordinates.
    let tab = &signer["tabs"]["signHereTabs"][0];
    assert_eq!(tab["anchorString"], "/sign/");
    assert!(tab.get("xPosition").is_none());
}

#[test]
fn template_instantiation_payload_shape() {
    let role = TemplateRole::new("bob@example.com", "Bob", "Client")
        .with_merge_fields(vec![
            MergeField::new("{{company}}", "Initech").with_font_size("Size14")
        ]);
    let envelope = TemplateEnvelope::new(
        "0b8e4b8e-1111-4c4c-9999-aabbccddeeff",
        "Your onboarding paperwork",
        vec![role],
    )
    .with_email_blurb("Welcome aboard");

    let v = to_value(&envelope).unwrap();
    assert_eq!(v["templateId"], "0b8e4b8e-1111-4c4c-9999-aabbccddeeff");
    assert_eq!(v["status"], "sent");
    assert_eq!(v["emailBlurb"], "Welcome aboard");
    let tab = &v["templateRoles"][0]["tabs"]["textTabs"][0];
    assert_eq!(tab["fontSize"], "Size14");
    assert_eq!(tab["locked"], "true");
    assert_eq!(tab["value"], "Initech");
}

#[test]
fn template_payload_shape() {
    let mut template = TemplateBuilder::new("Standard NDA");
    template.add_document(PDF_B64, "nda.docx");
    template.role_name("Counterparty");

    let v = to_value(template.build()).unwrap();
    assert_eq!(v["documents"][0]["fileExtension"], "docx");
    assert_eq!(v["recipients"]["signers"][0]["roleName"], "Counterparty");
    assert_eq!(
        v["recipients"]["signers"][0]["tabs"]["signHereTabs"][0]["documentId"],
        "1"
    );
}

#[test]
fn bulk_send_list_payload_shape() {
    let mut list = BulkSendList::new("October renewals");
    for (email, name) in [("a@example.com", "A"), ("b@example.com", "B"), ("c@example.com", "C")] {
        list.add_recipient(email, name, None);
    }

    let v = to_value(&list).unwrap();
    assert_eq!(v["bulkCopies"].as_array().unwrap().len(), 3);
    assert_eq!(v["bulkCopies"][2]["recipients"]["signers"][0]["name"], "C");
}

#[test]
fn validation_gate_rejects_before_any_shaping() {
    assert!(validate_field("Signer Email", "nobody", FieldKind::Email).is_err());
    assert!(validate_field("Template ID", "not-a-uuid", FieldKind::Uuid).is_err());
    assert!(validate_field("Return URL", "::", FieldKind::Url).is_err());

    let err = validate_field("Void Reason", "", FieldKind::Required).unwrap_err();
    assert_eq!(err.to_string(), "Void Reason is required");
}
