//! Document generation domain — dynamic form fields in DocGen-enabled
//! documents of a draft envelope.

pub mod client;

use serde::Serialize;

pub use client::DocumentGeneration;

/// One name/value pair to populate in the generated document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocGenField {
    pub name: String,
    pub value: String,
}

impl DocGenField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocGenFormFieldEntry {
    pub document_id: String,
    pub doc_gen_form_field_list: Vec<DocGenField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocGenFormFieldsBody {
    pub doc_gen_form_fields: Vec<DocGenFormFieldEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_update_body_wire_shape() {
        let body = DocGenFormFieldsBody {
            doc_gen_form_fields: vec![DocGenFormFieldEntry {
                document_id: "1".into(),
                doc_gen_form_field_list: vec![
                    DocGenField::new("FirstName", "Ada"),
                    DocGenField::new("LastName", "Lovelace"),
                ],
            }],
        };
        let v = to_value(&body).unwrap();
        let entry = &v["docGenFormFields"][0];
        assert_eq!(entry["documentId"], "1");
        assert_eq!(entry["docGenFormFieldList"][0]["name"], "FirstName");
        assert_eq!(entry["docGenFormFieldList"][1]["value"], "Lovelace");
    }
}
