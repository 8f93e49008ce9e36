//! Brand domain — account branding profiles.

pub mod client;

use crate::error::ValidationError;
use serde::Serialize;

pub use client::Brands;

/// A brand profile payload. Creates travel inside a `brands` array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDefinition {
    pub brand_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_brand_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_overriding_company_name: Option<bool>,
}

impl BrandDefinition {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            brand_company: None,
            default_brand_language: None,
            is_overriding_company_name: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.brand_company = Some(company.into());
        self
    }

    /// Language code, e.g. `en`, `fr`, `de`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.default_brand_language = Some(language.into());
        self
    }

    pub fn with_company_name_override(mut self, overriding: bool) -> Self {
        self.is_overriding_company_name = Some(overriding);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrandsBody {
    pub brands: Vec<BrandDefinition>,
}

/// Fields a brand update may change. At least one must be set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_company: Option<String>,
}

impl BrandUpdate {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.brand_name.is_none() && self.brand_company.is_none() {
            return Err(ValidationError::NoUpdateFields {
                accepted: "brandName, brandCompany".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_create_body_wraps_brand_in_array() {
        let body = BrandsBody {
            brands: vec![BrandDefinition::new("Acme")
                .with_company("Acme Corp")
                .with_language("en")
                .with_company_name_override(true)],
        };
        let v = to_value(&body).unwrap();
        assert_eq!(v["brands"][0]["brandName"], "Acme");
        assert_eq!(v["brands"][0]["defaultBrandLanguage"], "en");
        assert_eq!(v["brands"][0]["isOverridingCompanyName"], true);
    }

    #[test]
    fn test_update_requires_a_field() {
        assert!(BrandUpdate::default().validate().is_err());
        assert!(BrandUpdate {
            brand_name: Some("New".into()),
            ..Default::default()
        }
        .validate()
        .is_ok());
    }
}
