//! Brands sub-client.

use crate::client::DocuSign;
use crate::domain::brand::{BrandDefinition, BrandUpdate, BrandsBody};
use crate::domain::envelope::client::collection;
use crate::error::SdkError;
use crate::validate::{validate_field, FieldKind};
use serde_json::Value;

pub struct Brands<'a> {
    pub(crate) client: &'a DocuSign,
}

impl<'a> Brands<'a> {
    pub async fn create(&self, brand: BrandDefinition) -> Result<Value, SdkError> {
        validate_field("Brand Name", &brand.brand_name, FieldKind::Required)?;
        let body = BrandsBody {
            brands: vec![brand],
        };
        Ok(self.client.http.post_json("/brands", &body).await?)
    }

    pub async fn get(&self, brand_id: &str) -> Result<Value, SdkError> {
        validate_field("Brand ID", brand_id, FieldKind::Required)?;
        Ok(self
            .client
            .http
            .get_json(&format!("/brands/{brand_id}"), &[])
            .await?)
    }

    pub async fn get_all(&self, limit: Option<u32>) -> Result<Vec<Value>, SdkError> {
        if let Some(limit) = limit {
            let query = [("count", limit.to_string())];
            let response: Value = self.client.http.get_json("/brands", &query).await?;
            return Ok(collection(&response, "brands"));
        }

        Ok(self.client.http.get_all_items("/brands", "brands", &[]).await?)
    }

    pub async fn update(&self, brand_id: &str, update: &BrandUpdate) -> Result<Value, SdkError> {
        validate_field("Brand ID", brand_id, FieldKind::Required)?;
        update.validate()?;
        Ok(self
            .client
            .http
            .put_json(&format!("/brands/{brand_id}"), update)
            .await?)
    }

    pub async fn delete(&self, brand_id: &str) -> Result<Value, SdkError> {
        validate_field("Brand ID", brand_id, FieldKind::Required)?;
        Ok(self
            .client
            .http
            .delete_json(&format!("/brands/{brand_id}"))
            .await?)
    }
}
