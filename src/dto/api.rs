//! JSON envelopes used by the commerce backend and mirrored by this API.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// `{ success, data?, message? }` wrapper around every backend payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// `data` of the unfiltered catalog listing and of batch lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Product>>,
}

/// `data` of the single-product endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("Search query is required"))
            .unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": "Search query is required"})
        );
    }

    #[test]
    fn catalog_without_items_deserializes_to_none() {
        let envelope: ApiResponse<CatalogPage> =
            serde_json::from_value(json!({"success": true, "data": {}})).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.unwrap().items.is_none());
    }
}
