//! Product types returned by the external catalog

use serde::{Deserialize, Serialize};

/// A product as described by the upstream catalog.
///
/// The catalog is the source of truth for these fields; nothing here is
/// persisted locally. The upstream identifies products by `_id`, which is
/// accepted on deserialization alongside `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

/// Image attachment on a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// One page of catalog search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total_products: u64,
}

/// Sort direction, encoded as 1 / -1 on the upstream wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Upstream query encoding
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Ascending => "1",
            Self::Descending => "-1",
        }
    }
}

/// Search, filter, sort, and pagination parameters for a catalog query
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Substring match on product name
    pub query: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Field to sort by; the upstream only honors "price"
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
}

impl SearchParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_upstream_id() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","name":"Shirt","category":"apparel","price":500}"#,
        )
        .unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.price, Some(500.0));
    }

    #[test]
    fn test_product_serializes_plain_id() {
        let product = Product {
            id: "p1".to_string(),
            name: "Shirt".to_string(),
            category: None,
            price: Some(500.0),
            images: Vec::new(),
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"id\":\"p1\""));
        assert!(!json.contains("_id"));
    }

    #[test]
    fn test_sort_order_query_values() {
        assert_eq!(SortOrder::Ascending.as_query_value(), "1");
        assert_eq!(SortOrder::Descending.as_query_value(), "-1");
    }

    #[test]
    fn test_search_params_clamps_page() {
        let params = SearchParams::new(0, 0);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn test_page_deserializes_total() {
        let page: ProductPage = serde_json::from_str(
            r#"{"products":[{"_id":"p1","name":"Shirt"}],"totalProducts":42}"#,
        )
        .unwrap();

        assert_eq!(page.products.len(), 1);
        assert_eq!(page.total_products, 42);
    }
}
