//! HTTP client for the external product catalog
//!
//! The upstream exposes `GET /products` with page/limit/name/category and a
//! price sort encoded as `sortField=price&sortOrder=1|-1`, plus
//! `GET /products/{id}`. It is known to rate-limit; failures surface as
//! `Upstream` errors and are never retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::catalog::{CatalogProvider, Product, ProductPage, SearchParams};
use crate::domain::DomainError;

/// Reqwest-based catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: Product,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build catalog client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn map_error_status(status: StatusCode, body: String) -> DomainError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            DomainError::upstream("Catalog rate limit exceeded".to_string())
        } else {
            DomainError::upstream(format!("Catalog returned HTTP {}: {}", status, body))
        }
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogClient {
    async fn search(&self, params: &SearchParams) -> Result<ProductPage, DomainError> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", params.page.to_string()),
            ("limit", params.page_size.to_string()),
        ];

        if let Some(name) = &params.query {
            query.push(("name", name.clone()));
        }

        if let Some(category) = &params.category {
            query.push(("category", category.clone()));
        }

        if let Some(field) = &params.sort_field {
            query.push(("sortField", field.clone()));
            query.push(("sortOrder", params.sort_order.as_query_value().to_string()));
        }

        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Catalog request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_error_status(status, body));
        }

        response.json::<ProductPage>().await.map_err(|e| {
            DomainError::upstream(format!("Failed to parse catalog response: {}", e))
        })
    }

    async fn get_by_id(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        let response = self
            .client
            .get(format!("{}/products/{}", self.base_url, product_id))
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Catalog request failed: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_error_status(status, body));
        }

        let envelope = response.json::<ProductEnvelope>().await.map_err(|e| {
            DomainError::upstream(format!("Failed to parse catalog response: {}", e))
        })?;

        Ok(Some(envelope.product))
    }
}
