//! Catalog provider trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::product::{Product, ProductPage, SearchParams};
use crate::domain::DomainError;

/// Read-only client to the external product catalog.
///
/// The catalog may rate-limit or be unreachable; implementations surface
/// that as `Upstream` errors and never retry on the caller's behalf.
#[async_trait]
pub trait CatalogProvider: Send + Sync + Debug {
    /// Search the catalog with filtering, sorting, and pagination
    async fn search(&self, params: &SearchParams) -> Result<ProductPage, DomainError>;

    /// Fetch a single product. `None` means the catalog does not know the id.
    async fn get_by_id(&self, product_id: &str) -> Result<Option<Product>, DomainError>;
}
