//! Product catalog API endpoints
//!
//! Thin proxy over the upstream catalog: query parameters are forwarded,
//! responses are passed through untouched. Browsing needs no authentication.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::catalog::{Product, ProductPage, SearchParams, SortOrder};

/// Create the catalog router
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    12
}

/// Query parameters accepted by the product listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

impl ListProductsQuery {
    fn into_params(self) -> SearchParams {
        let sort_order = match self.sort_order.as_deref() {
            Some("-1") | Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };

        SearchParams {
            query: self.name.filter(|s| !s.trim().is_empty()),
            category: self.category.filter(|s| !s.trim().is_empty()),
            page: self.page.max(1),
            page_size: self.limit.max(1),
            sort_field: self.sort_field.filter(|s| !s.trim().is_empty()),
            sort_order,
        }
    }
}

/// List products with filtering, sorting, and pagination
///
/// GET /api/products?page=&limit=&name=&category=&sortField=price&sortOrder=-1
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductPage>, ApiError> {
    let page = state.catalog.search(&query.into_params()).await?;

    Ok(Json(page))
}

/// Get a single product by id
///
/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product '{}' not found", id)))?;

    Ok(Json(product))
}
