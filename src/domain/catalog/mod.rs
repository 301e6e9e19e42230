//! Catalog domain
//!
//! Types for the external, read-only product catalog and the provider
//! trait the HTTP client implements.

mod product;
mod provider;

pub use product::{Product, ProductImage, ProductPage, SearchParams, SortOrder};
pub use provider::CatalogProvider;
