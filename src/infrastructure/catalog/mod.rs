//! Catalog client implementation

pub mod client;

pub use client::HttpCatalogClient;
