//! Domain layer - Core business logic and entities

pub mod cart;
pub mod catalog;
pub mod error;
pub mod user;

pub use cart::{Cart, CartItem, CartStore};
pub use catalog::{CatalogProvider, Product, ProductPage, SearchParams, SortOrder};
pub use error::DomainError;
pub use user::{User, UserId, UserRepository};
