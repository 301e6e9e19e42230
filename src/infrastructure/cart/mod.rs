//! Cart service implementation

pub mod service;

pub use service::{AddItemRequest, CartService, Order};
