//! Cart domain
//!
//! Line items, the per-user cart with its merge semantics, and the store
//! trait the cart service persists through.

mod entity;
mod store;
mod validation;

pub use entity::{Cart, CartItem};
pub use store::CartStore;
pub use validation::validate_new_item;
