//! Cart and line-item entities
//!
//! A cart is an ordered sequence of line items, unique by product id.
//! Descriptive fields (name, price) are captured when a product is first
//! added and are never overwritten by later adds of the same product.

use serde::{Deserialize, Serialize};

use super::validation::validate_new_item;
use crate::domain::DomainError;

fn default_quantity() -> u32 {
    1
}

/// One distinct product held in a cart, with an accumulated quantity.
///
/// `product_id` is an opaque identifier issued by the external catalog and
/// is not validated against it. `name` and `price` are snapshots taken at
/// add-time; later catalog changes do not propagate into existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Line total for this entry
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Ordered collection of distinct line items owned by exactly one user.
///
/// Insertion order is preserved but carries no meaning. The only lifecycle
/// operations are merge-add and full replacement; items are never removed
/// or edited individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of line subtotals
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Merge a validated item into the cart.
    ///
    /// If an entry with the same `product_id` exists, its quantity grows by
    /// the incoming quantity and the originally captured name and price are
    /// kept. Otherwise the item is appended. This is what keeps product ids
    /// pairwise distinct.
    ///
    /// A merge that would overflow the quantity is rejected and leaves the
    /// cart unchanged; quantities never wrap below 1.
    pub fn add(&mut self, item: CartItem) -> Result<(), DomainError> {
        validate_new_item(&item)?;

        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity =
                    existing.quantity.checked_add(item.quantity).ok_or_else(|| {
                        DomainError::validation(format!(
                            "Quantity for product '{}' exceeds the supported maximum",
                            item.product_id
                        ))
                    })?;
            }
            None => self.items.push(item),
        }

        Ok(())
    }

    /// Take the current contents, leaving the cart empty.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
