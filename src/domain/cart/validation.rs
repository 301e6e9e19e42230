//! Line-item validation

use super::entity::CartItem;
use crate::domain::DomainError;

/// Validate an incoming line item before it is merged into a cart.
///
/// Zero and negative prices are deliberately accepted; the upstream catalog
/// owns price semantics and the cart only snapshots what it is handed.
pub fn validate_new_item(item: &CartItem) -> Result<(), DomainError> {
    if item.product_id.trim().is_empty() {
        return Err(DomainError::validation("productId is required"));
    }

    if item.name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }

    if !item.price.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }

    if item.quantity < 1 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, name: &str, price: f64, quantity: u32) -> CartItem {
        CartItem::new(product_id, name, price, quantity)
    }

    #[test]
    fn test_valid_item() {
        assert!(validate_new_item(&item("p1", "Shirt", 500.0, 1)).is_ok());
    }

    #[test]
    fn test_blank_product_id() {
        assert!(validate_new_item(&item("", "Shirt", 500.0, 1)).is_err());
        assert!(validate_new_item(&item("   ", "Shirt", 500.0, 1)).is_err());
    }

    #[test]
    fn test_blank_name() {
        assert!(validate_new_item(&item("p1", "", 500.0, 1)).is_err());
    }

    #[test]
    fn test_non_finite_price() {
        assert!(validate_new_item(&item("p1", "Shirt", f64::NAN, 1)).is_err());
        assert!(validate_new_item(&item("p1", "Shirt", f64::INFINITY, 1)).is_err());
    }

    #[test]
    fn test_zero_and_negative_price_accepted() {
        assert!(validate_new_item(&item("p1", "Freebie", 0.0, 1)).is_ok());
        assert!(validate_new_item(&item("p1", "Refund", -5.0, 1)).is_ok());
    }

    #[test]
    fn test_zero_quantity() {
        assert!(validate_new_item(&item("p1", "Shirt", 500.0, 0)).is_err());
    }
}
