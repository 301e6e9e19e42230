//! Cart service: the get / add / checkout operations
//!
//! Each operation is one load -> compute -> replace pass over a single
//! user's cart. The store guarantees that a replace is all-or-nothing, but
//! the pass as a whole is not transactional: two concurrent adds for the
//! same user may resolve to whichever complete replace lands last, losing
//! one increment. That is a known property of the whole-cart-replace model,
//! not a bug.

use std::sync::Arc;

use tracing::debug;

use crate::domain::cart::{Cart, CartItem, CartStore};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Incoming add-to-cart payload.
///
/// `name` and `price` are the caller's snapshot of the catalog entry; the
/// service stores them verbatim and never consults the catalog itself.
#[derive(Debug, Clone)]
pub struct AddItemRequest {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order receipt returned by checkout. Nothing is persisted once this is
/// handed back to the caller.
#[derive(Debug, Clone)]
pub struct Order {
    pub items: Vec<CartItem>,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

/// Cart service over a `CartStore`
#[derive(Debug)]
pub struct CartService<S: CartStore> {
    store: Arc<S>,
}

impl<S: CartStore> CartService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Return the user's cart unmodified.
    pub async fn get_cart(&self, user_id: &UserId) -> Result<Cart, DomainError> {
        self.store
            .load(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))
    }

    /// Merge an item into the user's cart and persist the full new sequence.
    ///
    /// If the product is already present its quantity grows and the
    /// originally captured name/price stay; otherwise the item is appended.
    /// Validation failures never reach the store.
    pub async fn add_to_cart(
        &self,
        user_id: &UserId,
        request: AddItemRequest,
    ) -> Result<Cart, DomainError> {
        let mut cart = self.get_cart(user_id).await?;

        cart.add(CartItem::new(
            request.product_id,
            request.name,
            request.price,
            request.quantity,
        ))?;

        self.store.replace(user_id, cart.clone()).await?;

        debug!(user_id = %user_id, items = cart.len(), "Cart updated");

        Ok(cart)
    }

    /// Snapshot the cart as an order and clear it.
    ///
    /// Checkout on an empty cart succeeds with an empty order. The returned
    /// snapshot is the only record of the order; nothing else is kept.
    pub async fn checkout(&self, user_id: &UserId) -> Result<Order, DomainError> {
        let mut cart = self.get_cart(user_id).await?;
        let items = cart.take();

        self.store.replace(user_id, cart).await?;

        debug!(user_id = %user_id, items = items.len(), "Order placed");

        Ok(Order { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{User, UserRepository};
    use crate::infrastructure::user::InMemoryUserRepository;

    async fn service_with_user(id: &str) -> (CartService<InMemoryUserRepository>, UserId) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user_id = UserId::new(id).unwrap();
        repo.create(User::new(user_id.clone(), "alice", "hash"))
            .await
            .unwrap();
        (CartService::new(repo), user_id)
    }

    fn add(product_id: &str, name: &str, price: f64, quantity: u32) -> AddItemRequest {
        AddItemRequest {
            product_id: product_id.to_string(),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_get_cart_empty() {
        let (service, user_id) = service_with_user("user-a").await;

        let cart = service.get_cart(&user_id).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let (service, user_id) = service_with_user("user-a").await;

        let cart = service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 1))
            .await
            .unwrap();
        assert_eq!(cart.len(), 1);

        let fetched = service.get_cart(&user_id).await.unwrap();
        assert_eq!(fetched, cart);
    }

    #[tokio::test]
    async fn test_full_scenario() {
        // AddToCart(p1, Shirt, 500, 1) -> [{p1, Shirt, 500, 1}]
        // AddToCart(p1, Shirt, 450, 2) -> [{p1, Shirt, 500, 3}] (price frozen)
        // Checkout -> order [{p1, Shirt, 500, 3}], cart empty afterwards
        let (service, user_id) = service_with_user("user-a").await;

        let cart = service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 1))
            .await
            .unwrap();
        assert_eq!(cart.items()[0].quantity, 1);

        let cart = service
            .add_to_cart(&user_id, add("p1", "Shirt", 450.0, 2))
            .await
            .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].price, 500.0);

        let order = service.checkout(&user_id).await.unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.items[0].price, 500.0);
        assert_eq!(order.total(), 1500.0);

        let cart = service.get_cart(&user_id).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_merge_keeps_first_descriptive_fields() {
        let (service, user_id) = service_with_user("user-a").await;

        service
            .add_to_cart(&user_id, add("p1", "Original", 100.0, 2))
            .await
            .unwrap();
        let cart = service
            .add_to_cart(&user_id, add("p1", "Renamed", 90.0, 3))
            .await
            .unwrap();

        let item = &cart.items()[0];
        assert_eq!(item.name, "Original");
        assert_eq!(item.price, 100.0);
        assert_eq!(item.quantity, 5);
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_succeeds() {
        let (service, user_id) = service_with_user("user-a").await;

        let order = service.checkout(&user_id).await.unwrap();
        assert!(order.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_twice_yields_empty_second_order() {
        let (service, user_id) = service_with_user("user-a").await;

        service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 1))
            .await
            .unwrap();

        let first = service.checkout(&user_id).await.unwrap();
        assert!(!first.is_empty());

        let second = service.checkout(&user_id).await.unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_not_found() {
        let service = CartService::new(Arc::new(InMemoryUserRepository::new()));
        let ghost = UserId::new("ghost").unwrap();

        assert!(matches!(
            service.get_cart(&ghost).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service
                .add_to_cart(&ghost, add("p1", "Shirt", 500.0, 1))
                .await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.checkout(&ghost).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_add_leaves_cart_unchanged() {
        let (service, user_id) = service_with_user("user-a").await;

        service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 1))
            .await
            .unwrap();

        let zero_quantity = service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 0))
            .await;
        assert!(matches!(zero_quantity, Err(DomainError::Validation { .. })));

        let blank_product = service
            .add_to_cart(&user_id, add("", "Shirt", 500.0, 1))
            .await;
        assert!(matches!(blank_product, Err(DomainError::Validation { .. })));

        let cart = service.get_cart(&user_id).await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_distinct_products_preserve_insertion_order() {
        let (service, user_id) = service_with_user("user-a").await;

        service
            .add_to_cart(&user_id, add("p2", "Hat", 120.0, 1))
            .await
            .unwrap();
        service
            .add_to_cart(&user_id, add("p1", "Shirt", 500.0, 1))
            .await
            .unwrap();
        let cart = service
            .add_to_cart(&user_id, add("p2", "Hat", 120.0, 1))
            .await
            .unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }
}
