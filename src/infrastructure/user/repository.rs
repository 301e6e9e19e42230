//! In-memory user repository implementation
//!
//! The default backend. Each user record embeds its cart; cart replacement
//! happens under the map's write lock, so a stored cart is always the result
//! of one complete `replace`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cart::{Cart, CartStore};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of `UserRepository` and `CartStore`
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Index for username -> user ID lookup
    username_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let username_index = self.username_index.read().await;

        if let Some(user_id) = username_index.get(username) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        let id = user.id().as_str().to_string();
        let username = user.username().to_string();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if username_index.contains_key(&username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }

        username_index.insert(username, id.clone());
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[async_trait]
impl CartStore for InMemoryUserRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(user_id.as_str()).map(|u| u.cart().clone()))
    }

    async fn replace(&self, user_id: &UserId, cart: Cart) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(user_id.as_str()) {
            Some(user) => {
                user.set_cart(cart);
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "User '{}' not found",
                user_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartItem;

    fn create_test_user(id: &str, username: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::new(user_id, username, "hashed_password")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "alice");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username(), "alice");
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "alice");

        repo.create(user).await.unwrap();

        let retrieved = repo.get_by_username("alice").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id().as_str(), "user-1");

        let not_found = repo.get_by_username("nobody").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("user-1", "Alice")).await.unwrap();

        assert!(repo.get_by_username("alice").await.unwrap().is_none());
        assert!(repo.get_by_username("Alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("user-1", "alice")).await.unwrap();

        let result = repo.create(create_test_user("user-2", "alice")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("user-1", "alice")).await.unwrap();
        repo.create(create_test_user("user-2", "bob")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_load_cart_for_unknown_user() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("ghost").unwrap();

        assert!(repo.load(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_cart() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "alice");
        repo.create(user.clone()).await.unwrap();

        let mut cart = Cart::new();
        cart.add(CartItem::new("p1", "Shirt", 500.0, 2)).unwrap();
        repo.replace(user.id(), cart).await.unwrap();

        let loaded = repo.load(user.id()).await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_replace_cart_for_unknown_user() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("ghost").unwrap();

        let result = repo.replace(&id, Cart::new()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_cart() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "alice");
        repo.create(user.clone()).await.unwrap();

        let mut first = Cart::new();
        first.add(CartItem::new("p1", "Shirt", 500.0, 1)).unwrap();
        first.add(CartItem::new("p2", "Hat", 120.0, 1)).unwrap();
        repo.replace(user.id(), first).await.unwrap();

        let mut second = Cart::new();
        second.add(CartItem::new("p3", "Socks", 60.0, 4)).unwrap();
        repo.replace(user.id(), second).await.unwrap();

        let loaded = repo.load(user.id()).await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.items()[0].product_id, "p3");
    }
}
