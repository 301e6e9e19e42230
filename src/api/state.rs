//! Application state for shared services

use std::sync::Arc;

use crate::domain::cart::{Cart, CartStore};
use crate::domain::catalog::CatalogProvider;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::cart::{AddItemRequest, CartService, Order};
use crate::infrastructure::user::{PasswordHasher, RegisterRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub cart_service: Arc<dyn CartServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub catalog: Arc<dyn CatalogProvider>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Trait for cart service operations
#[async_trait::async_trait]
pub trait CartServiceTrait: Send + Sync {
    async fn get_cart(&self, user_id: &UserId) -> Result<Cart, DomainError>;
    async fn add_to_cart(
        &self,
        user_id: &UserId,
        request: AddItemRequest,
    ) -> Result<Cart, DomainError>;
    async fn checkout(&self, user_id: &UserId) -> Result<Order, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> UserServiceTrait
    for UserService<R, H>
{
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

#[async_trait::async_trait]
impl<S: CartStore + 'static> CartServiceTrait for CartService<S> {
    async fn get_cart(&self, user_id: &UserId) -> Result<Cart, DomainError> {
        CartService::get_cart(self, user_id).await
    }

    async fn add_to_cart(
        &self,
        user_id: &UserId,
        request: AddItemRequest,
    ) -> Result<Cart, DomainError> {
        CartService::add_to_cart(self, user_id, request).await
    }

    async fn checkout(&self, user_id: &UserId) -> Result<Order, DomainError> {
        CartService::checkout(self, user_id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        cart_service: Arc<dyn CartServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self {
            user_service,
            cart_service,
            jwt_service,
            catalog,
        }
    }
}
