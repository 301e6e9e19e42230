//! PostgreSQL user repository implementation
//!
//! Users are stored one row each with the cart embedded as a JSONB column,
//! mirroring the document layout. `CartStore::replace` is a single-row
//! UPDATE, which Postgres applies atomically.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::cart::{Cart, CartStore};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    cart          JSONB NOT NULL DEFAULT '[]'::jsonb,
    created_at    TIMESTAMPTZ NOT NULL,
    updated_at    TIMESTAMPTZ NOT NULL
)
"#;

/// PostgreSQL implementation of `UserRepository` and `CartStore`
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create schema: {}", e)))?;
        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read user id: {}", e)))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::storage(format!("Failed to read username: {}", e)))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| DomainError::storage(format!("Failed to read password hash: {}", e)))?;
    let cart_json: serde_json::Value = row
        .try_get("cart")
        .map_err(|e| DomainError::storage(format!("Failed to read cart: {}", e)))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::storage(format!("Failed to read created_at: {}", e)))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::storage(format!("Failed to read updated_at: {}", e)))?;

    let user_id = UserId::new(id)
        .map_err(|e| DomainError::storage(format!("Stored user id is invalid: {}", e)))?;
    let cart: Cart = serde_json::from_value(cart_json)
        .map_err(|e| DomainError::storage(format!("Stored cart is invalid: {}", e)))?;

    Ok(User::from_parts(
        user_id,
        username,
        password_hash,
        cart,
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, cart, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, cart, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let cart_json = serde_json::to_value(user.cart())
            .map_err(|e| DomainError::internal(format!("Failed to serialize cart: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, cart, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.username())
        .bind(user.password_hash())
        .bind(cart_json)
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) => {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    Err(DomainError::conflict(format!(
                        "Username '{}' already exists",
                        user.username()
                    )))
                } else {
                    Err(DomainError::storage(format!("Failed to create user: {}", e)))
                }
            }
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| DomainError::storage(format!("Failed to read count: {}", e)))?;

        Ok(count as usize)
    }
}

#[async_trait]
impl CartStore for PostgresUserRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError> {
        let row = sqlx::query("SELECT cart FROM users WHERE id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to load cart: {}", e)))?;

        match row {
            Some(row) => {
                let cart_json: serde_json::Value = row
                    .try_get("cart")
                    .map_err(|e| DomainError::storage(format!("Failed to read cart: {}", e)))?;
                let cart: Cart = serde_json::from_value(cart_json)
                    .map_err(|e| DomainError::storage(format!("Stored cart is invalid: {}", e)))?;
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }

    async fn replace(&self, user_id: &UserId, cart: Cart) -> Result<(), DomainError> {
        let cart_json = serde_json::to_value(&cart)
            .map_err(|e| DomainError::internal(format!("Failed to serialize cart: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET cart = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(cart_json)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to replace cart: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user_id
            )));
        }

        Ok(())
    }
}
