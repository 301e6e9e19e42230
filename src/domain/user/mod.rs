//! User domain
//!
//! User entity (with its embedded cart), validation, and the repository
//! trait backing registration and login.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_password, validate_user_id, validate_username, UserValidationError,
};
