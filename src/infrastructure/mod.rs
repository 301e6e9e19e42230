//! Infrastructure layer - concrete implementations of domain traits

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod logging;
pub mod user;
