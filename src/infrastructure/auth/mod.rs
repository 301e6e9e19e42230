//! Token issuance and verification

pub mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtGenerator, JwtService};
