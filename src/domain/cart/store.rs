//! Cart store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Cart;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Keyed storage of one cart per user identity.
///
/// `replace` overwrites the stored cart with a full new sequence and is
/// all-or-nothing relative to concurrent operations on the same user: a
/// reader observes either the previous cart or the new one, never a partial
/// write. The load -> compute -> replace sequence used by callers is NOT
/// transactional; two concurrent replacements for the same user resolve to
/// whichever complete write lands last.
#[async_trait]
pub trait CartStore: Send + Sync + Debug {
    /// Load the current cart for a user. `None` means the user does not exist.
    async fn load(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError>;

    /// Atomically overwrite the stored cart for a user.
    async fn replace(&self, user_id: &UserId, cart: Cart) -> Result<(), DomainError>;
}
