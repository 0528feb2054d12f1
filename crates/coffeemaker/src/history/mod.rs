//! # Order History Index
//!
//! Keeps a user's cached order list consistent with canonical order
//! mutations. The cache is derived state: entries are only ever written here
//! after the canonical order write has succeeded, so the cache can never
//! reference an order that does not exist.

use crate::clients::UserClient;
use crate::model::Order;
use crate::user_actor::UserError;

/// Maintains the user-side mirror of canonical order records.
#[derive(Clone)]
pub struct OrderHistoryIndex {
    users: UserClient,
}

impl OrderHistoryIndex {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Mirror an order into its owner's cached list with replace-by-id
    /// semantics. Idempotent; a no-op for orders without an owner.
    pub async fn update(&self, order: &Order) -> Result<(), UserError> {
        let Some(owner) = order.user else {
            return Ok(());
        };
        self.users.sync_order(owner, order.clone()).await
    }

    /// Remove the cache entry for an order without deleting the canonical
    /// record. Used when an order is re-homed or deleted.
    pub async fn detach(&self, order: &Order) -> Result<(), UserError> {
        let Some(owner) = order.user else {
            return Ok(());
        };
        self.users.detach_order(owner, order.id).await
    }
}
