//! Cache-maintenance actions on a user's order history.

use crate::model::{Order, OrderId};

/// Actions applied to one user's cached order list.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Replace-by-id insert of an order into the cache. Idempotent.
    SyncOrder(Order),
    /// Drop the cache entry for an order without deleting the order itself.
    DetachOrder(OrderId),
}
