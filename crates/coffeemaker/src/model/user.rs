//! A registered account. The `orders` list is a cache of the user's orders,
//! kept in sync with the canonical order table by the order-history index;
//! it is never the source of truth.

use crate::model::{Capability, Order, OrderId, Role};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Opaque credential hash. Hashing and verification happen outside this
    /// service; it stores whatever it is handed.
    pub password_hash: String,
    pub role: Role,
    /// Cached order history, replace-by-id semantics.
    pub orders: Vec<Order>,
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            orders: Vec::new(),
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.role.has_capability(capability)
    }

    /// Replaces any cached order with a matching id, then inserts the given
    /// one. Calling this twice with the same order leaves a single entry.
    pub fn cache_order(&mut self, order: Order) {
        self.orders.retain(|cached| cached.id != order.id);
        self.orders.push(order);
    }

    /// Drops the cached entry for the given order, if any.
    pub fn evict_order(&mut self, order: OrderId) {
        self.orders.retain(|cached| cached.id != order);
    }
}

/// Payload for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Payload for updating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}
