//! A customer order. The order weakly references its recipe and its owning
//! user by id; deleting a recipe leaves orders that mention it intact. The
//! status field is free text with no enforced transition graph.

use crate::model::{RecipeId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub recipe: Option<RecipeId>,
    pub status: String,
    pub amount_paid: u32,
    pub amount_change: u32,
    pub user: Option<UserId>,
}

/// Payload for recording a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub recipe: Option<RecipeId>,
    /// Defaults to "Preparing" when absent.
    pub status: Option<String>,
    pub amount_paid: u32,
    pub amount_change: u32,
    pub user: Option<UserId>,
}

/// Payload for editing an order. Every field set here is mirrored into the
/// owning user's cached history after it is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub recipe: Option<RecipeId>,
    pub amount_paid: Option<u32>,
    pub amount_change: Option<u32>,
    /// Re-homes the order to a different user, detaching it from the
    /// previous owner's history first.
    pub user: Option<UserId>,
}
