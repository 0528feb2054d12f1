//! # Order Actor
//!
//! Owns the canonical order table. Orders weakly reference their recipe and
//! owning user by id. Edits applied through this actor are mirrored into the
//! owning user's cached history once the canonical fields are written, and an
//! order re-homed to a different user is detached from the previous owner's
//! cache first.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{OrderClient, UserClient};
use crate::model::Order;
use actor_store::ResourceActor;

/// Creates a new order actor and its client. The user client is injected at
/// `run` time as the actor's context for cache mirroring.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}

/// Context handed to the order actor when it starts.
pub type OrderContext = UserClient;
