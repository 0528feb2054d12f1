//! # User Actor
//!
//! Owns the account table. Besides plain account management it carries the
//! order-history cache actions: [`UserAction::SyncOrder`] replaces any cached
//! entry with a matching id before inserting, so repeated syncs of the same
//! order never duplicate, and [`UserAction::DetachOrder`] drops a cache entry
//! without touching the canonical order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_store::ResourceActor;

/// Creates a new user actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, UserClient::new(generic_client))
}
