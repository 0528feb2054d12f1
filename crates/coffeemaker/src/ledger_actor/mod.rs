//! # Ingredient Ledger Actor
//!
//! Owns the ingredient inventory. All quantity mutations go through this
//! actor, and the multi-ingredient operations (availability check, deduction)
//! run as store actions, so each one executes atomically with respect to
//! every other request on the table.
//!
//! The deduction is all-or-nothing: requirements are aggregated and validated
//! against the whole table first, and quantities are only touched once every
//! line is known to be covered. A shortfall on the last ingredient leaves the
//! first one untouched.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::LedgerClient;
use crate::model::Ingredient;
use actor_store::ResourceActor;

/// Creates a new ledger actor and its client.
pub fn new() -> (ResourceActor<Ingredient>, LedgerClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, LedgerClient::new(generic_client))
}
