//! # Recipe Catalog Actor
//!
//! Owns the bounded recipe book. Creation is validated against the whole
//! table (unique non-empty name, at most [`CATALOG_CAPACITY`] recipes), and
//! the replace operation runs as a store action: the replacement is validated
//! completely before the single swap, so a failed replace leaves the catalog
//! exactly as it was.
//!
//! Ingredient-name resolution happens in the
//! [`CatalogClient`](crate::clients::CatalogClient) before a payload ever
//! reaches this actor; a recipe naming an unknown ingredient is rejected
//! without anything being stored.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CatalogClient, LedgerClient};
use crate::model::Recipe;
use actor_store::ResourceActor;

/// The recipe book never holds more than this many recipes.
pub const CATALOG_CAPACITY: usize = 3;

/// Creates a new catalog actor and its client. The ledger client is used to
/// resolve ingredient lines when recipes are submitted.
pub fn new(ledger: LedgerClient) -> (ResourceActor<Recipe>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CatalogClient::new(generic_client, ledger))
}
