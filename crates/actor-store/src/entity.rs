//! # ActorEntity Trait
//!
//! The contract an entity type must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the id,
//! the DTOs, the action enums, the injected context and the error type, so a
//! request built for one entity type can never be sent to another entity's
//! actor.
//!
//! Most hooks have do-nothing defaults; an entity only implements the ones
//! its semantics need.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The table owned by a `ResourceActor`, keyed by entity id.
pub type Store<T> = HashMap<<T as ActorEntity>::Id, T>;

/// Trait that any resource entity must implement to be managed by a
/// [`ResourceActor`](crate::ResourceActor).
///
/// # Error Granularity
///
/// The framework uses one error enum per actor rather than one per message.
/// The enum must be the union of everything the entity's hooks can fail
/// with, which loses a little precision per operation but keeps client-side
/// pattern matching to a single type.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be convertible from `u32` so the actor can
    /// assign ids on first save.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Entity-specific operation applied to a single stored instance.
    type Action: Send + Sync + Debug;

    /// Result type of [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Operation applied to the whole table in one message.
    type StoreAction: Send + Sync + Debug;

    /// Result type of [`ActorEntity::handle_store_action`].
    type StoreActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when the
    /// entity needs none.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the payload.
    /// Called synchronously, after [`ActorEntity::validate_create`] and
    /// before [`ActorEntity::on_create`].
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The key used by find-by-name requests. Returning `None` opts the
    /// entity out of name lookups.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Store-aware validation run before the entity is constructed. This is
    /// where uniqueness and capacity rules live, since they need to see the
    /// whole table.
    fn validate_create(_store: &Store<Self>, _params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle hooks ---

    /// Called after construction and before insertion. A failure here means
    /// the entity is never stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the stored entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action handlers ---

    /// Handle an entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Handle a whole-table action. Runs inside the actor loop, so it is
    /// atomic with respect to every other request on this table.
    async fn handle_store_action(
        _store: &mut Store<Self>,
        _action: Self::StoreAction,
        _ctx: &Self::Context,
    ) -> Result<Self::StoreActionResult, Self::Error>;
}
