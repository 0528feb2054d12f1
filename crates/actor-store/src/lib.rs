//! # Actor Store
//!
//! Building blocks for type-safe, actor-backed entity tables. Each table is
//! owned by a [`ResourceActor`] running in its own Tokio task and processing
//! messages sequentially, which gives exclusive access to the store without
//! any locking. Callers talk to the actor through a cloneable
//! [`ResourceClient`].
//!
//! The framework separates three layers:
//!
//! 1. **Entity layer** ([`ActorEntity`]) - domain models and their lifecycle
//!    hooks.
//! 2. **Runtime layer** ([`ResourceActor`]) - message processing and state
//!    ownership.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]) - typed
//!    async access.
//!
//! ## Operations
//!
//! Every table supports the same storage contract: create (ids assigned on
//! first save), get by id, find by name, list, update, delete, delete-all,
//! plus two extension points for domain logic:
//!
//! * **Entity actions** ([`ActorEntity::handle_action`]) run against a single
//!   entity, e.g. appending an order to a user's cached history.
//! * **Store actions** ([`ActorEntity::handle_store_action`]) run against the
//!   whole table in one message. Because the actor processes one message at a
//!   time, a store action is a serialization point: a check-then-act sequence
//!   expressed as a single store action cannot interleave with another
//!   request.
//!
//! ## Context injection
//!
//! Dependencies (usually clients of other actors) are injected at runtime via
//! [`ResourceActor::run`], not at construction time. This late binding keeps
//! actor creation free of ordering constraints: create all actors first, then
//! start each with the clients it needs.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`mock::MockClient`] that implements the
//! same wire protocol as a real actor but replays scripted expectations,
//! letting client-side logic be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Store};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
