//! # User Client
//!
//! High-level API for the account table, including the order-history cache
//! actions used by the history index and the order actor.

use crate::model::{Order, OrderId, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the user actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!(username = %params.username, "create_user called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!(%id, "update_user called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Replace-by-id insert of an order into the user's cached history.
    #[instrument(skip(self, order))]
    pub async fn sync_order(&self, user: UserId, order: Order) -> Result<(), UserError> {
        debug!(%user, order = %order.id, "sync_order called");
        self.inner
            .perform_action(user, UserAction::SyncOrder(order))
            .await
            .map_err(Self::map_error)
    }

    /// Drop the cache entry for an order without touching the order itself.
    #[instrument(skip(self))]
    pub async fn detach_order(&self, user: UserId, order: OrderId) -> Result<(), UserError> {
        debug!(%user, %order, "detach_order called");
        self.inner
            .perform_action(user, UserAction::DetachOrder(order))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(err) => *err,
                Err(other) => UserError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunication(other.to_string()),
        }
    }
}
