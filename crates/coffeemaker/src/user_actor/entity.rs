//! Entity trait implementation for the User domain type.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::actions::UserAction;
use crate::user_actor::error::UserError;
use actor_store::{ActorEntity, Store};
use async_trait::async_trait;

/// Username that would clash with the self-service account route.
const RESERVED_USERNAME: &str = "self";

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = ();
    type StoreAction = ();
    type StoreActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(
            id,
            params.username,
            params.password_hash,
            params.role,
        ))
    }

    fn name(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn validate_create(store: &Store<Self>, params: &UserCreate) -> Result<(), Self::Error> {
        if params.username.trim().is_empty() {
            return Err(UserError::EmptyUsername);
        }
        if params.username == RESERVED_USERNAME {
            return Err(UserError::ReservedUsername(params.username.clone()));
        }
        if params.password_hash.is_empty() {
            return Err(UserError::EmptyCredential);
        }
        if store.values().any(|user| user.username == params.username) {
            return Err(UserError::DuplicateUsername(params.username.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(password_hash) = update.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {
            UserAction::SyncOrder(order) => {
                self.cache_order(order);
                Ok(())
            }
            UserAction::DetachOrder(order) => {
                self.evict_order(order);
                Ok(())
            }
        }
    }

    async fn handle_store_action(
        _store: &mut Store<Self>,
        _action: (),
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
