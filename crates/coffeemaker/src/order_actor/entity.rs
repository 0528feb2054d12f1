//! Entity trait implementation for the Order domain type.
//!
//! Updates write the canonical fields first and then push a copy into the
//! owning user's cache. A failed cache push is logged rather than propagated:
//! the cache is derived state and must not veto a canonical write.

use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::error::OrderError;
use crate::order_actor::OrderContext;
use actor_store::ActorEntity;
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type StoreAction = ();
    type StoreActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            recipe: params.recipe,
            status: params
                .status
                .filter(|status| !status.is_empty())
                .unwrap_or_else(|| "Preparing".to_string()),
            amount_paid: params.amount_paid,
            amount_change: params.amount_change,
            user: params.user,
        })
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        users: &OrderContext,
    ) -> Result<(), Self::Error> {
        if let Some(new_owner) = update.user {
            if self.user != Some(new_owner) {
                if let Some(previous) = self.user {
                    if let Err(e) = users.detach_order(previous, self.id).await {
                        warn!(order = %self.id, user = %previous, error = %e, "detach from previous owner failed");
                    }
                }
                self.user = Some(new_owner);
            }
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(recipe) = update.recipe {
            self.recipe = Some(recipe);
        }
        if let Some(paid) = update.amount_paid {
            self.amount_paid = paid;
        }
        if let Some(change) = update.amount_change {
            self.amount_change = change;
        }

        // Canonical fields are in place; mirror into the owner's cache
        if let Some(owner) = self.user {
            if let Err(e) = users.sync_order(owner, self.clone()).await {
                warn!(order = %self.id, user = %owner, error = %e, "order cache sync failed");
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_store_action(
        _store: &mut actor_store::Store<Self>,
        _action: (),
        _ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
