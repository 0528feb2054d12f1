//! # Order Fulfillment Engine
//!
//! Orchestrates one purchase end to end: recipe lookup, payment check,
//! availability check, atomic stock deduction, order creation and history
//! mirroring. No order is created and no deduction is retained unless every
//! earlier step succeeded.

use crate::clients::{CatalogClient, LedgerClient, OrderClient};
use crate::history::OrderHistoryIndex;
use crate::ledger_actor::LedgerError;
use crate::model::{OrderCreate, UserId};
use crate::order_actor::OrderError;
use actor_store::ActorClient;
use tracing::{debug, info, instrument, warn};

/// Coordinates the catalog, the ledger and the order table for purchases.
#[derive(Clone)]
pub struct FulfillmentEngine {
    catalog: CatalogClient,
    ledger: LedgerClient,
    orders: OrderClient,
    history: OrderHistoryIndex,
}

impl FulfillmentEngine {
    pub fn new(
        catalog: CatalogClient,
        ledger: LedgerClient,
        orders: OrderClient,
        history: OrderHistoryIndex,
    ) -> Self {
        Self {
            catalog,
            ledger,
            orders,
            history,
        }
    }

    /// Purchase one serving of the named recipe.
    ///
    /// Returns the change due on success. The availability check and the
    /// deduction are separate messages to the ledger actor, so a concurrent
    /// purchase can still win the race between them; the deduction
    /// re-validates atomically and a loss surfaces as
    /// [`OrderError::InsufficientIngredients`] with no partial stock change
    /// and no order record.
    #[instrument(skip(self))]
    pub async fn fulfill(
        &self,
        recipe_name: &str,
        amount_paid: u32,
        customer: Option<UserId>,
    ) -> Result<u32, OrderError> {
        let recipe = self
            .catalog
            .find_by_name(recipe_name)
            .await
            .map_err(|e| OrderError::ActorCommunication(e.to_string()))?
            .ok_or_else(|| OrderError::RecipeNotFound(recipe_name.to_string()))?;

        if amount_paid < recipe.price {
            debug!(recipe = %recipe.name, amount_paid, price = recipe.price, "payment rejected");
            return Err(OrderError::InsufficientPayment {
                paid: amount_paid,
                price: recipe.price,
            });
        }

        let requirements = recipe.requirements();
        let available = self
            .ledger
            .check_availability(requirements.clone())
            .await
            .map_err(|e| OrderError::ActorCommunication(e.to_string()))?;
        if !available {
            return Err(OrderError::InsufficientIngredients);
        }

        self.ledger.deduct(requirements).await.map_err(|e| match e {
            LedgerError::InsufficientQuantity { .. } | LedgerError::NotFound(_) => {
                OrderError::InsufficientIngredients
            }
            other => OrderError::ActorCommunication(other.to_string()),
        })?;

        let change = amount_paid - recipe.price;
        let order_id = self
            .orders
            .create_order(OrderCreate {
                recipe: Some(recipe.id),
                status: Some("Preparing".to_string()),
                amount_paid,
                amount_change: change,
                user: customer,
            })
            .await?;

        // Canonical write done; now mirror into the customer's history
        if let Some(order) = self.orders.get(order_id).await? {
            if let Err(e) = self.history.update(&order).await {
                warn!(order = %order_id, error = %e, "order history update failed");
            }
        }

        info!(recipe = %recipe.name, order = %order_id, change, "purchase fulfilled");
        Ok(change)
    }
}
