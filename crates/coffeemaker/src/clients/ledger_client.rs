//! # Ledger Client
//!
//! High-level API for the ingredient ledger actor. The multi-ingredient
//! operations are store actions, so they are atomic on the actor side; the
//! client's job is payload shaping and error mapping.

use crate::ledger_actor::{LedgerAction, LedgerActionResult, LedgerError};
use crate::model::{Ingredient, IngredientCreate, IngredientId};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the ingredient ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: ResourceClient<Ingredient>,
}

impl LedgerClient {
    pub fn new(inner: ResourceClient<Ingredient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Ingredient> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<Ingredient> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<LedgerError>() {
                Ok(err) => *err,
                Err(other) => LedgerError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => LedgerError::NotFound(id),
            other => LedgerError::ActorCommunication(other.to_string()),
        }
    }
}

impl LedgerClient {
    #[instrument(skip(self))]
    pub async fn create_ingredient(
        &self,
        params: IngredientCreate,
    ) -> Result<IngredientId, LedgerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Check whether the inventory covers every (name, quantity) requirement.
    ///
    /// Side-effect free; the answer can be stale by the time the caller acts
    /// on it, which is why [`LedgerClient::deduct`] re-validates.
    #[instrument(skip(self))]
    pub async fn check_availability(
        &self,
        requirements: Vec<(String, u32)>,
    ) -> Result<bool, LedgerError> {
        debug!("Checking availability of {} requirements", requirements.len());
        match self
            .inner
            .perform_store_action(LedgerAction::CheckAvailability(requirements))
            .await
        {
            Ok(LedgerActionResult::CheckAvailability(available)) => Ok(available),
            Ok(_) => unreachable!("CheckAvailability action must return CheckAvailability result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deduct every requirement from the inventory, or nothing at all.
    #[instrument(skip(self))]
    pub async fn deduct(&self, requirements: Vec<(String, u32)>) -> Result<(), LedgerError> {
        debug!("Deducting {} requirements", requirements.len());
        match self
            .inner
            .perform_store_action(LedgerAction::Deduct(requirements))
            .await
        {
            Ok(LedgerActionResult::Deduct(())) => Ok(()),
            Ok(_) => unreachable!("Deduct action must return Deduct result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Set an ingredient's quantity to an absolute value.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, name: &str, quantity: u32) -> Result<(), LedgerError> {
        debug!("Setting quantity of {} to {}", name, quantity);
        match self
            .inner
            .perform_store_action(LedgerAction::SetQuantity {
                name: name.to_string(),
                quantity,
            })
            .await
        {
            Ok(LedgerActionResult::SetQuantity(())) => Ok(()),
            Ok(_) => unreachable!("SetQuantity action must return SetQuantity result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
