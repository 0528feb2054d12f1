//! Entity trait implementation for the Ingredient domain type.
//!
//! Creation validation and the inventory-wide actions live here. The
//! deduction path validates the full requirement list before applying any
//! subtraction; duplicate names in a requirement list are summed first so a
//! repeated ingredient cannot slip past per-line validation.

use crate::ledger_actor::actions::{LedgerAction, LedgerActionResult};
use crate::ledger_actor::error::LedgerError;
use crate::model::{Ingredient, IngredientCreate, IngredientId};
use actor_store::{ActorEntity, Store};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Sums the requirement list per ingredient name.
fn aggregate(requirements: &[(String, u32)]) -> BTreeMap<&str, u32> {
    let mut totals: BTreeMap<&str, u32> = BTreeMap::new();
    for (name, quantity) in requirements {
        let entry = totals.entry(name.as_str()).or_insert(0);
        *entry = entry.saturating_add(*quantity);
    }
    totals
}

/// First requirement the current inventory cannot cover, if any.
fn first_shortfall(
    store: &Store<Ingredient>,
    totals: &BTreeMap<&str, u32>,
) -> Option<LedgerError> {
    for (&name, &required) in totals {
        match store.values().find(|ingredient| ingredient.name == name) {
            None => return Some(LedgerError::NotFound(name.to_string())),
            Some(ingredient) if ingredient.quantity < required => {
                return Some(LedgerError::InsufficientQuantity {
                    name: name.to_string(),
                    requested: required,
                    available: ingredient.quantity,
                });
            }
            Some(_) => {}
        }
    }
    None
}

#[async_trait]
impl ActorEntity for Ingredient {
    type Id = IngredientId;
    type Create = IngredientCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type StoreAction = LedgerAction;
    type StoreActionResult = LedgerActionResult;
    type Context = ();
    type Error = LedgerError;

    fn from_create_params(id: IngredientId, params: IngredientCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.quantity))
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn validate_create(store: &Store<Self>, params: &IngredientCreate) -> Result<(), Self::Error> {
        if params.name.trim().is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if store
            .values()
            .any(|ingredient| ingredient.name == params.name)
        {
            return Err(LedgerError::DuplicateName(params.name.clone()));
        }
        if params.quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_store_action(
        store: &mut Store<Self>,
        action: LedgerAction,
        _ctx: &(),
    ) -> Result<LedgerActionResult, Self::Error> {
        match action {
            LedgerAction::CheckAvailability(requirements) => {
                let totals = aggregate(&requirements);
                let available = first_shortfall(store, &totals).is_none();
                Ok(LedgerActionResult::CheckAvailability(available))
            }
            LedgerAction::Deduct(requirements) => {
                let totals = aggregate(&requirements);
                if let Some(shortfall) = first_shortfall(store, &totals) {
                    return Err(shortfall);
                }
                for (name, required) in &totals {
                    if let Some(ingredient) =
                        store.values_mut().find(|ingredient| ingredient.name == *name)
                    {
                        ingredient.quantity -= required;
                    }
                }
                Ok(LedgerActionResult::Deduct(()))
            }
            LedgerAction::SetQuantity { name, quantity } => {
                let ingredient = store
                    .values_mut()
                    .find(|ingredient| ingredient.name == name)
                    .ok_or_else(|| LedgerError::NotFound(name.clone()))?;
                ingredient.quantity = quantity;
                Ok(LedgerActionResult::SetQuantity(()))
            }
        }
    }
}
