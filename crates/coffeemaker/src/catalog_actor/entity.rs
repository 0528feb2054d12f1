//! Entity trait implementation for the Recipe domain type.
//!
//! The catalog's invariants live in `validate_create` (creation) and in the
//! `Replace` store action (edits): a replacement is fully validated against
//! the rest of the book before the single-insert swap, which keeps the
//! match-or-rollback promise without any undo logic.

use crate::catalog_actor::actions::{CatalogAction, CatalogActionResult};
use crate::catalog_actor::error::CatalogError;
use crate::catalog_actor::CATALOG_CAPACITY;
use crate::model::{Recipe, RecipeCreate, RecipeId};
use actor_store::{ActorEntity, Store};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Recipe {
    type Id = RecipeId;
    type Create = RecipeCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type StoreAction = CatalogAction;
    type StoreActionResult = CatalogActionResult;
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: RecipeId, params: RecipeCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            lines: params.lines,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn validate_create(store: &Store<Self>, params: &RecipeCreate) -> Result<(), Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if store.values().any(|recipe| recipe.name == params.name) {
            return Err(CatalogError::DuplicateName(params.name.clone()));
        }
        if store.len() >= CATALOG_CAPACITY {
            return Err(CatalogError::CatalogFull(params.name.clone()));
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
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogActionResult, Self::Error> {
        match action {
            CatalogAction::Replace { name, spec } => {
                let id = store
                    .values()
                    .find(|recipe| recipe.name == name)
                    .map(|recipe| recipe.id)
                    .ok_or_else(|| CatalogError::NotFound(name.clone()))?;
                if spec.name.trim().is_empty() {
                    return Err(CatalogError::EmptyName);
                }
                if store
                    .values()
                    .any(|recipe| recipe.id != id && recipe.name == spec.name)
                {
                    return Err(CatalogError::DuplicateName(spec.name));
                }
                store.insert(
                    id,
                    Recipe {
                        id,
                        name: spec.name,
                        price: spec.price,
                        lines: spec.lines,
                    },
                );
                Ok(CatalogActionResult::Replace(()))
            }
            CatalogAction::Remove { name } => {
                let id = store
                    .values()
                    .find(|recipe| recipe.name == name)
                    .map(|recipe| recipe.id)
                    .ok_or_else(|| CatalogError::NotFound(name.clone()))?;
                store.remove(&id);
                Ok(CatalogActionResult::Remove(()))
            }
        }
    }
}
