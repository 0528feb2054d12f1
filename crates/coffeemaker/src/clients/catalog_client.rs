//! # Catalog Client
//!
//! High-level API for the recipe catalog actor. Submitted recipes reference
//! ingredients by name; this client resolves each line against the ledger
//! before anything reaches the catalog actor, so a recipe naming an unknown
//! ingredient fails without any partial write. Lines requesting a
//! non-positive quantity are dropped at resolution time.

use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError};
use crate::clients::LedgerClient;
use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeIngredientLine, RecipeSpec};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the recipe catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Recipe>,
    ledger: LedgerClient,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Recipe>, ledger: LedgerClient) -> Self {
        Self { inner, ledger }
    }

    /// Match every line of the spec against the ledger.
    async fn resolve_spec(&self, spec: RecipeSpec) -> Result<RecipeCreate, CatalogError> {
        let mut lines = Vec::new();
        for line in spec.lines {
            let ingredient = self
                .ledger
                .find_by_name(&line.ingredient)
                .await
                .map_err(|e| CatalogError::ActorCommunication(e.to_string()))?
                .ok_or_else(|| CatalogError::UnknownIngredient(line.ingredient.clone()))?;
            if line.quantity <= 0 {
                continue;
            }
            lines.push(RecipeIngredientLine {
                ingredient: ingredient.id,
                ingredient_name: ingredient.name,
                quantity: line.quantity as u32,
            });
        }
        Ok(RecipeCreate {
            name: spec.name,
            price: spec.price,
            lines,
        })
    }

    #[instrument(skip(self, spec))]
    pub async fn create_recipe(&self, spec: RecipeSpec) -> Result<RecipeId, CatalogError> {
        debug!(name = %spec.name, "create_recipe called");
        let params = self.resolve_spec(spec).await?;
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Atomically swap the named recipe for a new definition. The catalog is
    /// left untouched when any part of the new definition fails validation.
    #[instrument(skip(self, spec))]
    pub async fn replace_recipe(&self, name: &str, spec: RecipeSpec) -> Result<(), CatalogError> {
        debug!(name, replacement = %spec.name, "replace_recipe called");
        let params = self.resolve_spec(spec).await?;
        match self
            .inner
            .perform_store_action(CatalogAction::Replace {
                name: name.to_string(),
                spec: params,
            })
            .await
        {
            Ok(CatalogActionResult::Replace(())) => Ok(()),
            Ok(_) => unreachable!("Replace action must return Replace result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Remove the named recipe and its ingredient lines.
    #[instrument(skip(self))]
    pub async fn remove_recipe(&self, name: &str) -> Result<(), CatalogError> {
        debug!(name, "remove_recipe called");
        match self
            .inner
            .perform_store_action(CatalogAction::Remove {
                name: name.to_string(),
            })
            .await
        {
            Ok(CatalogActionResult::Remove(())) => Ok(()),
            Ok(_) => unreachable!("Remove action must return Remove result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Recipe> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Recipe> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
