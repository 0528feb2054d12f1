//! Error types for the recipe catalog.

use crate::model::Capability;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested recipe was not found.
    #[error("No recipe found with name {0}")]
    NotFound(String),

    /// A recipe with this name already exists.
    #[error("Recipe with the name {0} already exists")]
    DuplicateName(String),

    /// Recipes must be given a name.
    #[error("Recipes must have a name")]
    EmptyName,

    /// The recipe book is full.
    #[error("Insufficient space in recipe book for recipe {0}")]
    CatalogFull(String),

    /// A recipe line references an ingredient absent from the ledger.
    #[error("Recipe references the nonexistent ingredient {0}")]
    UnknownIngredient(String),

    /// The requesting user lacks the needed capability.
    #[error("This operation requires the {0} capability")]
    Forbidden(Capability),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunication(msg)
    }
}
