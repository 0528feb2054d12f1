//! Error types for the ingredient ledger.

use crate::model::Capability;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The requested ingredient was not found.
    #[error("No ingredient found with name {0}")]
    NotFound(String),

    /// An ingredient with this name already exists.
    #[error("Ingredient {0} already exists")]
    DuplicateName(String),

    /// Ingredients must be given a name.
    #[error("Ingredients cannot have an empty name")]
    EmptyName,

    /// Initial stock must be a number greater than zero.
    #[error("Quantity must be a number greater than zero")]
    InvalidQuantity,

    /// A requirement exceeds the available stock.
    #[error("Insufficient {name}: requested {requested}, available {available}")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The requesting user lacks the needed capability.
    #[error("This operation requires the {0} capability")]
    Forbidden(Capability),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunication(msg)
    }
}
