//! Error types for orders and purchases.

use crate::model::Capability;
use thiserror::Error;

/// Errors that can occur during order operations and fulfillment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The named recipe is not in the catalog.
    #[error("No recipe found with name {0}")]
    RecipeNotFound(String),

    /// The payment does not cover the recipe price.
    #[error("Not enough money paid: {paid} offered for a price of {price}")]
    InsufficientPayment { paid: u32, price: u32 },

    /// The inventory cannot cover the recipe's ingredient lines.
    #[error("Not enough ingredients in inventory")]
    InsufficientIngredients,

    /// The requested order was not found.
    #[error("No order found with id {0}")]
    NotFound(String),

    /// The requesting user lacks the needed capability.
    #[error("This operation requires the {0} capability")]
    Forbidden(Capability),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunication(msg)
    }
}
