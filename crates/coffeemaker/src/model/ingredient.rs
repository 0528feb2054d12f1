//! An inventory ingredient: a unique name and the quantity currently on
//! hand. Quantities only change through the ledger actor, which owns the
//! ingredient table.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientId(pub u32);

impl From<u32> for IngredientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ingredient_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// Payload for stocking a new ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub quantity: u32,
}
