//! A purchasable recipe: a price plus the quantities of named ingredients it
//! consumes. Recipes exclusively own their ingredient lines; deleting a
//! recipe deletes its lines with it.

use crate::model::IngredientId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub u32);

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recipe_{}", self.0)
    }
}

/// One ingredient requirement of a recipe.
///
/// The pair (owning recipe, `ingredient`) is the line's identity; the line
/// itself is a plain value living inside its recipe. The ingredient's name is
/// kept alongside the id because the ledger is addressed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    pub ingredient: IngredientId,
    pub ingredient_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub price: u32,
    pub lines: Vec<RecipeIngredientLine>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>, price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            lines: Vec::new(),
        }
    }

    /// Adds an ingredient requirement. Requests for a non-positive count are
    /// dropped without error.
    pub fn add_line(&mut self, ingredient: IngredientId, name: impl Into<String>, count: i64) {
        if count <= 0 {
            return;
        }
        self.lines.push(RecipeIngredientLine {
            ingredient,
            ingredient_name: name.into(),
            quantity: count as u32,
        });
    }

    /// The recipe's requirements in the (name, quantity) form the ledger
    /// consumes.
    pub fn requirements(&self) -> Vec<(String, u32)> {
        self.lines
            .iter()
            .map(|line| (line.ingredient_name.clone(), line.quantity))
            .collect()
    }
}

/// A recipe as submitted by a caller: ingredient lines reference ledger
/// entries by name and still need resolving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub name: String,
    pub price: u32,
    pub lines: Vec<RecipeLineSpec>,
}

/// One unresolved ingredient line of a [`RecipeSpec`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLineSpec {
    pub ingredient: String,
    pub quantity: i64,
}

/// A fully resolved creation payload: every line has been matched against the
/// ledger and non-positive quantities have been dropped.
#[derive(Debug, Clone)]
pub struct RecipeCreate {
    pub name: String,
    pub price: u32,
    pub lines: Vec<RecipeIngredientLine>,
}
