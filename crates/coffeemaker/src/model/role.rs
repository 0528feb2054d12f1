//! Roles and capabilities. A role is a fixed variant carrying a static set
//! of capabilities; authorization is the question "does this user's role
//! include this capability".

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named permission checked before administrative operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Purchase a recipe against the inventory.
    MakeCoffee,
    /// Restock existing ingredients.
    AddIngredients,
    /// Manage ingredient types and recipes.
    AddIngredientsType,
    /// Manage staff accounts.
    AddStaffAccount,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::MakeCoffee => "MAKE_COFFEE",
            Capability::AddIngredients => "ADD_INGREDIENTS",
            Capability::AddIngredientsType => "ADD_INGREDIENTS_TYPE",
            Capability::AddStaffAccount => "ADD_STAFF_ACCOUNT",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role attached to every user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Staff,
    Manager,
}

impl Role {
    /// The capability set granted by this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Customer => &[Capability::MakeCoffee],
            Role::Staff => &[
                Capability::MakeCoffee,
                Capability::AddIngredients,
                Capability::AddIngredientsType,
            ],
            Role::Manager => &[
                Capability::MakeCoffee,
                Capability::AddIngredients,
                Capability::AddIngredientsType,
                Capability::AddStaffAccount,
            ],
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Staff => "Staff",
            Role::Manager => "Manager",
        }
    }
}
