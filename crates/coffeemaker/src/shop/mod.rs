//! # Coffee Shop Service
//!
//! The operation surface consumed by a thin API layer. Administrative
//! operations check the requesting user's capability before touching the
//! ledger or catalog; purchases go through the fulfillment engine; order
//! writes keep the user-side history cache in step with the canonical table.

use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, LedgerClient, OrderClient, UserClient};
use crate::fulfillment::FulfillmentEngine;
use crate::history::OrderHistoryIndex;
use crate::ledger_actor::LedgerError;
use crate::lifecycle::CoffeeSystem;
use crate::model::{
    Capability, Ingredient, IngredientCreate, IngredientId, Order, OrderCreate, OrderId,
    OrderUpdate, Recipe, RecipeSpec, Role, User, UserCreate, UserId, UserUpdate,
};
use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use actor_store::ActorClient;
use tracing::{info, instrument, warn};

/// Default accounts created by [`CoffeeShop::seed_default_accounts`].
const DEFAULT_ACCOUNTS: [(&str, Role); 3] = [
    ("manager", Role::Manager),
    ("staff", Role::Staff),
    ("customer", Role::Customer),
];

/// A running coffee shop: the actor system plus the purchase and history
/// machinery on top of it.
pub struct CoffeeShop {
    system: CoffeeSystem,
    engine: FulfillmentEngine,
    history: OrderHistoryIndex,
}

impl CoffeeShop {
    /// Starts the actor system and wires the fulfillment engine over it.
    pub fn new() -> Self {
        let system = CoffeeSystem::new();
        let history = OrderHistoryIndex::new(system.users.clone());
        let engine = FulfillmentEngine::new(
            system.catalog.clone(),
            system.ledger.clone(),
            system.orders.clone(),
            history.clone(),
        );
        Self {
            system,
            engine,
            history,
        }
    }

    pub fn ledger(&self) -> &LedgerClient {
        &self.system.ledger
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.system.catalog
    }

    pub fn orders(&self) -> &OrderClient {
        &self.system.orders
    }

    pub fn users(&self) -> &UserClient {
        &self.system.users
    }

    pub fn engine(&self) -> &FulfillmentEngine {
        &self.engine
    }

    pub fn history(&self) -> &OrderHistoryIndex {
        &self.history
    }

    pub async fn shutdown(self) -> Result<(), String> {
        let CoffeeShop {
            system,
            engine,
            history,
        } = self;
        drop(engine);
        drop(history);
        system.shutdown().await
    }

    // --- Purchases ---

    /// Purchase one serving of the named recipe for the requesting user.
    /// Returns the change due.
    #[instrument(skip(self, user), fields(user = %user.username))]
    pub async fn make_purchase(
        &self,
        user: &User,
        recipe_name: &str,
        amount_paid: u32,
    ) -> Result<u32, OrderError> {
        if !user.has_capability(Capability::MakeCoffee) {
            return Err(OrderError::Forbidden(Capability::MakeCoffee));
        }
        self.engine
            .fulfill(recipe_name, amount_paid, Some(user.id))
            .await
    }

    // --- Ingredients ---

    pub async fn create_ingredient(
        &self,
        user: &User,
        params: IngredientCreate,
    ) -> Result<IngredientId, LedgerError> {
        if !user.has_capability(Capability::AddIngredientsType) {
            return Err(LedgerError::Forbidden(Capability::AddIngredientsType));
        }
        self.system.ledger.create_ingredient(params).await
    }

    /// Set an ingredient's stock to an absolute count.
    pub async fn set_ingredient_quantity(
        &self,
        user: &User,
        name: &str,
        quantity: u32,
    ) -> Result<(), LedgerError> {
        if !user.has_capability(Capability::AddIngredients) {
            return Err(LedgerError::Forbidden(Capability::AddIngredients));
        }
        self.system.ledger.set_quantity(name, quantity).await
    }

    pub async fn delete_ingredient(&self, user: &User, name: &str) -> Result<(), LedgerError> {
        if !user.has_capability(Capability::AddIngredientsType) {
            return Err(LedgerError::Forbidden(Capability::AddIngredientsType));
        }
        let ingredient = self
            .system
            .ledger
            .find_by_name(name)
            .await?
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        self.system.ledger.delete(ingredient.id).await
    }

    pub async fn find_ingredient(&self, name: &str) -> Result<Option<Ingredient>, LedgerError> {
        self.system.ledger.find_by_name(name).await
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, LedgerError> {
        self.system.ledger.list().await
    }

    // --- Recipes ---

    pub async fn create_recipe(&self, user: &User, spec: RecipeSpec) -> Result<Recipe, CatalogError> {
        if !user.has_capability(Capability::AddIngredientsType) {
            return Err(CatalogError::Forbidden(Capability::AddIngredientsType));
        }
        let id = self.system.catalog.create_recipe(spec).await?;
        self.system
            .catalog
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Swap the named recipe for a new definition, atomically. A failed
    /// validation leaves the catalog exactly as it was.
    pub async fn replace_recipe(
        &self,
        user: &User,
        name: &str,
        spec: RecipeSpec,
    ) -> Result<(), CatalogError> {
        if !user.has_capability(Capability::AddIngredientsType) {
            return Err(CatalogError::Forbidden(Capability::AddIngredientsType));
        }
        self.system.catalog.replace_recipe(name, spec).await
    }

    pub async fn delete_recipe(&self, user: &User, name: &str) -> Result<(), CatalogError> {
        if !user.has_capability(Capability::AddIngredientsType) {
            return Err(CatalogError::Forbidden(Capability::AddIngredientsType));
        }
        self.system.catalog.remove_recipe(name).await
    }

    pub async fn find_recipe(&self, name: &str) -> Result<Option<Recipe>, CatalogError> {
        self.system.catalog.find_by_name(name).await
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.system.catalog.list().await
    }

    // --- Orders ---

    /// Record an order directly, bypassing fulfillment. The owning user's
    /// history picks up the new entry once the canonical write is done.
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        let id = self.system.orders.create_order(params).await?;
        let order = self
            .system
            .orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        if let Err(e) = self.history.update(&order).await {
            warn!(order = %id, error = %e, "order history update failed");
        }
        Ok(order)
    }

    pub async fn edit_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        self.system.orders.update_order(id, update).await
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        let order = self
            .system
            .orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        self.system.orders.delete(id).await?;
        if let Err(e) = self.history.detach(&order).await {
            warn!(order = %id, error = %e, "order history detach failed");
        }
        Ok(())
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.system.orders.get(id).await
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.system.orders.list().await
    }

    // --- Accounts ---

    /// Register an account. Anyone may sign up as a customer; creating a
    /// staff or manager account requires the staff-management capability.
    pub async fn create_account(
        &self,
        requesting: Option<&User>,
        params: UserCreate,
    ) -> Result<UserId, UserError> {
        if params.role != Role::Customer {
            let authorized = requesting
                .map(|user| user.has_capability(Capability::AddStaffAccount))
                .unwrap_or(false);
            if !authorized {
                return Err(UserError::Forbidden(Capability::AddStaffAccount));
            }
        }
        self.system.users.create_user(params).await
    }

    pub async fn update_account(
        &self,
        requesting: &User,
        username: &str,
        update: UserUpdate,
    ) -> Result<User, UserError> {
        if !requesting.has_capability(Capability::AddStaffAccount) {
            return Err(UserError::Forbidden(Capability::AddStaffAccount));
        }
        let user = self
            .system
            .users
            .find_by_name(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;
        self.system.users.update_user(user.id, update).await
    }

    pub async fn delete_account(&self, requesting: &User, username: &str) -> Result<(), UserError> {
        if !requesting.has_capability(Capability::AddStaffAccount) {
            return Err(UserError::Forbidden(Capability::AddStaffAccount));
        }
        let user = self
            .system
            .users
            .find_by_name(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;
        self.system.users.delete(user.id).await
    }

    pub async fn find_account(&self, username: &str) -> Result<Option<User>, UserError> {
        self.system.users.find_by_name(username).await
    }

    /// Ensure the stock accounts exist: manager, staff and customer, each
    /// with its role. Hashing happens outside this service; the given opaque
    /// hash is stored as-is for any account that gets created.
    pub async fn seed_default_accounts(&self, password_hash: &str) -> Result<(), UserError> {
        for (username, role) in DEFAULT_ACCOUNTS {
            if self.system.users.find_by_name(username).await?.is_none() {
                self.system
                    .users
                    .create_user(UserCreate {
                        username: username.to_string(),
                        password_hash: password_hash.to_string(),
                        role,
                    })
                    .await?;
                info!(username, role = role.name(), "seeded default account");
            }
        }
        Ok(())
    }
}

impl Default for CoffeeShop {
    fn default() -> Self {
        Self::new()
    }
}
