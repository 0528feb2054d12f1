//! # CoffeeMaker
//!
//! An order-fulfillment and inventory service built on actor-backed entity
//! tables.
//!
//! - **[model]**: plain domain types (ingredients, recipes, orders, users,
//!   roles).
//! - **[ledger_actor]**: the ingredient inventory with atomic
//!   check-and-deduct.
//! - **[catalog_actor]**: the bounded recipe book with match-or-rollback
//!   replace.
//! - **[order_actor]** / **[user_actor]**: canonical orders and accounts,
//!   with the user-side order cache.
//! - **[clients]**: typed wrappers hiding the message passing.
//! - **[fulfillment]**: the purchase transaction.
//! - **[history]**: the order-history index keeping both sides consistent.
//! - **[shop]**: the capability-checked operation surface.
//! - **[lifecycle]**: wiring and graceful shutdown.

pub mod catalog_actor;
pub mod clients;
pub mod fulfillment;
pub mod history;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod shop;
pub mod user_actor;
