//! # System Lifecycle & Orchestration
//!
//! Wires the four actors together and manages their lifetime. Actors are
//! created first without dependencies, then started with the clients they
//! need injected as context; this late binding keeps construction free of
//! ordering problems.
//!
//! Shutdown follows the channel-closure pattern: dropping every client
//! closes the request channels, each actor drains its queue and exits, and
//! the join handles are awaited. The dependency graph (orders hold a user
//! client in their context) is acyclic, so closure propagates cleanly.

use crate::catalog_actor;
use crate::clients::{CatalogClient, LedgerClient, OrderClient, UserClient};
use crate::ledger_actor;
use crate::order_actor;
use crate::user_actor;
use tracing::{error, info};

/// The running actor system: one client per table plus the join handles used
/// for graceful shutdown.
pub struct CoffeeSystem {
    /// Client for the ingredient ledger actor
    pub ledger: LedgerClient,

    /// Client for the recipe catalog actor
    pub catalog: CatalogClient,

    /// Client for the order actor
    pub orders: OrderClient,

    /// Client for the user actor
    pub users: UserClient,

    /// Task handles for all running actors
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CoffeeSystem {
    /// Creates and starts the whole system.
    pub fn new() -> Self {
        // Ledger first: the catalog client resolves ingredients through it
        let (ledger_actor, ledger) = ledger_actor::new();
        let ledger_handle = tokio::spawn(ledger_actor.run(()));

        let (catalog_actor, catalog) = catalog_actor::new(ledger.clone());
        let catalog_handle = tokio::spawn(catalog_actor.run(()));

        let (user_actor, users) = user_actor::new();
        let user_handle = tokio::spawn(user_actor.run(()));

        // The order actor mirrors edits into user caches, so it gets the
        // user client as context
        let (order_actor, orders) = order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(users.clone()));

        info!("Coffee system started");

        Self {
            ledger,
            catalog,
            orders,
            users,
            handles: vec![ledger_handle, catalog_handle, user_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system: close every channel by dropping the
    /// clients, then wait for each actor task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let CoffeeSystem {
            ledger,
            catalog,
            orders,
            users,
            handles,
        } = self;
        drop(orders);
        drop(catalog);
        drop(ledger);
        drop(users);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CoffeeSystem {
    fn default() -> Self {
        Self::new()
    }
}
