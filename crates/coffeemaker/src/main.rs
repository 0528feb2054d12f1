//! Demo entry point: starts the shop, seeds accounts and inventory, creates
//! a recipe and walks one purchase through the system.

use actor_store::tracing::setup_tracing;
use coffeemaker::model::{IngredientCreate, RecipeLineSpec, RecipeSpec};
use coffeemaker::shop::CoffeeShop;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting coffee shop");
    let shop = CoffeeShop::new();

    shop.seed_default_accounts("$demo$not-a-real-hash")
        .await
        .map_err(|e| e.to_string())?;
    let manager = shop
        .find_account("manager")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("manager account missing after seeding")?;
    let customer = shop
        .find_account("customer")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("customer account missing after seeding")?;

    let span = tracing::info_span!("stocking");
    async {
        for (name, quantity) in [("Coffee", 10), ("Milk", 10), ("Chocolate", 5)] {
            info!(name, quantity, "stocking ingredient");
            shop.create_ingredient(
                &manager,
                IngredientCreate {
                    name: name.to_string(),
                    quantity,
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let mocha = RecipeSpec {
        name: "Mocha".to_string(),
        price: 10,
        lines: vec![
            RecipeLineSpec {
                ingredient: "Coffee".to_string(),
                quantity: 1,
            },
            RecipeLineSpec {
                ingredient: "Milk".to_string(),
                quantity: 1,
            },
            RecipeLineSpec {
                ingredient: "Chocolate".to_string(),
                quantity: 2,
            },
        ],
    };
    let recipe = shop
        .create_recipe(&manager, mocha)
        .await
        .map_err(|e| e.to_string())?;
    info!(recipe = %recipe.name, price = recipe.price, "recipe created");

    let span = tracing::info_span!("purchase");
    let result = async {
        info!("customer buys a Mocha");
        shop.make_purchase(&customer, "Mocha", 100).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(change) => info!(change, "purchase complete"),
        Err(e) => error!(error = %e, "purchase failed"),
    }

    let orders = shop.list_orders().await.map_err(|e| e.to_string())?;
    info!(count = orders.len(), "orders on record");

    shop.shutdown().await?;
    info!("Done");
    Ok(())
}
