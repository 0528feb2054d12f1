use actor_store::ActorClient;
use coffeemaker::catalog_actor::CatalogError;
use coffeemaker::fulfillment::FulfillmentEngine;
use coffeemaker::history::OrderHistoryIndex;
use coffeemaker::ledger_actor::LedgerError;
use coffeemaker::lifecycle::CoffeeSystem;
use coffeemaker::model::{
    Capability, IngredientCreate, OrderCreate, OrderUpdate, RecipeLineSpec, RecipeSpec, Role,
    User, UserCreate, UserUpdate,
};
use coffeemaker::order_actor::OrderError;
use coffeemaker::shop::CoffeeShop;
use coffeemaker::user_actor::UserError;

fn mocha() -> RecipeSpec {
    RecipeSpec {
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
                ingredient: "Tea".to_string(),
                quantity: 1,
            },
        ],
    }
}

fn simple_recipe(name: &str, price: u32) -> RecipeSpec {
    RecipeSpec {
        name: name.to_string(),
        price,
        lines: vec![RecipeLineSpec {
            ingredient: "Coffee".to_string(),
            quantity: 1,
        }],
    }
}

/// Seeds the default accounts, stocks {Coffee:3, Milk:3, Tea:1} and creates
/// the Mocha recipe. Returns the shop plus the manager and customer users.
async fn shop_with_mocha() -> (CoffeeShop, User, User) {
    let shop = CoffeeShop::new();
    shop.seed_default_accounts("hash").await.unwrap();
    let manager = shop.find_account("manager").await.unwrap().unwrap();
    let customer = shop.find_account("customer").await.unwrap().unwrap();

    for (name, quantity) in [("Coffee", 3), ("Milk", 3), ("Tea", 1)] {
        shop.create_ingredient(
            &manager,
            IngredientCreate {
                name: name.to_string(),
                quantity,
            },
        )
        .await
        .unwrap();
    }
    shop.create_recipe(&manager, mocha()).await.unwrap();

    (shop, manager, customer)
}

async fn quantity_of(shop: &CoffeeShop, name: &str) -> u32 {
    shop.find_ingredient(name).await.unwrap().unwrap().quantity
}

#[tokio::test]
async fn purchase_returns_change_and_deducts_stock() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let change = shop.make_purchase(&customer, "Mocha", 100).await.unwrap();
    assert_eq!(change, 90);

    assert_eq!(quantity_of(&shop, "Coffee").await, 2);
    assert_eq!(quantity_of(&shop, "Milk").await, 2);
    assert_eq!(quantity_of(&shop, "Tea").await, 0);

    // The canonical order and the customer's cached history agree
    let orders = shop.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].amount_paid, 100);
    assert_eq!(orders[0].amount_change, 90);
    assert_eq!(orders[0].status, "Preparing");
    assert_eq!(orders[0].user, Some(customer.id));

    let cached = shop.find_account("customer").await.unwrap().unwrap().orders;
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, orders[0].id);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn underpayment_changes_nothing() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let result = shop.make_purchase(&customer, "Mocha", 2).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InsufficientPayment { paid: 2, price: 10 }
    );

    assert_eq!(quantity_of(&shop, "Coffee").await, 3);
    assert_eq!(quantity_of(&shop, "Milk").await, 3);
    assert_eq!(quantity_of(&shop, "Tea").await, 1);
    assert!(shop.list_orders().await.unwrap().is_empty());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_recipe_is_rejected() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let result = shop.make_purchase(&customer, "Espresso", 100).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::RecipeNotFound("Espresso".to_string())
    );

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn missing_ingredients_block_the_purchase() {
    let (shop, manager, customer) = shop_with_mocha().await;
    shop.set_ingredient_quantity(&manager, "Tea", 0)
        .await
        .unwrap();

    let result = shop.make_purchase(&customer, "Mocha", 100).await;
    assert_eq!(result.unwrap_err(), OrderError::InsufficientIngredients);

    // Nothing was deducted from the ingredients that were in stock
    assert_eq!(quantity_of(&shop, "Coffee").await, 3);
    assert_eq!(quantity_of(&shop, "Milk").await, 3);
    assert!(shop.list_orders().await.unwrap().is_empty());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn fourth_recipe_is_rejected() {
    let (shop, manager, _customer) = shop_with_mocha().await;

    shop.create_recipe(&manager, simple_recipe("Latte", 8))
        .await
        .unwrap();
    shop.create_recipe(&manager, simple_recipe("Americano", 6))
        .await
        .unwrap();

    let result = shop
        .create_recipe(&manager, simple_recipe("Hot Chocolate", 7))
        .await;
    assert_eq!(
        result.unwrap_err(),
        CatalogError::CatalogFull("Hot Chocolate".to_string())
    );
    assert_eq!(shop.list_recipes().await.unwrap().len(), 3);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn recipe_with_unknown_ingredient_is_not_persisted() {
    let (shop, manager, _customer) = shop_with_mocha().await;

    let chai = RecipeSpec {
        name: "Chai".to_string(),
        price: 5,
        lines: vec![RecipeLineSpec {
            ingredient: "Cocoa".to_string(),
            quantity: 1,
        }],
    };
    let result = shop.create_recipe(&manager, chai).await;
    assert_eq!(
        result.unwrap_err(),
        CatalogError::UnknownIngredient("Cocoa".to_string())
    );
    assert!(shop.find_recipe("Chai").await.unwrap().is_none());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_purchases_race_for_the_last_tea() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let engine = shop.engine().clone();
    let first = {
        let engine = engine.clone();
        let customer = customer.id;
        tokio::spawn(async move { engine.fulfill("Mocha", 100, Some(customer)).await })
    };
    let second = {
        let customer = customer.id;
        tokio::spawn(async move { engine.fulfill("Mocha", 100, Some(customer)).await })
    };

    let outcomes = [first.await.unwrap(), second.await.unwrap()];
    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(successes, 1, "exactly one purchase must win");
    for outcome in &outcomes {
        if let Err(e) = outcome {
            assert_eq!(*e, OrderError::InsufficientIngredients);
        } else {
            assert_eq!(*outcome.as_ref().unwrap(), 90);
        }
    }

    assert_eq!(quantity_of(&shop, "Tea").await, 0);
    assert_eq!(quantity_of(&shop, "Coffee").await, 2);
    assert_eq!(quantity_of(&shop, "Milk").await, 2);
    assert_eq!(shop.list_orders().await.unwrap().len(), 1);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn failed_replace_leaves_catalog_identical() {
    let (shop, manager, _customer) = shop_with_mocha().await;
    let before = shop.find_recipe("Mocha").await.unwrap().unwrap();

    let invalid = RecipeSpec {
        name: "Mocha Deluxe".to_string(),
        price: 12,
        lines: vec![RecipeLineSpec {
            ingredient: "Unobtainium".to_string(),
            quantity: 1,
        }],
    };
    let result = shop.replace_recipe(&manager, "Mocha", invalid).await;
    assert_eq!(
        result.unwrap_err(),
        CatalogError::UnknownIngredient("Unobtainium".to_string())
    );

    let after = shop.find_recipe("Mocha").await.unwrap().unwrap();
    assert_eq!(before, after);
    assert_eq!(shop.list_recipes().await.unwrap().len(), 1);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn replace_swaps_definition_but_keeps_identity() {
    let (shop, manager, _customer) = shop_with_mocha().await;
    let before = shop.find_recipe("Mocha").await.unwrap().unwrap();

    shop.replace_recipe(&manager, "Mocha", simple_recipe("Morning Mocha", 12))
        .await
        .unwrap();

    assert!(shop.find_recipe("Mocha").await.unwrap().is_none());
    let after = shop.find_recipe("Morning Mocha").await.unwrap().unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.price, 12);
    assert_eq!(after.lines.len(), 1);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn history_update_is_idempotent() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let order = shop
        .place_order(OrderCreate {
            recipe: None,
            status: None,
            amount_paid: 5,
            amount_change: 0,
            user: Some(customer.id),
        })
        .await
        .unwrap();
    assert_eq!(order.status, "Preparing");

    // A second update with the identical order must not duplicate the entry
    shop.history().update(&order).await.unwrap();
    shop.history().update(&order).await.unwrap();

    let cached = shop.find_account("customer").await.unwrap().unwrap().orders;
    assert_eq!(cached.len(), 1);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn order_edits_mirror_into_the_owner_cache() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let order = shop
        .place_order(OrderCreate {
            recipe: None,
            status: Some("Preparing".to_string()),
            amount_paid: 10,
            amount_change: 0,
            user: Some(customer.id),
        })
        .await
        .unwrap();

    shop.edit_order(
        order.id,
        OrderUpdate {
            status: Some("finished".to_string()),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap();

    let cached = shop.find_account("customer").await.unwrap().unwrap().orders;
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].status, "finished");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn rehoming_an_order_detaches_the_previous_owner() {
    let (shop, _manager, customer) = shop_with_mocha().await;
    let other_id = shop
        .create_account(
            None,
            UserCreate {
                username: "walk-in".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Customer,
            },
        )
        .await
        .unwrap();

    let order = shop
        .place_order(OrderCreate {
            recipe: None,
            status: None,
            amount_paid: 3,
            amount_change: 0,
            user: Some(customer.id),
        })
        .await
        .unwrap();

    shop.edit_order(
        order.id,
        OrderUpdate {
            user: Some(other_id),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap();

    let previous = shop.find_account("customer").await.unwrap().unwrap();
    assert!(previous.orders.is_empty());
    let current = shop.find_account("walk-in").await.unwrap().unwrap();
    assert_eq!(current.orders.len(), 1);
    assert_eq!(current.orders[0].id, order.id);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn deleting_an_order_evicts_the_cache_entry() {
    let (shop, _manager, customer) = shop_with_mocha().await;

    let order = shop
        .place_order(OrderCreate {
            recipe: None,
            status: None,
            amount_paid: 3,
            amount_change: 0,
            user: Some(customer.id),
        })
        .await
        .unwrap();
    shop.delete_order(order.id).await.unwrap();

    assert!(shop.get_order(order.id).await.unwrap().is_none());
    let cached = shop.find_account("customer").await.unwrap().unwrap().orders;
    assert!(cached.is_empty());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn capability_gates_hold() {
    let (shop, _manager, customer) = shop_with_mocha().await;
    let staff = shop.find_account("staff").await.unwrap().unwrap();

    let result = shop
        .create_ingredient(
            &customer,
            IngredientCreate {
                name: "Sugar".to_string(),
                quantity: 5,
            },
        )
        .await;
    assert_eq!(
        result.unwrap_err(),
        LedgerError::Forbidden(Capability::AddIngredientsType)
    );

    let result = shop
        .set_ingredient_quantity(&customer, "Coffee", 50)
        .await;
    assert_eq!(
        result.unwrap_err(),
        LedgerError::Forbidden(Capability::AddIngredients)
    );

    let result = shop.delete_recipe(&customer, "Mocha").await;
    assert_eq!(
        result.unwrap_err(),
        CatalogError::Forbidden(Capability::AddIngredientsType)
    );

    // Staff can run the inventory but cannot mint staff accounts
    let result = shop
        .create_account(
            Some(&staff),
            UserCreate {
                username: "new-barista".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Staff,
            },
        )
        .await;
    assert_eq!(
        result.unwrap_err(),
        UserError::Forbidden(Capability::AddStaffAccount)
    );

    // Anyone may sign up as a customer
    shop.create_account(
        None,
        UserCreate {
            username: "guest".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Customer,
        },
    )
    .await
    .unwrap();

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn account_validation_matches_the_ledger_rules() {
    let shop = CoffeeShop::new();
    shop.seed_default_accounts("hash").await.unwrap();

    let duplicate = shop
        .create_account(
            None,
            UserCreate {
                username: "customer".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Customer,
            },
        )
        .await;
    assert_eq!(
        duplicate.unwrap_err(),
        UserError::DuplicateUsername("customer".to_string())
    );

    let reserved = shop
        .create_account(
            None,
            UserCreate {
                username: "self".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Customer,
            },
        )
        .await;
    assert_eq!(
        reserved.unwrap_err(),
        UserError::ReservedUsername("self".to_string())
    );

    // Account administration is manager territory
    let manager = shop.find_account("manager").await.unwrap().unwrap();
    let customer = shop.find_account("customer").await.unwrap().unwrap();

    let forbidden = shop
        .update_account(
            &customer,
            "staff",
            UserUpdate {
                password_hash: None,
                role: Some(Role::Manager),
            },
        )
        .await;
    assert_eq!(
        forbidden.unwrap_err(),
        UserError::Forbidden(Capability::AddStaffAccount)
    );

    let promoted = shop
        .update_account(
            &manager,
            "staff",
            UserUpdate {
                password_hash: None,
                role: Some(Role::Manager),
            },
        )
        .await
        .unwrap();
    assert_eq!(promoted.role, Role::Manager);

    shop.delete_account(&manager, "staff").await.unwrap();
    assert!(shop.find_account("staff").await.unwrap().is_none());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn ingredient_validation_and_restock() {
    let shop = CoffeeShop::new();
    shop.seed_default_accounts("hash").await.unwrap();
    let manager = shop.find_account("manager").await.unwrap().unwrap();

    shop.create_ingredient(
        &manager,
        IngredientCreate {
            name: "Coffee".to_string(),
            quantity: 2,
        },
    )
    .await
    .unwrap();

    let duplicate = shop
        .create_ingredient(
            &manager,
            IngredientCreate {
                name: "Coffee".to_string(),
                quantity: 5,
            },
        )
        .await;
    assert_eq!(
        duplicate.unwrap_err(),
        LedgerError::DuplicateName("Coffee".to_string())
    );

    let empty = shop
        .create_ingredient(
            &manager,
            IngredientCreate {
                name: "  ".to_string(),
                quantity: 5,
            },
        )
        .await;
    assert_eq!(empty.unwrap_err(), LedgerError::EmptyName);

    let zero = shop
        .create_ingredient(
            &manager,
            IngredientCreate {
                name: "Sugar".to_string(),
                quantity: 0,
            },
        )
        .await;
    assert_eq!(zero.unwrap_err(), LedgerError::InvalidQuantity);

    shop.set_ingredient_quantity(&manager, "Coffee", 40)
        .await
        .unwrap();
    assert_eq!(quantity_of(&shop, "Coffee").await, 40);

    let missing = shop.set_ingredient_quantity(&manager, "Cocoa", 4).await;
    assert_eq!(
        missing.unwrap_err(),
        LedgerError::NotFound("Cocoa".to_string())
    );

    // Bulk reset drops the whole table
    shop.ledger().delete_all().await.unwrap();
    assert!(shop.list_ingredients().await.unwrap().is_empty());

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn engine_can_fulfill_anonymous_purchases() {
    let system = CoffeeSystem::new();
    system
        .ledger
        .create_ingredient(IngredientCreate {
            name: "Coffee".to_string(),
            quantity: 2,
        })
        .await
        .unwrap();
    system
        .catalog
        .create_recipe(simple_recipe("Americano", 4))
        .await
        .unwrap();

    let engine = FulfillmentEngine::new(
        system.catalog.clone(),
        system.ledger.clone(),
        system.orders.clone(),
        OrderHistoryIndex::new(system.users.clone()),
    );

    let change = engine.fulfill("Americano", 5, None).await.unwrap();
    assert_eq!(change, 1);

    let orders = system.orders.list().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].user, None);

    system.shutdown().await.unwrap();
}
