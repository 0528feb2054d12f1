use actor_store::mock::MockClient;
use actor_store::FrameworkError;
use coffeemaker::clients::{CatalogClient, LedgerClient, OrderClient, UserClient};
use coffeemaker::fulfillment::FulfillmentEngine;
use coffeemaker::history::OrderHistoryIndex;
use coffeemaker::ledger_actor::{LedgerActionResult, LedgerError};
use coffeemaker::model::{
    Ingredient, IngredientId, Order, OrderId, Recipe, RecipeId, User, UserId,
};
use coffeemaker::order_actor::OrderError;

/// Fulfillment engine with every dependency mocked. Exercises the engine's
/// transaction logic in isolation from the real actors.
struct Mocks {
    catalog: MockClient<Recipe>,
    ledger: MockClient<Ingredient>,
    orders: MockClient<Order>,
    users: MockClient<User>,
}

fn engine_with_mocks() -> (FulfillmentEngine, Mocks) {
    let catalog = MockClient::<Recipe>::new();
    let ledger = MockClient::<Ingredient>::new();
    let orders = MockClient::<Order>::new();
    let users = MockClient::<User>::new();

    let ledger_client = LedgerClient::new(ledger.client());
    let engine = FulfillmentEngine::new(
        CatalogClient::new(catalog.client(), ledger_client.clone()),
        ledger_client,
        OrderClient::new(orders.client()),
        OrderHistoryIndex::new(UserClient::new(users.client())),
    );

    (
        engine,
        Mocks {
            catalog,
            ledger,
            orders,
            users,
        },
    )
}

fn mocha() -> Recipe {
    let mut recipe = Recipe::new(RecipeId(1), "Mocha", 10);
    recipe.add_line(IngredientId(1), "Coffee", 1);
    recipe.add_line(IngredientId(2), "Milk", 1);
    recipe
}

fn stored_order(user: Option<UserId>) -> Order {
    Order {
        id: OrderId(7),
        recipe: Some(RecipeId(1)),
        status: "Preparing".to_string(),
        amount_paid: 100,
        amount_change: 90,
        user,
    }
}

#[tokio::test]
async fn fulfill_walks_the_whole_transaction() {
    let (engine, mut mocks) = engine_with_mocks();

    mocks.catalog.expect_find_by_name("Mocha").return_ok(Some(mocha()));
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::CheckAvailability(true));
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::Deduct(()));
    mocks.orders.expect_create().return_ok(OrderId(7));
    mocks
        .orders
        .expect_get(OrderId(7))
        .return_ok(Some(stored_order(Some(UserId(3)))));
    mocks.users.expect_action(UserId(3)).return_ok(());

    let change = engine.fulfill("Mocha", 100, Some(UserId(3))).await.unwrap();
    assert_eq!(change, 90);

    mocks.catalog.verify();
    mocks.ledger.verify();
    mocks.orders.verify();
    mocks.users.verify();
}

#[tokio::test]
async fn underpayment_stops_before_the_ledger() {
    let (engine, mut mocks) = engine_with_mocks();

    mocks.catalog.expect_find_by_name("Mocha").return_ok(Some(mocha()));

    let result = engine.fulfill("Mocha", 2, Some(UserId(3))).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InsufficientPayment { paid: 2, price: 10 }
    );

    // No availability check, no deduction, no order
    mocks.catalog.verify();
    mocks.ledger.verify();
    mocks.orders.verify();
    mocks.users.verify();
}

#[tokio::test]
async fn unavailable_stock_stops_before_the_deduction() {
    let (engine, mut mocks) = engine_with_mocks();

    mocks.catalog.expect_find_by_name("Mocha").return_ok(Some(mocha()));
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::CheckAvailability(false));

    let result = engine.fulfill("Mocha", 100, Some(UserId(3))).await;
    assert_eq!(result.unwrap_err(), OrderError::InsufficientIngredients);

    mocks.ledger.verify();
    mocks.orders.verify();
}

#[tokio::test]
async fn losing_the_deduction_race_creates_no_order() {
    let (engine, mut mocks) = engine_with_mocks();

    mocks.catalog.expect_find_by_name("Mocha").return_ok(Some(mocha()));
    // The check passes, but a concurrent purchase drains the stock before
    // the deduction lands
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::CheckAvailability(true));
    mocks
        .ledger
        .expect_store_action()
        .return_err(FrameworkError::EntityError(Box::new(
            LedgerError::InsufficientQuantity {
                name: "Milk".to_string(),
                requested: 1,
                available: 0,
            },
        )));

    let result = engine.fulfill("Mocha", 100, Some(UserId(3))).await;
    assert_eq!(result.unwrap_err(), OrderError::InsufficientIngredients);

    mocks.ledger.verify();
    mocks.orders.verify();
    mocks.users.verify();
}

#[tokio::test]
async fn anonymous_purchases_skip_the_history_mirror() {
    let (engine, mut mocks) = engine_with_mocks();

    mocks.catalog.expect_find_by_name("Mocha").return_ok(Some(mocha()));
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::CheckAvailability(true));
    mocks
        .ledger
        .expect_store_action()
        .return_ok(LedgerActionResult::Deduct(()));
    mocks.orders.expect_create().return_ok(OrderId(7));
    mocks
        .orders
        .expect_get(OrderId(7))
        .return_ok(Some(stored_order(None)));
    // No expectation on the user mock: the history index must not be called

    let change = engine.fulfill("Mocha", 100, None).await.unwrap();
    assert_eq!(change, 90);

    mocks.users.verify();
}
