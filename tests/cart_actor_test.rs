//! Real Cart actor with a mocked Order dependency.
//!
//! These exercise checkout as it runs inside the cart actor while isolating
//! it from the order ledger.

use chrono::Utc;
use commerce_store::cart_actor::CartError;
use commerce_store::clients::{CartClient, OrderClient};
use commerce_store::framework::mock::{create_mock_client, expect_create, MockClient};
use commerce_store::framework::{ActorClient, FrameworkError};
use commerce_store::model::{
    Cart, Order, OrderId, Product, ProductCreate, ProductId, UserId, ORDER_STATUS_PENDING,
};
use commerce_store::order_actor::OrderError;

fn product(id: u32, price: u64) -> Product {
    Product::new(
        ProductId(id),
        ProductCreate {
            name: format!("product {id}"),
            price,
            stock: 10,
            ..Default::default()
        },
    )
}

fn start_cart_actor(orders: OrderClient) -> (CartClient, tokio::task::JoinHandle<()>) {
    let (cart_actor, cart_client) = commerce_store::cart_actor::new(10);
    let handle = tokio::spawn(cart_actor.run(orders));
    (cart_client, handle)
}

#[tokio::test]
async fn test_checkout_records_snapshot_and_clears_cart() {
    let (order_generic, mut order_requests) = create_mock_client::<Order>(10);
    let (carts, handle) = start_cart_actor(OrderClient::new(order_generic));
    let alice = UserId::from("alice");

    carts.add_item(alice.clone(), product(1, 100_000), 2).await.unwrap();
    carts.add_item(alice.clone(), product(2, 50_000), 2).await.unwrap();

    let checkout = {
        let carts = carts.clone();
        let alice = alice.clone();
        tokio::spawn(async move { carts.checkout(alice).await })
    };

    // The cart actor asks the order ledger to record the snapshot.
    let (params, responder) = expect_create(&mut order_requests)
        .await
        .expect("Expected Create request");
    assert_eq!(params.user_id, alice);
    assert_eq!(params.total_price, 300_000);
    assert_eq!(params.items.len(), 2);

    let order = Order {
        id: OrderId(1),
        user_id: params.user_id,
        items: params.items,
        total_price: params.total_price,
        status: ORDER_STATUS_PENDING.to_string(),
        created_at: Utc::now(),
    };
    responder.send(Ok(order.clone())).unwrap();

    assert_eq!(checkout.await.unwrap().unwrap(), order);
    let cart = carts.get_cart(alice.clone()).await.unwrap();
    assert_eq!(cart, Cart::empty(alice));

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_checkout_never_reaches_order_ledger() {
    // No expectations: any order request would be recorded as unexpected.
    let order_mock = MockClient::<Order>::new();
    let (carts, handle) = start_cart_actor(OrderClient::new(order_mock.client()));

    let result = carts.checkout(UserId::from("bob")).await;
    assert_eq!(result, Err(CartError::EmptyCart(UserId::from("bob"))));

    // A failed first action does not leave a stored cart behind.
    assert!(carts.get(UserId::from("bob")).await.unwrap().is_none());

    order_mock.verify();
    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_order_leaves_cart_untouched() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock.expect_create().return_err(FrameworkError::ActorClosed);
    let (carts, handle) = start_cart_actor(OrderClient::new(order_mock.client()));
    let carol = UserId::from("carol");

    let before = carts.add_item(carol.clone(), product(7, 25), 4).await.unwrap();
    let result = carts.checkout(carol.clone()).await;
    assert!(matches!(
        result,
        Err(CartError::OrderFailed(OrderError::ActorCommunicationError(_)))
    ));
    assert_eq!(carts.get_cart(carol).await.unwrap(), before);

    order_mock.verify();
    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_only_non_empty_mutations_create_the_cart() {
    let order_mock = MockClient::<Order>::new();
    let (carts, handle) = start_cart_actor(OrderClient::new(order_mock.client()));
    let dan = UserId::from("dan");

    // No-op mutations on an unknown user answer with an empty cart but store nothing.
    let cart = carts.remove_item(dan.clone(), ProductId(1)).await.unwrap();
    assert!(cart.is_empty());
    let cart = carts.clear(UserId::from("ghost")).await.unwrap();
    assert!(cart.is_empty());
    assert!(carts.get(dan.clone()).await.unwrap().is_none());
    assert!(carts.get(UserId::from("ghost")).await.unwrap().is_none());

    let cart = carts.add_item(dan.clone(), product(1, 10), 1).await.unwrap();
    let cart_again = carts.add_item(dan.clone(), product(1, 10), 4).await.unwrap();
    assert_eq!(cart.items[0].quantity, 1);
    assert_eq!(cart_again.items[0].quantity, 5);
    assert_eq!(cart_again.total_price, 50);

    let cleared = carts.clear(dan.clone()).await.unwrap();
    assert_eq!(cleared, Cart::empty(dan));

    drop(carts);
    handle.await.unwrap();
}
