//! Cart-to-order conversion.
//!
//! Runs inside the cart actor while it handles [`CartAction::Checkout`](super::CartAction::Checkout),
//! so no other mutation of the same cart can interleave between reading the
//! lines and clearing them.

use super::error::CartError;
use crate::clients::OrderClient;
use crate::model::{Cart, Order, OrderCreate};
use tracing::{debug, info};

/// Records `cart` as a new order and empties it.
///
/// An empty cart is rejected before the order ledger is contacted. When the
/// ledger fails the cart is left exactly as it was.
pub(crate) async fn checkout(cart: &mut Cart, orders: &OrderClient) -> Result<Order, CartError> {
    if cart.is_empty() {
        debug!(user_id = %cart.user_id, "Checkout rejected: empty cart");
        return Err(CartError::EmptyCart(cart.user_id.clone()));
    }

    let order = orders
        .create_order(OrderCreate {
            user_id: cart.user_id.clone(),
            items: cart.items.clone(),
            total_price: cart.total_price,
        })
        .await?;

    cart.clear();
    info!(user_id = %order.user_id, order_id = %order.id, total = order.total_price, "Checked out");
    Ok(order)
}
