//! Custom actions for the Cart actor.
//!
//! Every cart mutation, checkout included, is an action, so the cart actor
//! applies them one at a time per ledger.

use crate::model::{Cart, Order, Product, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds `quantity` of `product`, merging with an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Drops the line for a product. No-op when absent.
    RemoveItem(ProductId),
    /// Empties the cart.
    Clear,
    /// Converts the cart into an order and empties it.
    Checkout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem(Cart),
    RemoveItem(Cart),
    Clear(Cart),
    Checkout(Order),
}
