//! Shopping cart state.
//!
//! The pure mutations live on [`Cart`] itself; the cart actor only decides
//! when to call them. Every structural change recomputes `total_price`, so
//! `total_price == Σ item.product.price * item.quantity` holds after each one.

use crate::framework::EntityId;
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Caller-supplied cart owner key.
///
/// Carts are keyed by their user, so the cart actor never mints these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl EntityId for UserId {
    fn from_sequence(_seq: u32) -> Option<Self> {
        None
    }
}

/// A product snapshot paired with a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: UserId,
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
    pub total_price: u64,
}

impl Cart {
    /// The implicit cart of a user with no prior activity.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total_price: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of `product`.
    ///
    /// An existing line for the same product id has its quantity increased and
    /// its snapshot replaced by `product`; otherwise a line is appended.
    pub fn add_line(&mut self, product: Product, quantity: u32) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                item.product = product;
            }
            None => self.items.push(CartItem { product, quantity }),
        }
        self.recompute();
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove_line(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        self.recompute();
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total_price = self
            .items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.line_total()));
    }
}
