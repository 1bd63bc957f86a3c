//! ActorEntity trait implementation for the Cart domain type.
//!
//! Carts are keyed by [`UserId`] and never created explicitly: the first
//! action against an unknown user starts from [`Cart::empty`], which the
//! actor stores only if the action succeeds and leaves at least one line.

use super::actions::{CartAction, CartActionResult};
use super::checkout::checkout;
use super::error::CartError;
use crate::clients::OrderClient;
use crate::framework::ActorEntity;
use crate::model::{Cart, UserId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = Infallible;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Filter = ();
    /// Checkout records orders through this client.
    type Context = OrderClient;
    type Error = CartError;

    fn from_create_params(_id: UserId, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    fn vacant(id: &UserId) -> Option<Self> {
        Some(Cart::empty(id.clone()))
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        orders: &OrderClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem { product, quantity } => {
                self.add_line(product, quantity);
                Ok(CartActionResult::AddItem(self.clone()))
            }
            CartAction::RemoveItem(product_id) => {
                self.remove_line(product_id);
                Ok(CartActionResult::RemoveItem(self.clone()))
            }
            CartAction::Clear => {
                self.clear();
                Ok(CartActionResult::Clear(self.clone()))
            }
            CartAction::Checkout => checkout(self, orders).await.map(CartActionResult::Checkout),
        }
    }
}
