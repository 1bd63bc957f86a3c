//! # Cart Actor
//!
//! One cart per user, held by a single actor. Carts spring into existence on
//! their first mutation and checkout runs as a cart action, which makes it
//! atomic with respect to every other change to the same cart.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`checkout`] - the cart-to-order conversion
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is an [`OrderClient`](crate::clients::OrderClient):
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(order_actor.run(()));
//! tokio::spawn(cart_actor.run(order_client.clone()));
//! ```

pub mod actions;
pub mod checkout;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
