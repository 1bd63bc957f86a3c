//! # Cart Client
//!
//! High-level API for the `Cart` actor. Every call is keyed by the cart
//! owner; a user without a stored cart reads as an empty cart.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Cart, Order, Product, ProductId, UserId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<CartError>() {
            Ok(err) => err,
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Returns the user's cart, or an empty one if none is stored.
    ///
    /// Reading never creates a cart.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        let cart = self.get(user_id.clone()).await?;
        Ok(cart.unwrap_or_else(|| Cart::empty(user_id)))
    }

    /// Adds `quantity` of `product` to the user's cart.
    ///
    /// Stock is not checked or reserved here.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(
        &self,
        user_id: UserId,
        product: Product,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::AddItem { product, quantity })
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::AddItem(cart) => Ok(cart),
            _ => unreachable!("AddItem action must return AddItem result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::RemoveItem(product_id))
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::RemoveItem(cart) => Ok(cart),
            _ => unreachable!("RemoveItem action must return RemoveItem result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: UserId) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::Clear)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Clear(cart) => Ok(cart),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    /// Converts the user's cart into an order and empties the cart.
    #[instrument(skip(self))]
    pub async fn checkout(&self, user_id: UserId) -> Result<Order, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, CartAction::Checkout)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Checkout(order) => Ok(order),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }
}
