//! Cart endpoints: input validation and the stock check that precedes an add.

use super::error::ServiceError;
use crate::clients::{CartClient, ProductClient};
use crate::framework::ActorClient;
use crate::model::{Cart, ProductId, UserId};
use serde::Serialize;
use tracing::{instrument, warn};

/// A cart plus a human-readable confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartResponse {
    pub cart: Cart,
    pub message: String,
}

impl CartResponse {
    fn new(cart: Cart, message: &str) -> Self {
        Self {
            cart,
            message: message.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct CartService {
    carts: CartClient,
    products: ProductClient,
}

/// Rejects an empty user key.
pub(crate) fn require_user(user_id: &str) -> Result<UserId, ServiceError> {
    if user_id.is_empty() {
        return Err(ServiceError::invalid("user id is required"));
    }
    Ok(UserId::new(user_id))
}

/// Rejects the unset product id 0.
pub(crate) fn require_product(product_id: ProductId) -> Result<ProductId, ServiceError> {
    if product_id.0 == 0 {
        return Err(ServiceError::invalid("product id must be positive"));
    }
    Ok(product_id)
}

impl CartService {
    pub fn new(carts: CartClient, products: ProductClient) -> Self {
        Self { carts, products }
    }

    /// Adds a product to the user's cart after checking current stock.
    ///
    /// Stock is checked against the catalog at the time of the call but is
    /// not reserved, so concurrent adds may together exceed it.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        user_id: &str,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartResponse, ServiceError> {
        let user_id = require_user(user_id)?;
        let product_id = require_product(product_id)?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| ServiceError::invalid("quantity must be at least 1"))?;

        let product = self
            .products
            .get(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {product_id}")))?;

        if product.stock < quantity {
            warn!(stock = product.stock, quantity, "Insufficient stock");
            return Err(ServiceError::FailedPrecondition(format!(
                "insufficient stock: {} available",
                product.stock
            )));
        }

        let cart = self.carts.add_item(user_id, product, quantity).await?;
        Ok(CartResponse::new(cart, "Product added to cart"))
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: &str) -> Result<CartResponse, ServiceError> {
        let cart = self.carts.get_cart(require_user(user_id)?).await?;
        Ok(CartResponse::new(cart, "Cart retrieved"))
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        user_id: &str,
        product_id: ProductId,
    ) -> Result<CartResponse, ServiceError> {
        let cart = self
            .carts
            .remove_item(require_user(user_id)?, require_product(product_id)?)
            .await?;
        Ok(CartResponse::new(cart, "Product removed from cart"))
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: &str) -> Result<CartResponse, ServiceError> {
        let cart = self.carts.clear(require_user(user_id)?).await?;
        Ok(CartResponse::new(cart, "Cart cleared"))
    }
}
