//! Order endpoints: checkout, lookup, per-user history and status changes.

use super::cart::require_user;
use super::error::ServiceError;
use crate::clients::{CartClient, OrderClient};
use crate::framework::{ActorClient, PageRequest};
use crate::model::{Order, OrderId};
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListing {
    pub orders: Vec<Order>,
    pub total_count: usize,
}

#[derive(Clone)]
pub struct OrderService {
    carts: CartClient,
    orders: OrderClient,
}

/// Rejects an empty order id; anything that is not `ORDER-<n>` cannot exist.
fn parse_order_id(order_id: &str) -> Result<OrderId, ServiceError> {
    if order_id.is_empty() {
        return Err(ServiceError::invalid("order id is required"));
    }
    order_id
        .parse()
        .map_err(|_| ServiceError::NotFound(format!("order {order_id}")))
}

impl OrderService {
    pub fn new(carts: CartClient, orders: OrderClient) -> Self {
        Self { carts, orders }
    }

    /// Checks out the user's cart.
    #[instrument(skip(self))]
    pub async fn create_order(&self, user_id: &str) -> Result<Order, ServiceError> {
        let order = self.carts.checkout(require_user(user_id)?).await?;
        info!(order_id = %order.id, total = order.total_price, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ServiceError> {
        let id = parse_order_id(order_id)?;
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {id}")))
    }

    #[instrument(skip(self))]
    pub async fn list_user_orders(
        &self,
        user_id: &str,
        page: i32,
        page_size: i32,
    ) -> Result<OrderListing, ServiceError> {
        let result = self
            .orders
            .list_by_user(require_user(user_id)?, PageRequest::new(page, page_size))
            .await?;
        Ok(OrderListing {
            orders: result.items,
            total_count: result.total_count,
        })
    }

    /// Overwrites an order's status with any string.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: &str,
    ) -> Result<Order, ServiceError> {
        let id = parse_order_id(order_id)?;
        let order = self.orders.update_status(id, status.to_string()).await?;
        info!(order_id = %order.id, status = %order.status, "Order status updated");
        Ok(order)
    }
}
