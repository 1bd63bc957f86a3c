//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are minted by checkout with a fresh id, a `"pending"` status and
//! the creation time. The only permitted mutation is a status overwrite.

use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate, ORDER_STATUS_PENDING};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            user_id: params.user_id,
            items: params.items,
            total_price: params.total_price,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        self.user_id == filter.user_id
    }

    /// Overwrites the status. No transition rules apply.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &(),
    ) -> Result<Infallible, Self::Error> {
        match action {}
    }
}
