//! ActorEntity trait implementation for the Product domain type.
//!
//! Products are created by catalog inserts, listed through [`ProductFilter`],
//! and afterwards change only through stock actions.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Id 0 is treated as unset and takes the next id from the counter.
    fn requested_id(params: &ProductCreate) -> Option<ProductId> {
        params.id.filter(|id| id.0 != 0)
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.accepts(self)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `AdjustStock`: Applies a signed delta, returning the new level
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::AdjustStock(delta) => {
                let next = i64::from(self.stock) + delta;
                if next < 0 {
                    return Err(ProductError::InsufficientStock {
                        requested: delta.unsigned_abs(),
                        available: self.stock,
                    });
                }
                self.stock = u32::try_from(next).map_err(|_| ProductError::StockOutOfRange {
                    stock: self.stock,
                    delta,
                })?;
                Ok(ProductActionResult::AdjustStock(self.stock))
            }
        }
    }
}
