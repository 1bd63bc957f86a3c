//! Custom actions for the Product actor.
//!
//! These are the only ways a stored [`Product`](crate::model::Product) changes
//! after insertion. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds a signed delta to the stock level.
    ///
    /// # Errors
    /// Fails without mutating when the result would be negative or would not
    /// fit the stock counter.
    AdjustStock(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Stock level after the adjustment.
    AdjustStock(u32),
}
