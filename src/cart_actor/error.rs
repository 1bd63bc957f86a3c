//! Error types for the Cart actor.

use crate::model::UserId;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted on a cart with no lines.
    #[error("Cart is empty for user {0}")]
    EmptyCart(UserId),

    /// The order ledger refused or failed to record the order.
    #[error("Order creation failed: {0}")]
    OrderFailed(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
