//! Error categories surfaced to callers of the service layer.
//!
//! Every actor error is folded into one of four categories. Transport
//! adapters map [`ErrorCode`] onto their own status codes.

use crate::cart_actor::CartError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request itself is malformed (empty id, non-positive quantity, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The request is well-formed but the current state forbids it.
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// An actor behind the service is no longer running.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// Stable, transport-neutral error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    FailedPrecondition,
    Unavailable,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorCode::Unavailable => "UNAVAILABLE",
        }
    }
}

impl ServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            ServiceError::NotFound(_) => ErrorCode::NotFound,
            ServiceError::FailedPrecondition(_) => ErrorCode::FailedPrecondition,
            ServiceError::Unavailable(_) => ErrorCode::Unavailable,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument(message.into())
    }
}

impl From<ProductError> for ServiceError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => ServiceError::NotFound(format!("product {id}")),
            ProductError::InsufficientStock { .. } | ProductError::StockOutOfRange { .. } => {
                ServiceError::FailedPrecondition(e.to_string())
            }
            ProductError::ActorCommunicationError(msg) => ServiceError::Unavailable(msg),
        }
    }
}

impl From<OrderError> for ServiceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => ServiceError::NotFound(format!("order {id}")),
            OrderError::ActorCommunicationError(msg) => ServiceError::Unavailable(msg),
        }
    }
}

impl From<CartError> for ServiceError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::EmptyCart(_) => ServiceError::FailedPrecondition("cart is empty".into()),
            CartError::OrderFailed(inner) => inner.into(),
            CartError::ActorCommunicationError(msg) => ServiceError::Unavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, ProductId, UserId};

    #[test]
    fn test_actor_errors_fold_into_categories() {
        let e: ServiceError = ProductError::InsufficientStock {
            requested: 3,
            available: 1,
        }
        .into();
        assert_eq!(e.code(), ErrorCode::FailedPrecondition);

        let e: ServiceError = ProductError::NotFound(ProductId(4)).into();
        assert_eq!(e, ServiceError::NotFound("product 4".into()));

        let e: ServiceError = CartError::EmptyCart(UserId::from("u")).into();
        assert_eq!(e.code(), ErrorCode::FailedPrecondition);

        let e: ServiceError = CartError::OrderFailed(OrderError::NotFound(OrderId(2))).into();
        assert_eq!(e, ServiceError::NotFound("order ORDER-2".into()));

        let e: ServiceError = OrderError::ActorCommunicationError("Actor closed".into()).into();
        assert_eq!(e.code().as_str(), "UNAVAILABLE");
    }
}
