use crate::framework::EntityId;
use crate::model::{CartItem, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Status every order starts in.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Type-safe identifier for Orders, rendered as `ORDER-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORDER-{}", self.0)
    }
}

impl EntityId for OrderId {
    fn from_sequence(seq: u32) -> Option<Self> {
        Some(Self(seq))
    }
}

/// The text was not of the form `ORDER-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed order id: {0}")]
pub struct ParseOrderIdError(pub String);

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("ORDER-")
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| ParseOrderIdError(s.to_string()))
    }
}

/// A placed order.
///
/// Items and total are a snapshot of the cart at checkout; only `status`
/// ever changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total_price: u64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for Order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total_price: u64,
}

/// DTO for Order updates. Any string is accepted as a status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: String,
}

/// Listing filter: orders owned by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_round_trips_through_display() {
        let id = OrderId(17);
        assert_eq!(id.to_string(), "ORDER-17");
        assert_eq!("ORDER-17".parse::<OrderId>(), Ok(id));
    }

    #[test]
    fn test_malformed_order_ids_are_rejected() {
        for bad in ["", "ORDER-", "order-1", "ORDER--1", "ORDER-+1", "ORDER-x", "17"] {
            assert!(bad.parse::<OrderId>().is_err(), "{bad:?} parsed");
        }
    }
}
