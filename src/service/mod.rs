//! # Service Layer
//!
//! The request-handling boundary in front of the actors. Services validate
//! caller input, call the domain clients and fold every failure into a
//! [`ServiceError`] category. Pagination integers pass through unvalidated;
//! the actors apply the pagination policy.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod order;

pub use cart::{CartResponse, CartService};
pub use catalog::{CatalogService, ProductListing};
pub use error::{ErrorCode, ServiceError};
pub use order::{OrderListing, OrderService};
