//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client turns the generic request set into domain calls and recovers
//! its actor's typed error from [`FrameworkError`](crate::framework::FrameworkError).

pub mod cart_client;
pub mod order_client;
pub mod product_client;

pub use cart_client::*;
pub use order_client::*;
pub use product_client::*;
