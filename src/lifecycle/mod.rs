//! Runtime orchestration and lifecycle management.
//!
//! - [`ShopSystem`] - starts, wires and shuts down the actors and services
//! - [`ShopConfig`] - mailbox capacity and catalog seeding, from the environment
//! - [`sample_catalog`] - the products loaded by [`ShopSystem::seed_catalog`]
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod seed;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use seed::*;
pub use shop_system::*;
pub use self::tracing::*;
