//! Generic actor framework for the store's collection managers.
//!
//! This module provides the building blocks shared by the product catalog,
//! the cart ledger and the order ledger. Each of those is a [`ResourceActor`]
//! that exclusively owns one map of entities and serves typed requests.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the map and processes requests in order
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests to an actor
//! - [`ActorClient`] - Trait for domain clients built on top of `ResourceClient`
//! - [`FrameworkError`] - Common error types
//! - [`PageRequest`] / [`Page`] - The pagination policy used by every listing
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, EntityId};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
