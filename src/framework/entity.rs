//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored resource
//! (Product, Cart, Order) implements to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). It specifies associated
//! types for ids, DTOs, actions, listing filters, context and errors, and
//! provides the hooks the actor calls while serving requests.
//!
//! # Provided Methods (Hooks)
//! Hooks with default implementations:
//! - [`ActorEntity::requested_id`] - caller-chosen ids (default: none)
//! - [`ActorEntity::vacant`] - lazily materialised entities (default: none)
//! - [`ActorEntity::is_vacant`] - placeholder detection (default: never vacant)
//! - [`ActorEntity::matches`] - listing filter (default: everything matches)
//! - [`ActorEntity::on_create`] - post-construction validation (default: `Ok(())`)

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Identifier types usable as keys of a [`ResourceActor`](crate::framework::ResourceActor) store.
///
/// Keys are ordered so listings walk the store in a stable, ascending order.
pub trait EntityId: Ord + Clone + Send + Sync + Display + Debug + 'static {
    /// Mints an identifier from the actor's sequence counter.
    ///
    /// Returns `None` for identifiers that are always supplied by the caller
    /// (for example a user key).
    fn from_sequence(seq: u32) -> Option<Self>;
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (Product, Cart, Order)
/// must satisfy, we can write the `ResourceActor` logic *once* and reuse it everywhere.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: EntityId;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AdjustStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Predicate data for listing queries. Use `()` if the entity is never listed.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. Clients recover it
    /// from [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError)
    /// with [`FrameworkError::entity_error`](crate::framework::FrameworkError::entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Identifier chosen by the caller, if any.
    ///
    /// When `None`, the actor mints the next id from its counter.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Entity to act upon when an action targets an id that is not stored yet.
    ///
    /// Returning `Some` lets a resource come into existence on its first
    /// mutation. The materialised entity is stored only if the action succeeds.
    fn vacant(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Whether a materialised entity still equals its placeholder state.
    ///
    /// The actor does not store a [`vacant`](ActorEntity::vacant) entity that
    /// is still vacant after a successful action, so no-op actions against
    /// unknown ids leave the store unchanged.
    fn is_vacant(&self) -> bool {
        false
    }

    /// Whether this entity belongs in the result of a listing query.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
