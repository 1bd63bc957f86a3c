//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::page::{Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of
/// ad-hoc messages for every operation, requests are standardized around
/// lifecycle operations that apply to any stored resource:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource; responds with it.
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
/// - **Query**: Lists resources matching an [`ActorEntity::Filter`], one page at a time.
///
/// Resources in this store are never deleted, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Query {
        filter: T::Filter,
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
}
