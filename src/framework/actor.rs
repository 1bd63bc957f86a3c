//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of
//! one collection. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::framework::client::ResourceClient;
use crate::framework::entity::{ActorEntity, EntityId};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::page::Page;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`),
/// the id counter and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so no two
/// operations on the same collection ever overlap and no `Mutex` or `RwLock`
/// is needed around the `store`. Callers only ever receive clones of stored
/// entities. Different actors run in parallel.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Implementation Details
///
/// * **Create**: uses the caller's id from [`ActorEntity::requested_id`] when
///   present (replacing any entity stored under it), otherwise mints the next
///   free id from the counter. Minted ids skip occupied keys, so they strictly
///   increase and are never handed out twice.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **Update**: runs `on_update` on the stored entity and returns its new state.
/// * **Action**: runs `handle_action` on the stored entity. If the id is not
///   stored, [`ActorEntity::vacant`] may supply a fresh entity, which is kept
///   only when the action succeeds and leaves it no longer vacant.
/// * **Query**: walks the store in ascending id order, keeps entities whose
///   `matches` returns true and returns the requested page.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "commerce_store::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match T::requested_id(&params) {
                        Some(id) => id,
                        None => match self.allocate_id() {
                            Ok(id) => id,
                            Err(e) => {
                                warn!(entity_type, error = %e, "Create failed");
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                        },
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let replaced = self.store.insert(id.clone(), item.clone()).is_some();
                            info!(entity_type, %id, replaced, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = if let Some(item) = self.store.get_mut(&id) {
                        item.handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)))
                    } else if let Some(mut item) = T::vacant(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        if result.is_ok() && !item.is_vacant() {
                            self.store.insert(id.clone(), item);
                            debug!(entity_type, %id, size = self.store.len(), "Materialized");
                        }
                        result
                    } else {
                        Err(FrameworkError::NotFound(id.to_string()))
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Query {
                    filter,
                    page,
                    respond_to,
                } => {
                    let matches: Vec<&T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .collect();
                    let result = Page::paginate(matches, page).map(T::clone);
                    debug!(
                        entity_type,
                        ?filter,
                        page = page.page,
                        page_size = page.page_size,
                        returned = result.items.len(),
                        total = result.total_count,
                        "Query"
                    );
                    let _ = respond_to.send(Ok(result));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Mints the next unused id from the counter.
    fn allocate_id(&mut self) -> Result<T::Id, FrameworkError> {
        loop {
            let id = T::Id::from_sequence(self.next_id).ok_or(FrameworkError::IdRequired)?;
            self.next_id = self
                .next_id
                .checked_add(1)
                .ok_or(FrameworkError::IdsExhausted)?;
            if !self.store.contains_key(&id) {
                return Ok(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::page::PageRequest;
    use async_trait::async_trait;
    use std::fmt;

    // --- Test Entity ---

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TallyId(u32);

    impl fmt::Display for TallyId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "tally_{}", self.0)
        }
    }

    impl EntityId for TallyId {
        fn from_sequence(seq: u32) -> Option<Self> {
            Some(Self(seq))
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: TallyId,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        id: Option<TallyId>,
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Peek,
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally refused")]
    struct TallyError;

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = TallyId;
        type Create = TallyCreate;
        type Update = String;
        type Action = TallyAction;
        type ActionResult = u32;
        type Filter = Option<String>;
        type Context = ();
        type Error = TallyError;

        fn from_create_params(id: TallyId, params: TallyCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        fn requested_id(params: &TallyCreate) -> Option<TallyId> {
            params.id
        }

        fn vacant(id: &TallyId) -> Option<Self> {
            // Only even ids spring into existence.
            (id.0 % 2 == 0).then(|| Self {
                id: *id,
                label: "lazy".into(),
                count: 0,
            })
        }

        fn is_vacant(&self) -> bool {
            self.count == 0
        }

        fn matches(&self, filter: &Option<String>) -> bool {
            filter.as_ref().map_or(true, |label| &self.label == label)
        }

        async fn on_update(&mut self, label: String, _ctx: &()) -> Result<(), Self::Error> {
            self.label = label;
            Ok(())
        }

        async fn handle_action(&mut self, action: TallyAction, _ctx: &()) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => {
                    self.count += 1;
                    Ok(self.count)
                }
                TallyAction::Peek => Ok(self.count),
                TallyAction::Fail => Err(TallyError),
            }
        }
    }

    fn create(label: &str) -> TallyCreate {
        TallyCreate {
            id: None,
            label: label.into(),
        }
    }

    #[tokio::test]
    async fn test_minted_ids_skip_caller_supplied_ids() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        assert_eq!(client.create(create("a")).await.unwrap().id, TallyId(1));
        let explicit = TallyCreate {
            id: Some(TallyId(2)),
            label: "b".into(),
        };
        assert_eq!(client.create(explicit).await.unwrap().id, TallyId(2));
        // 2 is taken by the explicit insert, so the counter moves past it.
        assert_eq!(client.create(create("c")).await.unwrap().id, TallyId(3));
    }

    #[tokio::test]
    async fn test_action_materializes_vacant_entity_only_on_success() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let failed = client.perform_action(TallyId(8), TallyAction::Fail).await;
        assert!(matches!(failed, Err(FrameworkError::EntityError(_))));
        assert!(client.get(TallyId(8)).await.unwrap().is_none());

        assert_eq!(client.perform_action(TallyId(8), TallyAction::Bump).await.unwrap(), 1);
        assert_eq!(client.get(TallyId(8)).await.unwrap().unwrap().count, 1);

        let missing = client.perform_action(TallyId(7), TallyAction::Bump).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "tally_7"));
    }

    #[tokio::test]
    async fn test_no_op_action_does_not_store_placeholder() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        assert_eq!(client.perform_action(TallyId(4), TallyAction::Peek).await.unwrap(), 0);
        assert!(client.get(TallyId(4)).await.unwrap().is_none());

        let page = client.query(None, PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_update_and_query_in_id_order() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        for label in ["x", "y", "x", "x"] {
            client.create(create(label)).await.unwrap();
        }
        let updated = client.update(TallyId(2), "x".into()).await.unwrap();
        assert_eq!(updated.label, "x");

        let page = client
            .query(Some("x".into()), PageRequest::new(1, 3))
            .await
            .unwrap();
        assert_eq!(page.total_count, 4);
        let ids: Vec<_> = page.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TallyId(1), TallyId(2), TallyId(3)]);

        let missing = client.update(TallyId(99), "z".into()).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Tally>::new(1);
        drop(actor);
        let result = client.get(TallyId(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
