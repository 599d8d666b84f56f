//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the record store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::RecordStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop: a request is fully handled
/// (hooks, store read/write, reply) before the next one is received. Any number of tasks
/// may hold a [`ResourceClient`], but none of them ever touches the `store` directly,
/// so no `Mutex` or `RwLock` is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed** (optional): `actor.with_records(..)` to start from a known collection.
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> { Ok(Self { id, text }) }
///     async fn on_replace(&mut self, text: String, _: &()) -> Result<(), Self::Error> { self.text = text; Ok(()) }
///     async fn on_update(&mut self, text: String, _: &()) -> Result<(), Self::Error> { self.text.push_str(&text); Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = std::sync::atomic::AtomicU32::new(1);
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: mints an ID with `next_id_fn`, calls `from_create_params` then `on_create`,
///   appends the entity and returns it.
/// * **Replace / Update**: locate the entity, run `on_replace` / `on_update` on a copy, and
///   commit the copy only if the hook succeeded.
/// * **Delete**: locate the entity, run `on_delete`, remove it and return its last state.
/// * **List / Get / Clear**: direct store operations.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: RecordStore<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Mints the identifier of every created entity. It must never
    ///   return an ID that is already in use.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: RecordStore::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replaces the initial collection with `records`, kept in the given order.
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.store = RecordStore::with_records(records);
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies that were created *after* the actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.list_all().to_vec()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.find_by_id(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::entity(e)));
                                continue;
                            }
                            self.store.insert(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let Some(index) = self.store.find_index_by_id(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut draft = self.store.list_all()[index].clone();
                    if let Err(e) = draft.on_replace(params, &context).await {
                        warn!(entity_type, %id, error = %e, "Replace failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store.replace_at(index, draft.clone());
                    info!(entity_type, %id, "Replaced");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.store.find_index_by_id(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut draft = self.store.list_all()[index].clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    let merged = self.store.merge_at(index, draft).clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(merged));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.store.find_index_by_id(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = self.store.list_all()[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    let removed = self.store.remove_at(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
