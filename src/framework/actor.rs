//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It implements the "Server" side of the Actor Model: messages are processed
//! sequentially, which gives the store exclusive access without locks.

use crate::framework::client::ResourceClient;
use crate::framework::entity::{ActorEntity, Snapshot};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Each actor processes its own messages *sequentially* in a
/// loop, so two concurrent `Create` requests can never observe the same `next_id`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Order>::new(32);
/// tokio::spawn(actor.run(context));
/// let order = client.create(params).await?;
/// ```
///
/// # Implementation Details
///
/// The store is a `BTreeMap` keyed by ID, so iteration follows creation order. IDs come
/// from a `u32` counter starting at 1.
///
/// * **Create**:
///     1. Converts the *candidate* ID `next_id` to `T::Id`.
///     2. Calls `T::from_create_params`, then the `on_create` hook with a [`Snapshot`] of
///        the store as it is before the insert.
///     3. Inserts the entity and only then advances `next_id`; a rejected create leaves no
///        gap in the sequence.
///     4. Returns a clone of the stored entity.
///
/// * **Get**: Returns a clone of the entity if found, or `None`.
///
/// * **Update**: Calls `on_update` on the stored entity and returns its new state. A failed
///   hook must leave the entity untouched.
///
/// * **List / Count**: Apply `ActorEntity::matches` to every entity in ID order.
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
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "canteen_queue::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(Snapshot::new(&self.store), &context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            self.next_id += 1;
                            info!(entity_type, %id, size = self.store.len(), "Created");
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
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { query, respond_to } => {
                    let count = Snapshot::new(&self.store).count_matching(&query);
                    debug!(entity_type, ?query, count, "Count");
                    let _ = respond_to.send(Ok(count));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
