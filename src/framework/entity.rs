//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource must implement to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It specifies
//! associated types for IDs, DTOs, queries, context and errors, and provides the lifecycle
//! hooks (`from_create_params`, `on_create`, `on_update`) the actor calls while it owns the
//! entity.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//!
//! You do **not** need to implement it unless creation depends on the rest of the
//! collection. The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await. It also defines a `Context` type which
/// is injected into every hook. Dependencies are passed to `run()` instead of `new()`
/// ("late binding"), so the actor can be constructed before its collaborators exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic sequential ID generation, and ordered so
    /// the store keeps insertion order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter used by `List` and `Count` requests.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum for the whole actor rather than one per message: clients deal with a single
    /// error type, at the cost of every operation's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is inserted.
    ///
    /// `existing` is a read-only view of the collection as it stands *without* the new
    /// entity. Failing here aborts the create and consumes no ID.
    async fn on_create(
        &mut self,
        _existing: Snapshot<'_, Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The entity mutates itself.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}

/// Read-only view over an actor's store, handed to [`ActorEntity::on_create`].
pub struct Snapshot<'a, T: ActorEntity> {
    store: &'a BTreeMap<T::Id, T>,
}

// Manual impls: a derive would wrongly require `T: Clone + Copy`.
impl<T: ActorEntity> Clone for Snapshot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ActorEntity> Copy for Snapshot<'_, T> {}

impl<'a, T: ActorEntity> Snapshot<'a, T> {
    pub fn new(store: &'a BTreeMap<T::Id, T>) -> Self {
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entities in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        self.store.values()
    }

    pub fn count_matching(&self, query: &T::Query) -> usize {
        self.store.values().filter(|item| item.matches(query)).count()
    }
}
