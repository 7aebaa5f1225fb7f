//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for a type-safe actor that owns a collection of
//! resource entities and serves create, read, update, list and count requests.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entity store
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests
//! - [`ActorClient`] - Trait that domain clients implement to inherit standard reads
//! - [`FrameworkError`] - Common error types
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

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Snapshot};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
