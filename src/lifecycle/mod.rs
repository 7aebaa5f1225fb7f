//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the runtime pieces of the canteen backend.
//!
//! ## Dependency Injection via Context
//!
//! The Order actor is created without dependencies and receives them at runtime through
//! `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = OrderContext; // menu + transition policy
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** and its task ends
//! 4. **Await completion** - [`CanteenSystem::shutdown`] joins the task
//!
//! The HTTP router holds client clones in its state, so the server must be stopped first.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod canteen_system;
pub mod tracing;

pub use canteen_system::*;
pub use tracing::*;
