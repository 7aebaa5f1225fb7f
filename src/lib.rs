//! # Canteen Queue
//!
//! Backend for a campus canteen: customers order from a fixed menu and receive a token
//! number and an estimated wait, staff move orders through the kitchen, and a crowd
//! forecast from an external ML service is relayed to the UI.
//!
//! ## Architecture
//!
//! All order state lives in one actor. A generic [`ResourceActor`](framework::ResourceActor)
//! owns the order collection and processes requests one at a time over a Tokio channel, so
//! ids and tokens stay unique and gapless under concurrent requests and the queue a new
//! order is estimated against is exactly the queue it joins.
//!
//! ### Type-Safe Error Handling
//! Each component has its own `thiserror` enum. Entity errors cross the actor boundary
//! boxed inside [`FrameworkError`](framework::FrameworkError) and are recovered into
//! [`OrderError`](order_actor::OrderError) by the client; the HTTP layer maps them to
//! status codes.
//!
//! ### Async Context Injection
//! The menu and the status transition policy (any status may replace any other unless
//! `ORDER_TRANSITIONS=strict` enforces the kitchen path) are handed to the actor through `run()`,
//! not at construction time.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, its client, and the test mocks.
//! - [`model`]: menu, orders, statuses and the transition table.
//! - [`estimator`]: the pure wait-time heuristic.
//! - [`order_actor`]: `ActorEntity` for [`Order`](model::Order): validation, pricing, transitions.
//! - [`clients`]: [`OrderClient`](clients::OrderClient), the typed API over the actor.
//! - [`prediction`]: the crowd forecaster seam, its HTTP client, and the fallback.
//! - [`lifecycle`]: [`CanteenSystem`](lifecycle::CanteenSystem) start-up, shutdown, tracing.
//! - [`api`]: the axum router.
//! - [`config`]: environment configuration.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CROWD_SERVICE_URL=http://ml:5001/predict/crowd ORDER_TRANSITIONS=strict cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod estimator;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod prediction;
