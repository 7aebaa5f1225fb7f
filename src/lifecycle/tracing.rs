//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`). Module paths are hidden (`with_target(false)`); the actor
//! logs carry an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Store operations**: `Created`, `Updated`, `Not found`, with the order id
//! - **HTTP requests**: one span per request from `tower-http`'s `TraceLayer`
//! - **Upstream failures**: the crowd forecaster falling back, at `warn`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                  # full payloads and per-request spans
//! RUST_LOG=canteen_queue=debug,info cargo run
//! ```
//!
//! The actor runs in its own task, so its lines sit outside the client spans. With
//! `RUST_LOG=info`, placing two orders and accepting the first reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order{user_name=Alice}: Order placed id=order_1 token=#100 wait=2
//! INFO Created entity_type="Order" id=order_2 size=2
//! INFO place_order{user_name=Bob}: Order placed id=order_2 token=#101 wait=4
//! INFO Updated entity_type="Order" id=order_1
//! INFO update_status{id=OrderId(1) status="ACCEPTED"}: Status updated id=order_1 status=ACCEPTED
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
