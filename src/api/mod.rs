//! HTTP API for the canteen backend.
//!
//! Routes:
//! - GET /menu - The menu catalog
//! - GET /orders/queue-length - Number of active orders
//! - POST /orders - Place an order
//! - GET /orders - Active orders, oldest first (`?status=` narrows, `ALL` keeps all)
//! - GET /orders/{id} - One order
//! - PATCH /orders/{id}/status - Move an order to a new status
//! - POST /predict/wait-time - Estimate the wait for a cart
//! - GET /predict/crowd - Hourly crowd forecast, with fallback
//! - GET /health - Liveness plus queue length

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::OrderClient;
use crate::prediction::CrowdService;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub crowd: CrowdService,
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/menu", get(handlers::menu))
        // Orders
        .route("/orders/queue-length", get(handlers::queue_length))
        .route("/orders", get(handlers::list_orders).post(handlers::place_order))
        .route("/orders/{id}", get(handlers::get_order))
        .route("/orders/{id}/status", patch(handlers::update_status))
        // Predictions
        .route("/predict/wait-time", post(handlers::predict_wait))
        .route("/predict/crowd", get(handlers::predict_crowd))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
