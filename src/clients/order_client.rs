//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and maps framework failures back into [`OrderError`].
use crate::estimator::{self, PrepLine};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Menu, Order, OrderCreate, OrderId, OrderQuery, OrderStatus, StatusUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation, pricing and the wait estimate for a new order happen inside the actor, so
/// the queue a new order sees is exactly the queue it joins.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: Arc<Menu>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, menu: Arc<Menu>) -> Self {
        Self { inner, menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[instrument(skip(self, params), fields(user_name = %params.user_name))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(id = %order.id, token = %order.token_number, wait = order.estimated_wait_minutes, "Order placed");
        Ok(order)
    }

    /// Active orders, oldest first, optionally narrowed to one status.
    #[instrument(skip(self))]
    pub async fn list_active(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self
            .inner
            .list(OrderQuery::active(status))
            .await
            .map_err(Self::map_error)?;
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.fetch(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Moves an order to the status named by `status`.
    ///
    /// # Errors
    /// `ValidationError` if `status` is not one of the six known names, `NotFound` for an
    /// unknown id, `InvalidTransition` if the configured policy forbids the move.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = status.parse()?;
        debug!("Sending request");
        let order = self
            .inner
            .update(id, StatusUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(%id, %status, "Status updated");
        Ok(order)
    }

    /// Number of orders still in the queue.
    pub async fn queue_length(&self) -> Result<usize, OrderError> {
        self.count(OrderQuery::active(None)).await
    }

    /// Estimates the wait for a cart that has not been placed.
    #[instrument(skip(self, lines))]
    pub async fn estimate_wait<L: PrepLine + Sync>(&self, lines: &[L]) -> Result<u32, OrderError> {
        let active = self.queue_length().await?;
        let minutes = estimator::estimate_wait(lines, &self.menu, active);
        debug!(active, minutes, "Estimated wait");
        Ok(minutes)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            e @ FrameworkError::EntityError(_) => e
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|other| OrderError::ActorCommunicationError(other.to_string())),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
