//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Menu, Order, TransitionPolicy};
use std::sync::Arc;

/// Everything the Order actor needs at runtime, injected through `run`.
#[derive(Debug, Clone)]
pub struct OrderContext {
    pub menu: Arc<Menu>,
    pub policy: TransitionPolicy,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, menu: Arc<Menu>) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client, menu);

    (actor, client)
}
