//! Customer orders in the canteen queue.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](Order#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Update parameters ([`StatusUpdate`])
//! - Queries ([`OrderQuery`])

use crate::model::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The first token handed out after a restart.
pub const FIRST_TOKEN: u32 = 100;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(OrderId)
    }
}

/// The customer-facing queue ticket.
///
/// Issued alongside the order id: the n-th order gets token `FIRST_TOKEN + n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenNumber(pub u32);

impl TokenNumber {
    pub fn for_order(id: OrderId) -> Self {
        Self(FIRST_TOKEN + id.0.saturating_sub(1))
    }
}

impl Display for TokenNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pickup intent. Only a tag: both kinds queue the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Now,
    Prebook,
}

impl OrderType {
    /// `"PREBOOK"` books ahead; anything else, including nothing, orders now.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("PREBOOK") => OrderType::Prebook,
            _ => OrderType::Now,
        }
    }
}

/// One priced line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.qty)
    }
}

/// A cart line as the customer submits it.
///
/// `name` and `price` may be omitted and are then taken from the menu. `avg_prep` is a
/// preparation-time hint used only when the menu has none.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineRequest {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<u32>,
    pub qty: u32,
    #[serde(default)]
    pub avg_prep: Option<f64>,
}

impl LineRequest {
    pub fn new(id: u32, qty: u32) -> Self {
        Self {
            id,
            qty,
            ..Self::default()
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_name: String,
    pub items: Vec<LineRequest>,
    pub order_type: OrderType,
}

/// Payload for changing an order's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Selects orders for listing and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderQuery {
    /// Drop completed and cancelled orders.
    pub active_only: bool,
    /// Keep only orders in this status.
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    /// Orders still in the queue, optionally in one status.
    pub fn active(status: Option<OrderStatus>) -> Self {
        Self {
            active_only: true,
            status,
        }
    }

    pub fn all() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub token_number: TokenNumber,
    pub user_name: String,
    pub items: Vec<CartLine>,
    pub total: u64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_wait_minutes: u32,
}

impl Order {
    /// Builds a pending order. The total is fixed here and never recomputed.
    pub fn new(
        id: OrderId,
        user_name: impl Into<String>,
        items: Vec<CartLine>,
        order_type: OrderType,
    ) -> Self {
        let total = items.iter().map(CartLine::subtotal).sum();
        Self {
            id,
            token_number: TokenNumber::for_order(id),
            user_name: user_name.into(),
            items,
            total,
            order_type,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            estimated_wait_minutes: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
