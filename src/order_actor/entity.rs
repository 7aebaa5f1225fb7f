//! ActorEntity trait implementation for the Order domain type.
//!
//! Creation validates the submitted cart and resolves each line against the menu; the
//! `on_create` hook then estimates the wait from the orders already queued. Status updates
//! are checked against the configured [`TransitionPolicy`](crate::model::TransitionPolicy).

use super::{OrderContext, OrderError};
use crate::estimator::estimate_wait;
use crate::framework::{ActorEntity, Snapshot};
use crate::model::{CartLine, LineRequest, Menu, Order, OrderCreate, OrderId, OrderQuery, StatusUpdate};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = StatusUpdate;
    type Query = OrderQuery;
    type Context = OrderContext;
    type Error = OrderError;

    /// Validates the payload and prices the cart.
    ///
    /// # Errors
    /// `ValidationError` for a blank user name, an empty cart, a zero quantity, or a line
    /// with no price that the menu cannot supply either.
    fn from_create_params(id: OrderId, params: OrderCreate, ctx: &OrderContext) -> Result<Self, OrderError> {
        if params.user_name.trim().is_empty() {
            return Err(OrderError::ValidationError("userName is required".into()));
        }
        if params.items.is_empty() {
            return Err(OrderError::ValidationError("order has no items".into()));
        }

        let items = params
            .items
            .iter()
            .map(|line| resolve_line(line, &ctx.menu))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order::new(id, params.user_name, items, params.order_type))
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        (!query.active_only || self.is_active()) && query.status.map_or(true, |status| self.status == status)
    }

    /// Estimates the wait from the orders queued before this one.
    async fn on_create(&mut self, existing: Snapshot<'_, Self>, ctx: &OrderContext) -> Result<(), OrderError> {
        let ahead = existing.count_matching(&OrderQuery::active(None));
        self.estimated_wait_minutes = estimate_wait(&self.items, &ctx.menu, ahead);
        debug!(id = %self.id, ahead, minutes = self.estimated_wait_minutes, "Estimated wait");
        Ok(())
    }

    /// Applies a status change if the policy allows it; otherwise leaves the order as is.
    async fn on_update(&mut self, update: StatusUpdate, ctx: &OrderContext) -> Result<(), OrderError> {
        if !ctx.policy.allows(self.status, update.status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: update.status,
            });
        }
        self.status = update.status;
        Ok(())
    }
}

fn resolve_line(line: &LineRequest, menu: &Menu) -> Result<CartLine, OrderError> {
    if line.qty == 0 {
        return Err(OrderError::ValidationError(format!(
            "item {} must have a positive qty",
            line.id
        )));
    }

    let listed = menu.get(line.id);
    let price = line
        .price
        .or(listed.map(|item| item.price))
        .ok_or_else(|| OrderError::ValidationError(format!("item {} has no price", line.id)))?;
    let name = line
        .name
        .clone()
        .or_else(|| listed.map(|item| item.name.clone()))
        .unwrap_or_default();

    Ok(CartLine {
        id: line.id,
        name,
        price,
        qty: line.qty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, OrderType, TransitionPolicy};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn context(policy: TransitionPolicy) -> OrderContext {
        OrderContext {
            menu: Arc::new(Menu::seeded()),
            policy,
        }
    }

    fn create(user_name: &str, items: Vec<LineRequest>) -> OrderCreate {
        OrderCreate {
            user_name: user_name.into(),
            items,
            order_type: OrderType::Now,
        }
    }

    #[test]
    fn test_lines_priced_from_menu() {
        let ctx = context(TransitionPolicy::Strict);
        let order = Order::from_create_params(OrderId(1), create("Alice", vec![LineRequest::new(6, 2)]), &ctx).unwrap();

        assert_eq!(order.items[0].name, "Tea");
        assert_eq!(order.items[0].price, 10);
        assert_eq!(order.total, 20);
    }

    #[test]
    fn test_user_name_stored_as_sent() {
        let ctx = context(TransitionPolicy::Strict);
        let order = Order::from_create_params(OrderId(1), create("  Alice ", vec![LineRequest::new(6, 1)]), &ctx).unwrap();

        assert_eq!(order.user_name, "  Alice ");
    }

    #[test]
    fn test_supplied_price_and_name_win() {
        let ctx = context(TransitionPolicy::Strict);
        let line = LineRequest {
            name: Some("Masala tea".into()),
            price: Some(15),
            ..LineRequest::new(6, 2)
        };
        let order = Order::from_create_params(OrderId(1), create("Alice", vec![line]), &ctx).unwrap();

        assert_eq!(order.items[0].name, "Masala tea");
        assert_eq!(order.total, 30);
    }

    #[test]
    fn test_rejects_bad_payloads() {
        let ctx = context(TransitionPolicy::Strict);
        let cases = [
            create("", vec![LineRequest::new(1, 1)]),
            create("   ", vec![LineRequest::new(1, 1)]),
            create("Alice", vec![]),
            create("Alice", vec![LineRequest::new(1, 0)]),
            create("Alice", vec![LineRequest::new(99, 1)]),
        ];

        for params in cases {
            let result = Order::from_create_params(OrderId(1), params.clone(), &ctx);
            assert!(
                matches!(result, Err(OrderError::ValidationError(_))),
                "expected validation error for {params:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_on_create_counts_only_active_orders() {
        let ctx = context(TransitionPolicy::Strict);
        let mut store = BTreeMap::new();
        for (id, status) in [(1, OrderStatus::Pending), (2, OrderStatus::Completed), (3, OrderStatus::Ready)] {
            let mut order =
                Order::from_create_params(OrderId(id), create("Bob", vec![LineRequest::new(7, 1)]), &ctx).unwrap();
            order.status = status;
            store.insert(OrderId(id), order);
        }

        let mut order = Order::from_create_params(OrderId(4), create("Alice", vec![LineRequest::new(1, 2)]), &ctx).unwrap();
        order.on_create(Snapshot::new(&store), &ctx).await.unwrap();

        // 4 min fries x2 + 2 active orders x2
        assert_eq!(order.estimated_wait_minutes, 12);
    }

    #[tokio::test]
    async fn test_strict_update_rejects_skip_and_keeps_status() {
        let ctx = context(TransitionPolicy::Strict);
        let mut order = Order::from_create_params(OrderId(1), create("Alice", vec![LineRequest::new(1, 1)]), &ctx).unwrap();

        let err = order
            .on_update(StatusUpdate { status: OrderStatus::Ready }, &ctx)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready
            }
        );
        assert_eq!(order.status, OrderStatus::Pending);

        order
            .on_update(StatusUpdate { status: OrderStatus::Accepted }, &ctx)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Accepted);
    }

    #[tokio::test]
    async fn test_lenient_update_overwrites() {
        let ctx = context(TransitionPolicy::Lenient);
        let mut order = Order::from_create_params(OrderId(1), create("Alice", vec![LineRequest::new(1, 1)]), &ctx).unwrap();
        order.status = OrderStatus::Completed;

        order
            .on_update(StatusUpdate { status: OrderStatus::Pending }, &ctx)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_matches_query() {
        let ctx = context(TransitionPolicy::Strict);
        let mut order = Order::from_create_params(OrderId(1), create("Alice", vec![LineRequest::new(1, 1)]), &ctx).unwrap();

        assert!(order.matches(&OrderQuery::active(None)));
        assert!(order.matches(&OrderQuery::active(Some(OrderStatus::Pending))));
        assert!(!order.matches(&OrderQuery::active(Some(OrderStatus::Ready))));

        order.status = OrderStatus::Cancelled;
        assert!(!order.matches(&OrderQuery::active(None)));
        assert!(!order.matches(&OrderQuery::active(Some(OrderStatus::Cancelled))));
        assert!(order.matches(&OrderQuery::all()));
    }
}
