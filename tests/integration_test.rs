use canteen_queue::config::Config;
use canteen_queue::lifecycle::CanteenSystem;
use canteen_queue::model::{LineRequest, OrderCreate, OrderStatus, OrderType, TransitionPolicy};
use canteen_queue::prediction::FALLBACK_WARNING;
use std::time::Duration;

/// Full system through the orchestrator, strict transitions, ML service unreachable.
fn offline_config() -> Config {
    Config {
        transition_policy: TransitionPolicy::Strict,
        crowd_service_url: "http://127.0.0.1:9/predict/crowd".into(),
        crowd_timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_order_lifecycle_through_system() {
    let system = CanteenSystem::new(&offline_config()).unwrap();
    let orders = &system.order_client;

    let alice = orders
        .place_order(OrderCreate {
            user_name: "Alice".into(),
            items: vec![LineRequest::new(6, 2)],
            order_type: OrderType::Now,
        })
        .await
        .unwrap();
    assert_eq!(alice.total, 20);
    assert_eq!(alice.estimated_wait_minutes, 2);
    assert_eq!(alice.token_number.0, 100);

    let bob = orders
        .place_order(OrderCreate {
            user_name: "Bob".into(),
            items: vec![LineRequest::new(2, 1), LineRequest::new(7, 2)],
            order_type: OrderType::Prebook,
        })
        .await
        .unwrap();
    assert_eq!(bob.total, 100);
    // 8 + 2x2 + one order ahead
    assert_eq!(bob.estimated_wait_minutes, 14);

    assert_eq!(orders.queue_length().await.unwrap(), 2);
    assert_eq!(orders.estimate_wait(&[LineRequest::new(1, 2)]).await.unwrap(), 12);

    for status in ["ACCEPTED", "PREPARING", "READY", "COMPLETED"] {
        orders.update_status(alice.id, status).await.unwrap();
    }
    assert_eq!(orders.get_order(alice.id).await.unwrap().status, OrderStatus::Completed);
    assert_eq!(orders.queue_length().await.unwrap(), 1);

    let active = orders.list_active(None).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, bob.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_crowd_falls_back_when_upstream_unreachable() {
    let system = CanteenSystem::new(&offline_config()).unwrap();

    let prediction = system.crowd.predict().await;
    assert_eq!(prediction.hours, vec!["09:00", "10:00", "11:00", "12:00", "13:00"]);
    assert_eq!(prediction.counts, vec![20, 40, 70, 100, 60]);
    assert_eq!(prediction.warning.as_deref(), Some(FALLBACK_WARNING));

    system.shutdown().await.unwrap();
}
