//! Route handlers. Each one decodes the request, calls the order client or the crowd
//! service, and shapes the JSON reply.

use super::{ApiError, AppState};
use crate::model::{LineRequest, MenuItem, Order, OrderCreate, OrderId, OrderStatus, OrderType};
use crate::order_actor::OrderError;
use crate::prediction::CrowdPrediction;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub items: Vec<LineRequest>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
}

impl From<PlaceOrderRequest> for OrderCreate {
    fn from(req: PlaceOrderRequest) -> Self {
        OrderCreate {
            user_name: req.user_name,
            items: req.items,
            order_type: OrderType::from_tag(req.order_type.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub token_number: u32,
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: &'static str,
    pub order: Order,
}

#[derive(Debug, Default, Deserialize)]
pub struct WaitTimeRequest {
    #[serde(default)]
    pub items: Option<Vec<LineRequest>>,
}

#[derive(Debug, Serialize)]
pub struct WaitTimeResponse {
    pub minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub queue_length: usize,
}

/// Path ids that are not numbers name no order.
fn parse_id(raw: &str) -> Result<OrderId, OrderError> {
    raw.parse()
        .map_err(|_| OrderError::NotFound(raw.to_string()))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    let queue_length = state.orders.queue_length().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        queue_length,
    }))
}

/// GET /menu
pub async fn menu(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItem>> {
    Json(state.orders.menu().items().to_vec())
}

/// GET /orders/queue-length
pub async fn queue_length(State(state): State<Arc<AppState>>) -> ApiResult<CountResponse> {
    let count = state.orders.queue_length().await?;
    Ok(Json(CountResponse { count }))
}

/// POST /orders
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> ApiResult<PlaceOrderResponse> {
    let Json(req) = body?;
    let order = state.orders.place_order(req.into()).await?;

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully",
        token_number: order.token_number.0,
        order,
    }))
}

/// GET /orders
///
/// A filter naming no known status matches no order.
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Order>> {
    let status = match params.status.as_deref() {
        None | Some("") | Some("ALL") => None,
        Some(name) => match name.parse::<OrderStatus>() {
            Ok(status) => Some(status),
            Err(_) => return Ok(Json(Vec::new())),
        },
    };

    Ok(Json(state.orders.list_active(status).await?))
}

/// GET /orders/{id}
pub async fn get_order(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult<Order> {
    let id = parse_id(&id)?;
    Ok(Json(state.orders.get_order(id).await?))
}

/// PATCH /orders/{id}/status
///
/// An unknown status is reported before an unknown id.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> ApiResult<StatusUpdated> {
    let Json(body) = body?;
    let status: OrderStatus = body.status.parse().map_err(OrderError::from)?;
    let id = parse_id(&id)?;
    let order = state.orders.update_status(id, status.as_str()).await?;

    Ok(Json(StatusUpdated {
        message: "Status updated",
        order,
    }))
}

/// POST /predict/wait-time
///
/// An empty body, or absent or null `items`, estimates an empty cart.
pub async fn predict_wait(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<WaitTimeResponse> {
    let req: WaitTimeRequest = if body.iter().all(u8::is_ascii_whitespace) {
        WaitTimeRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let items = req.items.unwrap_or_default();
    let minutes = state.orders.estimate_wait(&items).await?;
    Ok(Json(WaitTimeResponse { minutes }))
}

/// GET /predict/crowd
pub async fn predict_crowd(State(state): State<Arc<AppState>>) -> Json<CrowdPrediction> {
    Json(state.crowd.predict().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_request_defaults() {
        let req: PlaceOrderRequest = serde_json::from_str(r#"{"userName": "Alice"}"#).unwrap();
        let create = OrderCreate::from(req);

        assert_eq!(create.user_name, "Alice");
        assert!(create.items.is_empty());
        assert_eq!(create.order_type, OrderType::Now);
    }

    #[test]
    fn test_place_order_request_prebook() {
        let req: PlaceOrderRequest = serde_json::from_str(
            r#"{"userName": "Bob", "items": [{"id": 2, "qty": 1, "price": 60, "name": "Pizza"}], "type": "PREBOOK"}"#,
        )
        .unwrap();
        let create = OrderCreate::from(req);

        assert_eq!(create.order_type, OrderType::Prebook);
        assert_eq!(create.items[0].price, Some(60));
    }

    #[test]
    fn test_wait_time_request_null_items() {
        for body in [r#"{}"#, r#"{"items": null}"#] {
            let req: WaitTimeRequest = serde_json::from_str(body).unwrap();
            assert!(req.items.unwrap_or_default().is_empty(), "{body}");
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Ok(OrderId(12)));
        assert_eq!(parse_id("abc"), Err(OrderError::NotFound("abc".into())));
        assert!(parse_id("-1").is_err());
    }
}
