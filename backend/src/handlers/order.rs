//! HTTP handlers for order endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared::Order;

use crate::error::AppResult;
use crate::services::order::{CreateOrderInput, OrderService, UpdateOrderInput};
use crate::AppState;

/// List all orders
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let service = OrderService::new(state.store.clone());
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}

/// Create an order
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let service = OrderService::new(state.store.clone());
    let order = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an order (basic fields and/or status transition)
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(input): Json<UpdateOrderInput>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.store.clone());
    let order = service.update_order(&order_id, input).await?;
    Ok(Json(order))
}
