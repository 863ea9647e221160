//! HTTP handler for the stock-history endpoint

use axum::{extract::State, Json};

use shared::StockMovement;

use crate::error::AppResult;
use crate::services::history::HistoryService;
use crate::AppState;

/// Full stock-movement ledger in append order
pub async fn list_stock_history(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let service = HistoryService::new(state.store.clone());
    let movements = service.list_movements().await?;
    Ok(Json(movements))
}
