//! HTTP handlers for production endpoints

use axum::{extract::State, http::StatusCode, Json};

use shared::ProductionRun;

use crate::error::AppResult;
use crate::services::production::{ProductionOutcome, ProductionService, RecordProductionInput};
use crate::AppState;

/// List the production-run history
pub async fn list_productions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductionRun>>> {
    let service = ProductionService::new(state.store.clone());
    let productions = service.list_productions().await?;
    Ok(Json(productions))
}

/// Record a production run
pub async fn record_production(
    State(state): State<AppState>,
    Json(input): Json<RecordProductionInput>,
) -> AppResult<(StatusCode, Json<ProductionOutcome>)> {
    let service = ProductionService::new(state.store.clone());
    let outcome = service.record_production(input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
