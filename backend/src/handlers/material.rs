//! HTTP handlers for material endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared::Material;

use crate::error::AppResult;
use crate::services::material::{CreateMaterialInput, MaterialService, UpdateMaterialInput};
use crate::AppState;

use super::Deleted;

/// List all materials
pub async fn list_materials(State(state): State<AppState>) -> AppResult<Json<Vec<Material>>> {
    let service = MaterialService::new(state.store.clone());
    let materials = service.list_materials().await?;
    Ok(Json(materials))
}

/// Create a material
pub async fn create_material(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterialInput>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let service = MaterialService::new(state.store.clone());
    let material = service.create_material(input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// Update a material
pub async fn update_material(
    State(state): State<AppState>,
    Path(material_id): Path<String>,
    Json(input): Json<UpdateMaterialInput>,
) -> AppResult<Json<Material>> {
    let service = MaterialService::new(state.store.clone());
    let material = service.update_material(&material_id, input).await?;
    Ok(Json(material))
}

/// Delete a material
pub async fn delete_material(
    State(state): State<AppState>,
    Path(material_id): Path<String>,
) -> AppResult<Json<Deleted<Material>>> {
    let service = MaterialService::new(state.store.clone());
    let removed = service.delete_material(&material_id).await?;
    Ok(Json(Deleted::of(removed)))
}
