//! HTTP handlers for recipe endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared::Recipe;

use crate::error::AppResult;
use crate::services::recipe::{CreateRecipeInput, RecipeService, UpdateRecipeInput};
use crate::AppState;

use super::Deleted;

/// List all recipe rows
pub async fn list_recipes(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    let service = RecipeService::new(state.store.clone());
    let recipes = service.list_recipes().await?;
    Ok(Json(recipes))
}

/// Create a recipe row
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(input): Json<CreateRecipeInput>,
) -> AppResult<(StatusCode, Json<Recipe>)> {
    let service = RecipeService::new(state.store.clone());
    let recipe = service.create_recipe(input).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Update a recipe row
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    Json(input): Json<UpdateRecipeInput>,
) -> AppResult<Json<Recipe>> {
    let service = RecipeService::new(state.store.clone());
    let recipe = service.update_recipe(&recipe_id, input).await?;
    Ok(Json(recipe))
}

/// Delete a recipe row
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> AppResult<Json<Deleted<Recipe>>> {
    let service = RecipeService::new(state.store.clone());
    let removed = service.delete_recipe(&recipe_id).await?;
    Ok(Json(Deleted::of(removed)))
}
