//! Recipe management tests
//!
//! Bill-of-materials CRUD against an in-memory store, including production
//! mode parsing and the default mode for rows created without one.

use rust_decimal_macros::dec;

use obsidian_backend::error::AppError;
use obsidian_backend::services::recipe::{CreateRecipeInput, RecipeService, UpdateRecipeInput};
use obsidian_backend::store::Store;
use shared::ProductionMode;

fn create_input(product_id: &str, material_id: &str) -> CreateRecipeInput {
    CreateRecipeInput {
        product_id: product_id.to_string(),
        material_id: material_id.to_string(),
        quantity_per_unit: Some(dec!(2.5)),
        unit: Some("kg".to_string()),
        production_mode: None,
    }
}

#[tokio::test]
async fn created_recipe_defaults_to_unit_mode() {
    let store = Store::in_memory();
    let service = RecipeService::new(store.clone());

    let recipe = service.create_recipe(create_input("prod-1", "mat-1")).await.unwrap();

    assert!(recipe.id.starts_with("rec-"));
    assert_eq!(recipe.production_mode, ProductionMode::Unit);
    assert_eq!(recipe.quantity_per_unit, dec!(2.5));
    assert_eq!(store.read_recipes().unwrap().len(), 1);
}

#[tokio::test]
async fn explicit_batch_mode_is_kept() {
    let store = Store::in_memory();
    let service = RecipeService::new(store);

    let recipe = service
        .create_recipe(CreateRecipeInput {
            production_mode: Some("batch".to_string()),
            ..create_input("prod-1", "mat-1")
        })
        .await
        .unwrap();

    assert_eq!(recipe.production_mode, ProductionMode::Batch);
}

#[tokio::test]
async fn unknown_mode_is_rejected() {
    let store = Store::in_memory();
    let service = RecipeService::new(store.clone());

    let err = service
        .create_recipe(CreateRecipeInput {
            production_mode: Some("bulk".to_string()),
            ..create_input("prod-1", "mat-1")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "productionMode"));
    assert!(store.read_recipes().unwrap().is_empty());
}

#[tokio::test]
async fn negative_quantity_per_unit_is_rejected() {
    let store = Store::in_memory();
    let service = RecipeService::new(store);

    let err = service
        .create_recipe(CreateRecipeInput {
            quantity_per_unit: Some(dec!(-1)),
            ..create_input("prod-1", "mat-1")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "quantityPerUnit"));
}

#[tokio::test]
async fn update_changes_only_the_provided_fields() {
    let store = Store::in_memory();
    let service = RecipeService::new(store.clone());
    let recipe = service.create_recipe(create_input("prod-1", "mat-1")).await.unwrap();

    let updated = service
        .update_recipe(
            &recipe.id,
            UpdateRecipeInput {
                product_id: None,
                material_id: None,
                quantity_per_unit: Some(dec!(4)),
                unit: None,
                production_mode: Some("batch".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.product_id, "prod-1");
    assert_eq!(updated.material_id, "mat-1");
    assert_eq!(updated.quantity_per_unit, dec!(4));
    assert_eq!(updated.unit, "kg");
    assert_eq!(updated.production_mode, ProductionMode::Batch);

    assert_eq!(store.read_recipes().unwrap()[0], updated);
}

#[tokio::test]
async fn update_of_missing_recipe_is_not_found() {
    let store = Store::in_memory();
    let service = RecipeService::new(store);

    let err = service
        .update_recipe(
            "rec-missing",
            UpdateRecipeInput {
                product_id: None,
                material_id: None,
                quantity_per_unit: Some(dec!(1)),
                unit: None,
                production_mode: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_returns_the_removed_row() {
    let store = Store::in_memory();
    let service = RecipeService::new(store.clone());
    let recipe = service.create_recipe(create_input("prod-1", "mat-1")).await.unwrap();

    let removed = service.delete_recipe(&recipe.id).await.unwrap();
    assert_eq!(removed, recipe);
    assert!(store.read_recipes().unwrap().is_empty());

    let err = service.delete_recipe(&recipe.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
