//! Production engine tests
//!
//! Covers unit and batch runs end to end against an in-memory store:
//! material consumption, yield accounting, the all-or-nothing shortage
//! check, and the ledger entry every run appends.

use rust_decimal_macros::dec;

use obsidian_backend::error::AppError;
use obsidian_backend::services::production::{ProductionService, RecordProductionInput};
use obsidian_backend::store::Store;
use shared::{new_entity_id, Material, Product, ProductionMode, Recipe};

fn material(id: &str, name: &str, stock: rust_decimal::Decimal) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        category: String::new(),
        stock,
        unit: "kg".to_string(),
    }
}

fn product(id: &str, name: &str, stock: rust_decimal::Decimal) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: String::new(),
        price: dec!(100),
        stock,
        unit: "unit".to_string(),
    }
}

fn recipe(
    product_id: &str,
    material_id: &str,
    per_unit: rust_decimal::Decimal,
    mode: ProductionMode,
) -> Recipe {
    Recipe {
        id: new_entity_id("rec"),
        product_id: product_id.to_string(),
        material_id: material_id.to_string(),
        quantity_per_unit: per_unit,
        unit: "kg".to_string(),
        production_mode: mode,
    }
}

fn input(product_id: &str, quantity: rust_decimal::Decimal) -> RecordProductionInput {
    RecordProductionInput {
        product_id: Some(product_id.to_string()),
        quantity: Some(quantity),
        good_units: None,
    }
}

#[tokio::test]
async fn unit_mode_run_moves_stock_one_to_one() {
    let store = Store::in_memory();
    store
        .write_materials(&[material("mat-1", "clay", dec!(20))])
        .unwrap();
    store
        .write_products(&[product("prod-1", "mug", dec!(2))])
        .unwrap();
    store
        .write_recipes(&[recipe("prod-1", "mat-1", dec!(3), ProductionMode::Unit)])
        .unwrap();

    let service = ProductionService::new(store.clone());
    let outcome = service
        .record_production(input("prod-1", dec!(4)))
        .await
        .unwrap();

    // 4 units at 3 kg each consume 12 kg and add 4 to product stock.
    assert_eq!(outcome.updated_product.stock, dec!(6));
    assert_eq!(outcome.production_run.stock_delta, dec!(4));
    assert_eq!(outcome.production_run.good_units, None);
    assert_eq!(outcome.production_run.materials_consumed.len(), 1);
    assert_eq!(outcome.production_run.materials_consumed[0].quantity, dec!(12));

    let materials = store.read_materials().unwrap();
    assert_eq!(materials[0].stock, dec!(8));

    let movements = store.read_stock_movements().unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].quantity_delta, dec!(4));
    assert_eq!(movements[0].stock_before, dec!(2));
    assert_eq!(movements[0].stock_after, dec!(6));
    assert_eq!(
        movements[0].production_id.as_deref(),
        Some(outcome.production_run.id.as_str())
    );
}

#[tokio::test]
async fn batch_mode_stocks_the_reported_good_yield() {
    // Two batches consume material for two batches, but only the reported
    // eight good units reach product stock.
    let store = Store::in_memory();
    store
        .write_materials(&[material("mat-1", "vinyl roll", dec!(10))])
        .unwrap();
    store
        .write_products(&[product("prod-1", "vinyl sheet", dec!(0))])
        .unwrap();
    store
        .write_recipes(&[recipe("prod-1", "mat-1", dec!(5), ProductionMode::Batch)])
        .unwrap();

    let service = ProductionService::new(store.clone());
    let outcome = service
        .record_production(RecordProductionInput {
            product_id: Some("prod-1".to_string()),
            quantity: Some(dec!(2)),
            good_units: Some(dec!(8)),
        })
        .await
        .unwrap();

    assert_eq!(outcome.updated_product.stock, dec!(8));
    assert_eq!(outcome.production_run.stock_delta, dec!(8));
    assert_eq!(outcome.production_run.good_units, Some(dec!(8)));
    assert_eq!(outcome.production_run.materials_consumed[0].quantity, dec!(10));

    let materials = store.read_materials().unwrap();
    assert_eq!(materials[0].stock, dec!(0));

    let movements = store.read_stock_movements().unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].quantity_delta, dec!(8));
}

#[tokio::test]
async fn batch_mode_requires_good_units() {
    let store = Store::in_memory();
    store
        .write_materials(&[material("mat-1", "vinyl roll", dec!(50))])
        .unwrap();
    store
        .write_products(&[product("prod-1", "vinyl sheet", dec!(0))])
        .unwrap();
    store
        .write_recipes(&[recipe("prod-1", "mat-1", dec!(5), ProductionMode::Batch)])
        .unwrap();

    let service = ProductionService::new(store.clone());
    let err = service
        .record_production(input("prod-1", dec!(2)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "goodUnits"));
    // Nothing was written.
    assert_eq!(store.read_materials().unwrap()[0].stock, dec!(50));
    assert!(store.read_productions().unwrap().is_empty());
}

#[tokio::test]
async fn material_shortage_rejects_the_whole_run() {
    // One covered material and one short material: the run is rejected and
    // neither material is consumed.
    let store = Store::in_memory();
    store
        .write_materials(&[
            material("mat-1", "clay", dec!(100)),
            material("mat-2", "glaze", dec!(1)),
        ])
        .unwrap();
    store
        .write_products(&[product("prod-1", "mug", dec!(5))])
        .unwrap();
    store
        .write_recipes(&[
            recipe("prod-1", "mat-1", dec!(2), ProductionMode::Unit),
            recipe("prod-1", "mat-2", dec!(1), ProductionMode::Unit),
        ])
        .unwrap();

    let service = ProductionService::new(store.clone());
    let err = service
        .record_production(input("prod-1", dec!(3)))
        .await
        .unwrap_err();

    match err {
        AppError::InsufficientMaterials { shortages } => {
            assert_eq!(shortages.len(), 1);
            assert_eq!(shortages[0].material_id, "mat-2");
            assert_eq!(shortages[0].required, dec!(3));
            assert_eq!(shortages[0].available_stock, dec!(1));
        }
        other => panic!("expected InsufficientMaterials, got {other:?}"),
    }

    let materials = store.read_materials().unwrap();
    assert_eq!(materials[0].stock, dec!(100));
    assert_eq!(materials[1].stock, dec!(1));
    assert_eq!(store.read_products().unwrap()[0].stock, dec!(5));
    assert!(store.read_productions().unwrap().is_empty());
    assert!(store.read_stock_movements().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let store = Store::in_memory();
    let service = ProductionService::new(store);
    let err = service
        .record_production(input("prod-missing", dec!(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn quantity_must_be_positive() {
    let store = Store::in_memory();
    let service = ProductionService::new(store);
    let err = service
        .record_production(input("prod-1", dec!(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "quantity"));
}

#[tokio::test]
async fn runs_accumulate_in_history() {
    let store = Store::in_memory();
    store
        .write_materials(&[material("mat-1", "clay", dec!(100))])
        .unwrap();
    store
        .write_products(&[product("prod-1", "mug", dec!(0))])
        .unwrap();
    store
        .write_recipes(&[recipe("prod-1", "mat-1", dec!(1), ProductionMode::Unit)])
        .unwrap();

    let service = ProductionService::new(store.clone());
    service.record_production(input("prod-1", dec!(2))).await.unwrap();
    service.record_production(input("prod-1", dec!(3))).await.unwrap();

    let runs = service.list_productions().await.unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(store.read_products().unwrap()[0].stock, dec!(5));
    assert_eq!(store.read_stock_movements().unwrap().len(), 2);
}
