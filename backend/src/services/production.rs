//! Production engine
//!
//! Records a production run as one logical unit: material consumption,
//! product stock increase, the immutable run record, and the ledger entry.
//! All validation happens before any collection is written; if material
//! stock cannot cover the run, nothing is touched and the caller gets the
//! full shortage list.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{
    new_entity_id, validate_positive_quantity, validate_required_text, MaterialConsumption,
    Product, ProductionMode, ProductionRun, StockMovement,
};

use crate::error::{AppError, AppResult};
use crate::services::recipe::resolve_requirements;
use crate::store::Store;

/// Input for recording a production run
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordProductionInput {
    pub product_id: Option<String>,
    pub quantity: Option<Decimal>,
    /// Operator-reported good yield; mandatory in batch mode because
    /// spoilage varies per run
    pub good_units: Option<Decimal>,
}

/// Result of a recorded production run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOutcome {
    pub production_run: ProductionRun,
    pub updated_product: Product,
}

/// Production service applying validated runs to the collections
#[derive(Clone)]
pub struct ProductionService {
    store: Store,
}

impl ProductionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Append-only history of recorded runs
    pub async fn list_productions(&self) -> AppResult<Vec<ProductionRun>> {
        Ok(self.store.read_productions()?)
    }

    /// Validate and apply one production run
    pub async fn record_production(
        &self,
        input: RecordProductionInput,
    ) -> AppResult<ProductionOutcome> {
        let product_id = input.product_id.unwrap_or_default();
        validate_required_text(&product_id).map_err(|_| {
            AppError::validation(
                "productId",
                "productId is required",
                "productId es obligatorio",
            )
        })?;

        let quantity = input.quantity.unwrap_or(Decimal::ZERO);
        validate_positive_quantity(quantity).map_err(|_| {
            AppError::validation(
                "quantity",
                "quantity must be a number greater than 0",
                "cantidad debe ser un número mayor a 0",
            )
        })?;

        // The whole read-validate-apply sequence runs under the write lock so
        // the stock check cannot race another mutation.
        let _guard = self.store.lock_writes().await;

        let mut products = self.store.read_products()?;
        let mut materials = self.store.read_materials()?;
        let recipes = self.store.read_recipes()?;

        let product_index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let resolved = resolve_requirements(&product_id, quantity, &recipes, &materials)?;

        // In batch mode the yield is operator-reported, never derived.
        let good_units = match resolved.mode {
            ProductionMode::Batch => {
                let good_units = input.good_units.ok_or_else(|| {
                    AppError::validation(
                        "goodUnits",
                        "goodUnits is required for batch-mode products",
                        "Para productos de tipo 'batch' tenés que indicar las unidades buenas (goodUnits)",
                    )
                })?;
                validate_positive_quantity(good_units).map_err(|_| {
                    AppError::validation(
                        "goodUnits",
                        "goodUnits must be a number greater than 0",
                        "goodUnits debe ser un número mayor a 0",
                    )
                })?;
                Some(good_units)
            }
            ProductionMode::Unit => None,
        };

        // All-or-nothing: any shortage aborts before any stock is touched.
        let shortages = resolved.shortages();
        if !shortages.is_empty() {
            return Err(AppError::InsufficientMaterials { shortages });
        }

        for requirement in &resolved.requirements {
            if let Some(material) = materials.iter_mut().find(|m| m.id == requirement.material_id)
            {
                material.stock -= requirement.required;
            }
        }

        // Unit mode: one production unit yields one stock unit. Batch mode:
        // the reported good yield lands in stock, independent of the batch
        // count that drove material consumption.
        let stock_delta = match resolved.mode {
            ProductionMode::Unit => quantity,
            ProductionMode::Batch => good_units.unwrap_or(Decimal::ZERO),
        };

        let stock_before = products[product_index].stock;
        products[product_index].stock = stock_before + stock_delta;

        self.store.write_materials(&materials)?;
        self.store.write_products(&products)?;

        let now = Utc::now();
        let production_run = ProductionRun {
            id: new_entity_id("prodop"),
            product_id: product_id.clone(),
            quantity,
            production_mode: resolved.mode,
            good_units,
            stock_delta,
            timestamp: now,
            materials_consumed: resolved
                .requirements
                .iter()
                .map(|r| MaterialConsumption {
                    material_id: r.material_id.clone(),
                    quantity: r.required,
                })
                .collect(),
        };

        let mut productions = self.store.read_productions()?;
        productions.push(production_run.clone());
        self.store.write_productions(&productions)?;

        let mut movements = self.store.read_stock_movements()?;
        movements.push(StockMovement::production(
            &product_id,
            stock_before,
            stock_delta,
            &production_run.id,
            now,
        ));
        self.store.write_stock_movements(&movements)?;

        tracing::info!(
            product_id = %product_id,
            mode = %resolved.mode,
            %stock_delta,
            "recorded production run"
        );

        Ok(ProductionOutcome {
            production_run,
            updated_product: products[product_index].clone(),
        })
    }
}
