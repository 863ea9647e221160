//! Production run model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductionMode;

/// An immutable record of one production run
///
/// `quantity` is the production multiplier (units, or batches in batch
/// mode); `stock_delta` is the stock actually added, which in batch mode is
/// the operator-reported `good_units`, not the batch count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRun {
    pub id: String,
    pub product_id: String,
    pub quantity: Decimal,
    pub production_mode: ProductionMode,
    pub good_units: Option<Decimal>,
    pub stock_delta: Decimal,
    pub timestamp: DateTime<Utc>,
    pub materials_consumed: Vec<MaterialConsumption>,
}

/// Quantity of one material consumed by a production run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConsumption {
    pub material_id: String,
    pub quantity: Decimal,
}
