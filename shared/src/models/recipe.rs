//! Recipe (bill-of-materials) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductionMode;

/// One row of a product's bill of materials
///
/// Defines the material cost of producing one unit (mode `unit`) or one
/// batch (mode `batch`) of the product. All rows for a product are expected
/// to share the same production mode; the resolver rejects rows that
/// disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub product_id: String,
    pub material_id: String,
    #[serde(default)]
    pub quantity_per_unit: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub production_mode: ProductionMode,
}
