//! Raw material model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw material consumed by production runs
///
/// Stock is mutated only by the production engine (consumption); order
/// fulfillment never touches materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: Decimal,
    #[serde(default)]
    pub unit: String,
}
