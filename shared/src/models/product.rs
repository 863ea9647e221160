//! Finished product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product
///
/// Stock is incremented by production runs and decremented by order
/// deliveries. `price` is the unit price captured on each sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: Decimal,
    #[serde(default)]
    pub unit: String,
}
