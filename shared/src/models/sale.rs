//! Sale model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::new_entity_id;

/// An immutable sale record, one per order item per delivery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Sale {
    /// Build a sale at the product's current unit price
    pub fn new(
        product_id: &str,
        quantity: Decimal,
        unit_price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_entity_id("venta"),
            product_id: product_id.to_string(),
            quantity,
            unit_price,
            total_amount: unit_price * quantity,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_amount_is_price_times_quantity() {
        let sale = Sale::new("prod-1", dec!(2), dec!(100), chrono::Utc::now());
        assert_eq!(sale.total_amount, dec!(200));
        assert!(sale.id.starts_with("venta-"));
    }
}
