//! Stock-movement ledger model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{new_entity_id, MovementType};

/// One entry of the append-only stock ledger
///
/// Every production run and sale appends exactly one movement per affected
/// product, with before/after snapshots of that product's stock. Entries are
/// never mutated or deleted; they are the reconciliation source of truth for
/// "what actually happened to stock".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    pub movement_type: MovementType,
    /// Signed stock change: positive for production, negative for sale
    pub quantity_delta: Decimal,
    pub stock_before: Decimal,
    pub stock_after: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl StockMovement {
    /// Ledger entry for a production run adding `stock_delta` units
    pub fn production(
        product_id: &str,
        stock_before: Decimal,
        stock_delta: Decimal,
        production_id: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_entity_id("mov"),
            product_id: product_id.to_string(),
            movement_type: MovementType::Production,
            quantity_delta: stock_delta,
            stock_before,
            stock_after: stock_before + stock_delta,
            production_id: Some(production_id.to_string()),
            sale_id: None,
            order_id: None,
            timestamp,
        }
    }

    /// Ledger entry for a sale removing `quantity` units
    pub fn sale(
        product_id: &str,
        stock_before: Decimal,
        quantity: Decimal,
        sale_id: &str,
        order_id: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_entity_id("mov"),
            product_id: product_id.to_string(),
            movement_type: MovementType::Sale,
            quantity_delta: -quantity,
            stock_before,
            stock_after: stock_before - quantity,
            production_id: None,
            sale_id: Some(sale_id.to_string()),
            order_id: Some(order_id.to_string()),
            timestamp,
        }
    }
}

/// Replay a product's movements in timestamp order from an initial stock of
/// zero, returning the reconstructed stock value
///
/// For a consistent ledger this reproduces the product's current `stock`
/// field exactly.
pub fn replay_stock(product_id: &str, movements: &[StockMovement]) -> Decimal {
    let mut entries: Vec<&StockMovement> = movements
        .iter()
        .filter(|m| m.product_id == product_id)
        .collect();
    entries.sort_by_key(|m| m.timestamp);
    entries.iter().map(|m| m.quantity_delta).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn production_entry_has_positive_delta_and_snapshots() {
        let now = Utc::now();
        let m = StockMovement::production("prod-1", dec!(3), dec!(8), "prodop-1", now);
        assert_eq!(m.quantity_delta, dec!(8));
        assert_eq!(m.stock_before, dec!(3));
        assert_eq!(m.stock_after, dec!(11));
        assert_eq!(m.production_id.as_deref(), Some("prodop-1"));
        assert!(m.sale_id.is_none());
    }

    #[test]
    fn sale_entry_has_negative_delta_and_links() {
        let now = Utc::now();
        let m = StockMovement::sale("prod-1", dec!(5), dec!(2), "venta-1", "ped-1", now);
        assert_eq!(m.quantity_delta, dec!(-2));
        assert_eq!(m.stock_after, dec!(3));
        assert_eq!(m.sale_id.as_deref(), Some("venta-1"));
        assert_eq!(m.order_id.as_deref(), Some("ped-1"));
    }

    #[test]
    fn replay_only_counts_the_requested_product() {
        let now = Utc::now();
        let movements = vec![
            StockMovement::production("prod-1", dec!(0), dec!(10), "prodop-1", now),
            StockMovement::production("prod-2", dec!(0), dec!(4), "prodop-2", now),
            StockMovement::sale("prod-1", dec!(10), dec!(3), "venta-1", "ped-1", now),
        ];
        assert_eq!(replay_stock("prod-1", &movements), dec!(7));
        assert_eq!(replay_stock("prod-2", &movements), dec!(4));
        assert_eq!(replay_stock("prod-3", &movements), dec!(0));
    }
}
