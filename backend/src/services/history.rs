//! Stock-history service
//!
//! Read-only view over the stock-movement ledger. A failed history read
//! degrades to the empty list: stale history is less harmful to the operator
//! than a blocked UI.

use shared::StockMovement;

use crate::error::AppResult;
use crate::store::Store;

/// Stock-history service exposing the ledger for display
#[derive(Clone)]
pub struct HistoryService {
    store: Store,
}

impl HistoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Full movement list in append (timestamp) order
    pub async fn list_movements(&self) -> AppResult<Vec<StockMovement>> {
        match self.store.read_stock_movements() {
            Ok(movements) => Ok(movements),
            Err(err) => {
                tracing::warn!(error = %err, "stock-history read failed, returning empty list");
                Ok(Vec::new())
            }
        }
    }
}
