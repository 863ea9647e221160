//! Common types used across the platform

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a customer order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProduction,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::InProduction,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states admit no further status changes
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_production" => Ok(OrderStatus::InProduction),
            "ready" => Ok(OrderStatus::Ready),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized order status string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

/// How a recipe converts a production quantity into product stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductionMode {
    /// One unit of production quantity yields one unit of stock
    #[default]
    Unit,
    /// A batch yields a variable, operator-reported number of good units
    Batch,
}

impl ProductionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionMode::Unit => "unit",
            ProductionMode::Batch => "batch",
        }
    }
}

impl std::str::FromStr for ProductionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(ProductionMode::Unit),
            "batch" => Ok(ProductionMode::Batch),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized production mode string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown production mode: {0}")]
pub struct UnknownMode(pub String);

/// Kind of stock-affecting event recorded in the ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Production,
    Sale,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Production => "production",
            MovementType::Sale => "sale",
        }
    }
}

/// Generate a prefixed entity id (e.g. "mat-6f9d…")
///
/// Data files seeded by earlier versions of the system use prefixed string
/// ids, so new records keep the same shape.
pub fn new_entity_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(OrderStatus::from_str("shipped").is_err());
        assert!(OrderStatus::from_str("DELIVERED").is_err());
    }

    #[test]
    fn mode_parses_recognized_values_only() {
        assert_eq!(
            ProductionMode::from_str("unit").unwrap(),
            ProductionMode::Unit
        );
        assert_eq!(
            ProductionMode::from_str("batch").unwrap(),
            ProductionMode::Batch
        );
        assert!(ProductionMode::from_str("lot").is_err());
    }

    #[test]
    fn only_delivered_is_terminal() {
        for status in OrderStatus::ALL {
            assert_eq!(status.is_terminal(), status == OrderStatus::Delivered);
        }
    }

    #[test]
    fn entity_ids_are_prefixed_and_unique() {
        let a = new_entity_id("mat");
        let b = new_entity_id("mat");
        assert!(a.starts_with("mat-"));
        assert_ne!(a, b);
    }
}
