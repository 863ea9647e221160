//! Customer order model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::OrderStatus;

/// A customer order moving through the fulfillment state machine
///
/// `sale_ids` accumulates the sales created when the order is delivered;
/// `delivered_at` is set exactly once since `delivered` is terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form sales channel (Instagram, market stall, walk-in, …)
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub sale_ids: Vec<String>,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: Decimal,
}
