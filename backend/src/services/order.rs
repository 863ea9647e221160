//! Order fulfillment engine
//!
//! Orders move through pending → in_production → ready → delivered, with
//! cancelled reachable from any non-terminal state. Every transition except
//! the one to `delivered` is a plain field update; the delivered transition
//! checks product stock for all items up front and then applies the stock
//! decrement, the sale records, and the ledger entries as one logical unit,
//! persisting the order itself last so the ledger never references an order
//! state that was not reached.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{
    new_entity_id, normalized_text, validate_positive_quantity, validate_required_text, Order,
    OrderItem, OrderStatus, Sale, StockMovement,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// One insufficient or unresolvable product in a rejected delivery
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShortageItem {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_stock: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ShortageItem {
    fn missing_product(product_id: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: None,
            available_stock: None,
            required: None,
            reason: Some("not found".to_string()),
        }
    }

    fn insufficient(product_id: &str, name: &str, available: Decimal, required: Decimal) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: Some(name.to_string()),
            available_stock: Some(available),
            required: Some(required),
            reason: None,
        }
    }
}

/// Input for creating an order
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub customer: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<Decimal>,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub channel: Option<String>,
    pub urgent: Option<bool>,
}

/// Input for updating an order (status and/or basic fields)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderInput {
    /// Raw status string; validated against the recognized set
    pub status: Option<String>,
    pub customer: Option<String>,
    pub notes: Option<String>,
    pub channel: Option<String>,
    pub urgent: Option<bool>,
}

/// Order service running the fulfillment state machine
#[derive(Clone)]
pub struct OrderService {
    store: Store,
}

impl OrderService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.store.read_orders()?)
    }

    /// Create a pending order for a single product
    pub async fn create_order(&self, input: CreateOrderInput) -> AppResult<Order> {
        let product_id = input.product_id.unwrap_or_default().trim().to_string();
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

        let _guard = self.store.lock_writes().await;

        let products = self.store.read_products()?;
        if !products.iter().any(|p| p.id == product_id) {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let order = Order {
            id: new_entity_id("ped"),
            customer: normalized_text(input.customer),
            status: OrderStatus::Pending,
            items: vec![OrderItem {
                product_id,
                quantity,
            }],
            notes: normalized_text(input.notes),
            created_at: Utc::now(),
            delivered_at: None,
            due_date: input.due_date,
            channel: normalized_text(input.channel),
            urgent: input.urgent.unwrap_or(false),
            sale_ids: Vec::new(),
        };

        let mut orders = self.store.read_orders()?;
        orders.push(order.clone());
        self.store.write_orders(&orders)?;

        Ok(order)
    }

    /// Update basic fields and/or run a status transition
    pub async fn update_order(&self, id: &str, input: UpdateOrderInput) -> AppResult<Order> {
        // Validate the target status before taking the write lock; an
        // unrecognized string never reaches the state machine.
        let target = match input.status.as_deref() {
            None => None,
            Some(raw) => Some(OrderStatus::from_str(raw).map_err(|_| {
                AppError::validation("status", "Invalid status", "Estado inválido")
            })?),
        };

        let _guard = self.store.lock_writes().await;

        let mut orders = self.store.read_orders()?;
        let index = orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;
        let order = &mut orders[index];

        // Basic fields update unconditionally; they only persist once the
        // requested transition (if any) has been accepted.
        if let Some(customer) = input.customer {
            order.customer = customer.trim().to_string();
        }
        if let Some(notes) = input.notes {
            order.notes = notes.trim().to_string();
        }
        if let Some(channel) = input.channel {
            order.channel = channel.trim().to_string();
        }
        if let Some(urgent) = input.urgent {
            order.urgent = urgent;
        }

        let target = match target {
            Some(target) => target,
            None => {
                let updated = order.clone();
                self.store.write_orders(&orders)?;
                return Ok(updated);
            }
        };

        // Delivered is terminal: no status change, including a repeated
        // delivery, is accepted afterwards.
        if order.status.is_terminal() {
            return Err(AppError::Conflict {
                message: "The order was already marked as delivered".to_string(),
                message_es: "El pedido ya estaba marcado como entregado".to_string(),
            });
        }

        if target == order.status {
            let updated = order.clone();
            self.store.write_orders(&orders)?;
            return Ok(updated);
        }

        if target == OrderStatus::Delivered {
            self.deliver(&mut orders, index)?;
        } else {
            orders[index].status = target;
        }

        let updated = orders[index].clone();
        self.store.write_orders(&orders)?;
        Ok(updated)
    }

    /// Apply the delivered transition: all-or-nothing stock check, then
    /// stock decrement + sale + ledger entry per item
    ///
    /// Mutates the order in place; the caller persists the order collection
    /// last so a crash here leaves the ledger, not the order, as the source
    /// of truth.
    fn deliver(&self, orders: &mut [Order], index: usize) -> AppResult<()> {
        let order = &mut orders[index];

        let mut products = self.store.read_products()?;
        let mut sales = self.store.read_sales()?;
        let mut movements = self.store.read_stock_movements()?;

        // Check every item before touching anything.
        let mut shortages = Vec::new();
        for item in &order.items {
            match products.iter().find(|p| p.id == item.product_id) {
                None => shortages.push(ShortageItem::missing_product(&item.product_id)),
                Some(product) => {
                    if product.stock < item.quantity {
                        shortages.push(ShortageItem::insufficient(
                            &product.id,
                            &product.name,
                            product.stock,
                            item.quantity,
                        ));
                    }
                }
            }
        }
        if !shortages.is_empty() {
            return Err(AppError::InsufficientStock { shortages });
        }

        let now = Utc::now();
        let mut new_sale_ids = Vec::with_capacity(order.items.len());

        for item in &order.items {
            let product = match products.iter_mut().find(|p| p.id == item.product_id) {
                Some(product) => product,
                // validated above
                None => continue,
            };

            let stock_before = product.stock;
            product.stock = stock_before - item.quantity;

            let sale = Sale::new(&item.product_id, item.quantity, product.price, now);
            movements.push(StockMovement::sale(
                &item.product_id,
                stock_before,
                item.quantity,
                &sale.id,
                &order.id,
                now,
            ));
            new_sale_ids.push(sale.id.clone());
            sales.push(sale);
        }

        // Stock and ledger land before the order record that references them.
        self.store.write_products(&products)?;
        self.store.write_sales(&sales)?;
        self.store.write_stock_movements(&movements)?;

        order.status = OrderStatus::Delivered;
        order.delivered_at = Some(now);
        order.sale_ids.extend(new_sale_ids);

        tracing::info!(order_id = %order.id, sales = order.sale_ids.len(), "order delivered");

        Ok(())
    }
}
