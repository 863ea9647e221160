//! Product management service (CRUD)

use rust_decimal::Decimal;
use serde::Deserialize;

use shared::{
    new_entity_id, normalized_text, validate_non_negative, validate_required_text, Product,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Input for creating a product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<Decimal>,
    pub unit: Option<String>,
}

/// Input for updating a product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<Decimal>,
    pub unit: Option<String>,
}

/// Product service for sellable-product records
#[derive(Clone)]
pub struct ProductService {
    store: Store,
}

impl ProductService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.store.read_products()?)
    }

    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        let name = input.name.unwrap_or_default();
        validate_required_text(&name).map_err(|_| {
            AppError::validation("name", "name is required", "El nombre es obligatorio")
        })?;

        let price = input.price.unwrap_or(Decimal::ZERO);
        let stock = input.stock.unwrap_or(Decimal::ZERO);
        validate_non_negative(price).map_err(|_| {
            AppError::validation(
                "price",
                "price cannot be negative",
                "El precio no puede ser negativo",
            )
        })?;
        validate_non_negative(stock).map_err(|_| {
            AppError::validation(
                "stock",
                "stock cannot be negative",
                "El stock no puede ser negativo",
            )
        })?;

        let _guard = self.store.lock_writes().await;
        let mut products = self.store.read_products()?;

        let product = Product {
            id: new_entity_id("prod"),
            name: name.trim().to_string(),
            category: normalized_text(input.category),
            price,
            stock,
            unit: normalized_text(input.unit),
        };

        products.push(product.clone());
        self.store.write_products(&products)?;

        Ok(product)
    }

    pub async fn update_product(&self, id: &str, input: UpdateProductInput) -> AppResult<Product> {
        if let Some(name) = &input.name {
            validate_required_text(name).map_err(|_| {
                AppError::validation(
                    "name",
                    "name cannot be empty",
                    "El nombre no puede ser vacío",
                )
            })?;
        }
        if let Some(price) = input.price {
            validate_non_negative(price).map_err(|_| {
                AppError::validation(
                    "price",
                    "price cannot be negative",
                    "El precio no puede ser negativo",
                )
            })?;
        }
        if let Some(stock) = input.stock {
            validate_non_negative(stock).map_err(|_| {
                AppError::validation(
                    "stock",
                    "stock cannot be negative",
                    "El stock no puede ser negativo",
                )
            })?;
        }

        let _guard = self.store.lock_writes().await;
        let mut products = self.store.read_products()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        if let Some(name) = input.name {
            product.name = name.trim().to_string();
        }
        if let Some(category) = input.category {
            product.category = category.trim().to_string();
        }
        if let Some(price) = input.price {
            product.price = price;
        }
        if let Some(stock) = input.stock {
            product.stock = stock;
        }
        if let Some(unit) = input.unit {
            product.unit = unit.trim().to_string();
        }

        let updated = product.clone();
        self.store.write_products(&products)?;

        Ok(updated)
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<Product> {
        let _guard = self.store.lock_writes().await;
        let mut products = self.store.read_products()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let removed = products.remove(index);
        self.store.write_products(&products)?;

        Ok(removed)
    }
}
