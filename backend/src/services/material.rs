//! Material management service (CRUD)

use rust_decimal::Decimal;
use serde::Deserialize;

use shared::{
    new_entity_id, normalized_text, validate_non_negative, validate_required_text, Material,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Input for creating a material
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<Decimal>,
    pub unit: Option<String>,
}

/// Input for updating a material
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<Decimal>,
    pub unit: Option<String>,
}

/// Material service for raw-material records
#[derive(Clone)]
pub struct MaterialService {
    store: Store,
}

impl MaterialService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_materials(&self) -> AppResult<Vec<Material>> {
        Ok(self.store.read_materials()?)
    }

    pub async fn create_material(&self, input: CreateMaterialInput) -> AppResult<Material> {
        let name = input.name.unwrap_or_default();
        validate_required_text(&name).map_err(|_| {
            AppError::validation("name", "name is required", "El nombre es obligatorio")
        })?;

        let stock = input.stock.unwrap_or(Decimal::ZERO);
        validate_non_negative(stock).map_err(|_| {
            AppError::validation(
                "stock",
                "stock cannot be negative",
                "El stock no puede ser negativo",
            )
        })?;

        let _guard = self.store.lock_writes().await;
        let mut materials = self.store.read_materials()?;

        let material = Material {
            id: new_entity_id("mat"),
            name: name.trim().to_string(),
            category: normalized_text(input.category),
            stock,
            unit: normalized_text(input.unit),
        };

        materials.push(material.clone());
        self.store.write_materials(&materials)?;

        Ok(material)
    }

    pub async fn update_material(&self, id: &str, input: UpdateMaterialInput) -> AppResult<Material> {
        if let Some(name) = &input.name {
            validate_required_text(name).map_err(|_| {
                AppError::validation(
                    "name",
                    "name cannot be empty",
                    "El nombre no puede ser vacío",
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
        let mut materials = self.store.read_materials()?;
        let material = materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        if let Some(name) = input.name {
            material.name = name.trim().to_string();
        }
        if let Some(category) = input.category {
            material.category = category.trim().to_string();
        }
        if let Some(stock) = input.stock {
            material.stock = stock;
        }
        if let Some(unit) = input.unit {
            material.unit = unit.trim().to_string();
        }

        let updated = material.clone();
        self.store.write_materials(&materials)?;

        Ok(updated)
    }

    pub async fn delete_material(&self, id: &str) -> AppResult<Material> {
        let _guard = self.store.lock_writes().await;
        let mut materials = self.store.read_materials()?;
        let index = materials
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        let removed = materials.remove(index);
        self.store.write_materials(&materials)?;

        Ok(removed)
    }
}
