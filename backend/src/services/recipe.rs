//! Recipe service: bill-of-materials CRUD and the requirement resolver
//!
//! The resolver is the read-only half of the production engine: given a
//! product and a production quantity it computes, from the recipe rows and
//! the current material collection, how much of each material the run needs
//! and how much is available.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{
    new_entity_id, normalized_text, validate_non_negative, validate_required_text, Material,
    ProductionMode, Recipe,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Material quantity required by a production run, with availability
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    pub material_id: String,
    pub material_name: String,
    pub required: Decimal,
    pub available_stock: Decimal,
}

/// Resolved bill of materials for one production run
#[derive(Debug, Clone)]
pub struct ResolvedRequirements {
    pub mode: ProductionMode,
    pub requirements: Vec<MaterialRequirement>,
}

impl ResolvedRequirements {
    /// Requirements the current material stock cannot cover
    pub fn shortages(&self) -> Vec<MaterialRequirement> {
        self.requirements
            .iter()
            .filter(|r| r.required > r.available_stock)
            .cloned()
            .collect()
    }
}

/// Compute the material requirements for producing `quantity` of a product
///
/// `quantity` counts units in unit mode and batches in batch mode; it is
/// always the raw production multiplier, never the reported good yield.
pub fn resolve_requirements(
    product_id: &str,
    quantity: Decimal,
    recipes: &[Recipe],
    materials: &[Material],
) -> AppResult<ResolvedRequirements> {
    let rows: Vec<&Recipe> = recipes.iter().filter(|r| r.product_id == product_id).collect();
    if rows.is_empty() {
        return Err(AppError::validation(
            "productId",
            "The product has no recipe",
            "El producto no tiene receta asociada",
        ));
    }

    // All rows of a product must agree on the production mode; a disagreement
    // means the recipe data is broken and picking one silently would hide it.
    let mode = rows[0].production_mode;
    if rows.iter().any(|r| r.production_mode != mode) {
        return Err(AppError::validation(
            "productionMode",
            "The product's recipe rows disagree on production mode",
            "Las filas de la receta del producto no coinciden en el modo de producción",
        ));
    }

    let mut requirements = Vec::with_capacity(rows.len());
    for row in rows {
        let material = materials
            .iter()
            .find(|m| m.id == row.material_id)
            .ok_or_else(|| AppError::NotFound(format!("Recipe material {}", row.material_id)))?;

        requirements.push(MaterialRequirement {
            material_id: material.id.clone(),
            material_name: material.name.clone(),
            required: row.quantity_per_unit * quantity,
            available_stock: material.stock,
        });
    }

    Ok(ResolvedRequirements { mode, requirements })
}

/// Input for creating a recipe row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeInput {
    pub product_id: String,
    pub material_id: String,
    pub quantity_per_unit: Option<Decimal>,
    pub unit: Option<String>,
    pub production_mode: Option<String>,
}

/// Input for updating a recipe row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeInput {
    pub product_id: Option<String>,
    pub material_id: Option<String>,
    pub quantity_per_unit: Option<Decimal>,
    pub unit: Option<String>,
    pub production_mode: Option<String>,
}

/// Recipe service for managing bill-of-materials rows
#[derive(Clone)]
pub struct RecipeService {
    store: Store,
}

impl RecipeService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.store.read_recipes()?)
    }

    pub async fn create_recipe(&self, input: CreateRecipeInput) -> AppResult<Recipe> {
        validate_required_text(&input.product_id).map_err(|_| {
            AppError::validation(
                "productId",
                "productId is required",
                "productId es obligatorio",
            )
        })?;
        validate_required_text(&input.material_id).map_err(|_| {
            AppError::validation(
                "materialId",
                "materialId is required",
                "materialId es obligatorio",
            )
        })?;

        let quantity_per_unit = input.quantity_per_unit.unwrap_or(Decimal::ZERO);
        validate_non_negative(quantity_per_unit).map_err(|_| {
            AppError::validation(
                "quantityPerUnit",
                "quantityPerUnit cannot be negative",
                "quantityPerUnit no puede ser negativa",
            )
        })?;

        let production_mode = parse_mode(input.production_mode.as_deref())?;

        let _guard = self.store.lock_writes().await;
        let mut recipes = self.store.read_recipes()?;

        let recipe = Recipe {
            id: new_entity_id("rec"),
            product_id: input.product_id.trim().to_string(),
            material_id: input.material_id.trim().to_string(),
            quantity_per_unit,
            unit: normalized_text(input.unit),
            production_mode,
        };

        recipes.push(recipe.clone());
        self.store.write_recipes(&recipes)?;

        Ok(recipe)
    }

    pub async fn update_recipe(&self, id: &str, input: UpdateRecipeInput) -> AppResult<Recipe> {
        if let Some(product_id) = &input.product_id {
            validate_required_text(product_id).map_err(|_| {
                AppError::validation(
                    "productId",
                    "productId cannot be empty",
                    "productId no puede ser vacío",
                )
            })?;
        }
        if let Some(material_id) = &input.material_id {
            validate_required_text(material_id).map_err(|_| {
                AppError::validation(
                    "materialId",
                    "materialId cannot be empty",
                    "materialId no puede ser vacío",
                )
            })?;
        }
        if let Some(quantity) = input.quantity_per_unit {
            validate_non_negative(quantity).map_err(|_| {
                AppError::validation(
                    "quantityPerUnit",
                    "quantityPerUnit cannot be negative",
                    "quantityPerUnit no puede ser negativa",
                )
            })?;
        }
        let new_mode = match input.production_mode.as_deref() {
            Some(raw) => Some(parse_mode(Some(raw))?),
            None => None,
        };

        let _guard = self.store.lock_writes().await;
        let mut recipes = self.store.read_recipes()?;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Recipe".to_string()))?;

        if let Some(product_id) = input.product_id {
            recipe.product_id = product_id.trim().to_string();
        }
        if let Some(material_id) = input.material_id {
            recipe.material_id = material_id.trim().to_string();
        }
        if let Some(quantity) = input.quantity_per_unit {
            recipe.quantity_per_unit = quantity;
        }
        if let Some(unit) = input.unit {
            recipe.unit = unit.trim().to_string();
        }
        if let Some(mode) = new_mode {
            recipe.production_mode = mode;
        }

        let updated = recipe.clone();
        self.store.write_recipes(&recipes)?;

        Ok(updated)
    }

    pub async fn delete_recipe(&self, id: &str) -> AppResult<Recipe> {
        let _guard = self.store.lock_writes().await;
        let mut recipes = self.store.read_recipes()?;
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Recipe".to_string()))?;

        let removed = recipes.remove(index);
        self.store.write_recipes(&recipes)?;

        Ok(removed)
    }
}

fn parse_mode(raw: Option<&str>) -> AppResult<ProductionMode> {
    match raw {
        None => Ok(ProductionMode::default()),
        Some(raw) => ProductionMode::from_str(raw.trim()).map_err(|_| {
            AppError::validation(
                "productionMode",
                "productionMode must be 'unit' or 'batch'",
                "productionMode debe ser 'unit' o 'batch'",
            )
        }),
    }
}
