//! In-memory implementation of the collection store
//!
//! Used by the test suites and available for embedding; same read-all /
//! replace-all contract as the flat-file store, without durability.

use std::sync::Mutex;

use shared::{Material, Order, Product, ProductionRun, Recipe, Sale, StockMovement};

use super::{CollectionStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Collections {
    materials: Vec<Material>,
    products: Vec<Product>,
    recipes: Vec<Recipe>,
    productions: Vec<ProductionRun>,
    sales: Vec<Sale>,
    orders: Vec<Order>,
    stock_movements: Vec<StockMovement>,
}

/// Volatile collection store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    fn with<T>(&self, f: impl FnOnce(&mut Collections) -> T) -> StoreResult<T> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut inner))
    }
}

impl CollectionStore for MemoryStore {
    fn read_materials(&self) -> StoreResult<Vec<Material>> {
        self.with(|c| c.materials.clone())
    }

    fn write_materials(&self, materials: &[Material]) -> StoreResult<()> {
        self.with(|c| c.materials = materials.to_vec())
    }

    fn read_products(&self) -> StoreResult<Vec<Product>> {
        self.with(|c| c.products.clone())
    }

    fn write_products(&self, products: &[Product]) -> StoreResult<()> {
        self.with(|c| c.products = products.to_vec())
    }

    fn read_recipes(&self) -> StoreResult<Vec<Recipe>> {
        self.with(|c| c.recipes.clone())
    }

    fn write_recipes(&self, recipes: &[Recipe]) -> StoreResult<()> {
        self.with(|c| c.recipes = recipes.to_vec())
    }

    fn read_productions(&self) -> StoreResult<Vec<ProductionRun>> {
        self.with(|c| c.productions.clone())
    }

    fn write_productions(&self, productions: &[ProductionRun]) -> StoreResult<()> {
        self.with(|c| c.productions = productions.to_vec())
    }

    fn read_sales(&self) -> StoreResult<Vec<Sale>> {
        self.with(|c| c.sales.clone())
    }

    fn write_sales(&self, sales: &[Sale]) -> StoreResult<()> {
        self.with(|c| c.sales = sales.to_vec())
    }

    fn read_orders(&self) -> StoreResult<Vec<Order>> {
        self.with(|c| c.orders.clone())
    }

    fn write_orders(&self, orders: &[Order]) -> StoreResult<()> {
        self.with(|c| c.orders = orders.to_vec())
    }

    fn read_stock_movements(&self) -> StoreResult<Vec<StockMovement>> {
        self.with(|c| c.stock_movements.clone())
    }

    fn write_stock_movements(&self, movements: &[StockMovement]) -> StoreResult<()> {
        self.with(|c| c.stock_movements = movements.to_vec())
    }
}
