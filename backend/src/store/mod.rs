//! Collection store abstraction
//!
//! The durable state of the system is seven whole-collection documents
//! (materials, products, recipes, productions, sales, orders, stock
//! movements), each read and replaced in full on every mutation. The
//! [`CollectionStore`] trait captures exactly that contract so the storage
//! backend stays swappable; [`JsonFileStore`] is the production flat-file
//! implementation and [`MemoryStore`] backs tests.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use shared::{Material, Order, Product, ProductionRun, Recipe, Sale, StockMovement};

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Storage failure while reading or writing a collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on collection {collection}: {source}")]
    Io {
        collection: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt collection {collection}: {source}")]
    Corrupt {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-all / replace-all access to the named collections
///
/// No schema enforcement, no indices, no transactions: atomicity across
/// collections is the callers' responsibility (see [`Store::lock_writes`]).
pub trait CollectionStore: Send + Sync {
    fn read_materials(&self) -> StoreResult<Vec<Material>>;
    fn write_materials(&self, materials: &[Material]) -> StoreResult<()>;

    fn read_products(&self) -> StoreResult<Vec<Product>>;
    fn write_products(&self, products: &[Product]) -> StoreResult<()>;

    fn read_recipes(&self) -> StoreResult<Vec<Recipe>>;
    fn write_recipes(&self, recipes: &[Recipe]) -> StoreResult<()>;

    fn read_productions(&self) -> StoreResult<Vec<ProductionRun>>;
    fn write_productions(&self, productions: &[ProductionRun]) -> StoreResult<()>;

    fn read_sales(&self) -> StoreResult<Vec<Sale>>;
    fn write_sales(&self, sales: &[Sale]) -> StoreResult<()>;

    fn read_orders(&self) -> StoreResult<Vec<Order>>;
    fn write_orders(&self, orders: &[Order]) -> StoreResult<()>;

    fn read_stock_movements(&self) -> StoreResult<Vec<StockMovement>>;
    fn write_stock_movements(&self, movements: &[StockMovement]) -> StoreResult<()>;
}

/// Handle bundling the collection store with the single writer lock
///
/// Two concurrent read-modify-write sequences over the same collection would
/// silently lose the first writer's update, so every mutating operation holds
/// the write lock for its whole read-validate-apply-persist sequence.
#[derive(Clone)]
pub struct Store {
    collections: Arc<dyn CollectionStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(collections: Arc<dyn CollectionStore>) -> Self {
        Self {
            collections,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Flat-file store rooted at `data_dir`
    pub fn json(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::new(data_dir)))
    }

    /// Volatile store for tests and embedding
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Serialize a mutating operation; hold the guard until all collection
    /// writes for the operation have landed
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub fn read_materials(&self) -> StoreResult<Vec<Material>> {
        self.collections.read_materials()
    }

    pub fn write_materials(&self, materials: &[Material]) -> StoreResult<()> {
        self.collections.write_materials(materials)
    }

    pub fn read_products(&self) -> StoreResult<Vec<Product>> {
        self.collections.read_products()
    }

    pub fn write_products(&self, products: &[Product]) -> StoreResult<()> {
        self.collections.write_products(products)
    }

    pub fn read_recipes(&self) -> StoreResult<Vec<Recipe>> {
        self.collections.read_recipes()
    }

    pub fn write_recipes(&self, recipes: &[Recipe]) -> StoreResult<()> {
        self.collections.write_recipes(recipes)
    }

    pub fn read_productions(&self) -> StoreResult<Vec<ProductionRun>> {
        self.collections.read_productions()
    }

    pub fn write_productions(&self, productions: &[ProductionRun]) -> StoreResult<()> {
        self.collections.write_productions(productions)
    }

    pub fn read_sales(&self) -> StoreResult<Vec<Sale>> {
        self.collections.read_sales()
    }

    pub fn write_sales(&self, sales: &[Sale]) -> StoreResult<()> {
        self.collections.write_sales(sales)
    }

    pub fn read_orders(&self) -> StoreResult<Vec<Order>> {
        self.collections.read_orders()
    }

    pub fn write_orders(&self, orders: &[Order]) -> StoreResult<()> {
        self.collections.write_orders(orders)
    }

    pub fn read_stock_movements(&self) -> StoreResult<Vec<StockMovement>> {
        self.collections.read_stock_movements()
    }

    pub fn write_stock_movements(&self, movements: &[StockMovement]) -> StoreResult<()> {
        self.collections.write_stock_movements(movements)
    }
}
