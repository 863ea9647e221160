//! Flat-file JSON implementation of the collection store
//!
//! One pretty-printed JSON array per collection under the configured data
//! directory, rewritten in full on every mutation. Writes go through a
//! sibling temp file plus rename so a crash mid-write never leaves a
//! half-serialized collection behind.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::{Material, Order, Product, ProductionRun, Recipe, Sale, StockMovement};

use super::{CollectionStore, StoreError, StoreResult};

const MATERIALS: &str = "materials";
const PRODUCTS: &str = "products";
const RECIPES: &str = "recipes";
const PRODUCTIONS: &str = "productions";
const SALES: &str = "sales";
const ORDERS: &str = "orders";
const STOCK_HISTORY: &str = "stock-history";

/// Collection store backed by JSON files in a single directory
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    /// Read a collection; a file that does not exist yet is the empty
    /// collection
    fn read<T: DeserializeOwned>(&self, collection: &'static str) -> StoreResult<Vec<T>> {
        let raw = match std::fs::read_to_string(self.path(collection)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    collection,
                    source: err,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt {
            collection,
            source: err,
        })
    }

    /// Read an append-only history collection, degrading a corrupt file to
    /// the empty collection instead of failing the request
    fn read_lenient<T: DeserializeOwned>(&self, collection: &'static str) -> StoreResult<Vec<T>> {
        match self.read(collection) {
            Ok(items) => Ok(items),
            Err(StoreError::Corrupt { collection, source }) => {
                tracing::warn!(collection, error = %source, "corrupt history file, reading as empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn write<T: Serialize>(&self, collection: &'static str, items: &[T]) -> StoreResult<()> {
        let io = |source| StoreError::Io { collection, source };

        let json = serde_json::to_string_pretty(items).map_err(|err| StoreError::Corrupt {
            collection,
            source: err,
        })?;

        let path = self.path(collection);
        let tmp = self.data_dir.join(format!("{collection}.json.tmp"));
        std::fs::write(&tmp, json).map_err(io)?;
        std::fs::rename(&tmp, &path).map_err(io)?;
        Ok(())
    }
}

impl CollectionStore for JsonFileStore {
    fn read_materials(&self) -> StoreResult<Vec<Material>> {
        self.read(MATERIALS)
    }

    fn write_materials(&self, materials: &[Material]) -> StoreResult<()> {
        self.write(MATERIALS, materials)
    }

    fn read_products(&self) -> StoreResult<Vec<Product>> {
        self.read(PRODUCTS)
    }

    fn write_products(&self, products: &[Product]) -> StoreResult<()> {
        self.write(PRODUCTS, products)
    }

    fn read_recipes(&self) -> StoreResult<Vec<Recipe>> {
        self.read(RECIPES)
    }

    fn write_recipes(&self, recipes: &[Recipe]) -> StoreResult<()> {
        self.write(RECIPES, recipes)
    }

    fn read_productions(&self) -> StoreResult<Vec<ProductionRun>> {
        self.read_lenient(PRODUCTIONS)
    }

    fn write_productions(&self, productions: &[ProductionRun]) -> StoreResult<()> {
        self.write(PRODUCTIONS, productions)
    }

    fn read_sales(&self) -> StoreResult<Vec<Sale>> {
        self.read(SALES)
    }

    fn write_sales(&self, sales: &[Sale]) -> StoreResult<()> {
        self.write(SALES, sales)
    }

    fn read_orders(&self) -> StoreResult<Vec<Order>> {
        self.read(ORDERS)
    }

    fn write_orders(&self, orders: &[Order]) -> StoreResult<()> {
        self.write(ORDERS, orders)
    }

    fn read_stock_movements(&self) -> StoreResult<Vec<StockMovement>> {
        self.read_lenient(STOCK_HISTORY)
    }

    fn write_stock_movements(&self, movements: &[StockMovement]) -> StoreResult<()> {
        self.write(STOCK_HISTORY, movements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn temp_store() -> (PathBuf, JsonFileStore) {
        let dir = std::env::temp_dir().join(format!("obsidian-store-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let store = JsonFileStore::new(&dir);
        (dir, store)
    }

    fn material(id: &str) -> Material {
        Material {
            id: id.to_string(),
            name: "vinyl sheet".to_string(),
            category: "vinyl".to_string(),
            stock: dec!(10),
            unit: "sheets".to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (dir, store) = temp_store();
        assert!(store.read_materials().unwrap().is_empty());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn write_then_read_round_trips() {
        let (dir, store) = temp_store();
        let materials = vec![material("mat-1"), material("mat-2")];
        store.write_materials(&materials).unwrap();
        assert_eq!(store.read_materials().unwrap(), materials);
        // no temp file left behind
        assert!(!dir.join("materials.json.tmp").exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupt_history_degrades_to_empty() {
        let (dir, store) = temp_store();
        std::fs::write(dir.join("stock-history.json"), "{not json").unwrap();
        assert!(store.read_stock_movements().unwrap().is_empty());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupt_entity_collection_is_an_error() {
        let (dir, store) = temp_store();
        std::fs::write(dir.join("materials.json"), "{not json").unwrap();
        assert!(matches!(
            store.read_materials(),
            Err(StoreError::Corrupt { .. })
        ));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
