use crate::db::DocumentStore;
use crate::error::ApiError;
use crate::model::product::{Product, ProductPatch};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const COLLECTION: &str = "products";

/// Starter catalog installed the first time the store comes up empty.
static SEED_PRODUCTS: Lazy<Vec<(&str, f64, u32, &str, &str, &str)>> = Lazy::new(|| {
    vec![
        (
            "Galvanized Steel Pipe",
            49.99,
            50,
            "Pipes",
            "HP-001",
            "Durable galvanized steel pipe for plumbing and construction.",
        ),
        (
            "PVC Pipe 2-inch",
            19.99,
            80,
            "Pipes",
            "HP-002",
            "Lightweight and corrosion-resistant PVC pipe.",
        ),
        (
            "Copper Pipe 1/2-inch",
            29.99,
            40,
            "Pipes",
            "HP-003",
            "High-quality copper pipe for water and gas systems.",
        ),
        (
            "Pipe Wrench 18-inch",
            24.99,
            30,
            "Tools",
            "HT-004",
            "Heavy-duty pipe wrench for gripping and turning pipes.",
        ),
        (
            "Teflon Tape (Plumber's Tape)",
            2.99,
            200,
            "Accessories",
            "HA-005",
            "Sealing tape for leak-proof pipe fittings.",
        ),
    ]
});

/// Typed access to the `products` collection.
#[derive(Clone)]
pub struct ProductStore {
    db: Arc<dyn DocumentStore>,
}

impl ProductStore {
    pub fn new(db: Arc<dyn DocumentStore>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.db.list(COLLECTION)?.into_iter().map(decode).collect()
    }

    pub fn get(&self, id: Uuid) -> Result<Product, ApiError> {
        match self.db.get(COLLECTION, &id.to_string())? {
            Some(doc) => decode(doc),
            None => Err(ApiError::NotFound("Product")),
        }
    }

    pub fn create(&self, product: Product) -> Result<Product, ApiError> {
        self.put(&product)?;
        debug!(id = %product.id, name = %product.name, "created product");
        Ok(product)
    }

    pub fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, ApiError> {
        let mut product = self.get(id)?;
        patch.apply(&mut product)?;
        self.put(&product)?;
        Ok(product)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        if self.db.delete(COLLECTION, &id.to_string())? {
            Ok(())
        } else {
            Err(ApiError::NotFound("Product"))
        }
    }

    /// Installs the starter catalog when the collection is empty; a no-op
    /// otherwise.
    pub fn seed_defaults(&self) -> Result<(), ApiError> {
        if !self.list()?.is_empty() {
            return Ok(());
        }
        for (name, price, quantity, category, sku, description) in SEED_PRODUCTS.iter() {
            let product = Product::new(
                (*name).to_string(),
                *price,
                *quantity,
                (*category).to_string(),
                Some((*sku).to_string()),
                None,
                Some((*description).to_string()),
            )?;
            self.put(&product)?;
        }
        info!(count = SEED_PRODUCTS.len(), "seeded product catalog");
        Ok(())
    }

    fn put(&self, product: &Product) -> Result<(), ApiError> {
        let doc = serde_json::to_value(product)
            .map_err(|e| ApiError::Upstream(format!("cannot encode product: {e}")))?;
        self.db.put(COLLECTION, &product.id.to_string(), doc)?;
        Ok(())
    }
}

fn decode(doc: Value) -> Result<Product, ApiError> {
    serde_json::from_value(doc)
        .map_err(|e| ApiError::Upstream(format!("corrupt product document: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonStore;

    fn store() -> ProductStore {
        ProductStore::new(Arc::new(JsonStore::in_memory()))
    }

    #[test]
    fn seeding_is_idempotent() {
        let store = store();
        store.seed_defaults().unwrap();
        let first = store.list().unwrap();
        store.seed_defaults().unwrap();
        assert_eq!(store.list().unwrap().len(), first.len());
        assert_eq!(first.len(), SEED_PRODUCTS.len());
    }

    #[test]
    fn seeding_skips_a_populated_catalog() {
        let store = store();
        let product = Product::new(
            "Solo".into(),
            1.0,
            1,
            "Misc".into(),
            None,
            None,
            None,
        )
        .unwrap();
        store.create(product).unwrap();
        store.seed_defaults().unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn crud_roundtrip() {
        let store = store();
        let product = Product::new(
            "Pipe".into(),
            10.0,
            5,
            "Pipes".into(),
            None,
            None,
            None,
        )
        .unwrap();
        let created = store.create(product).unwrap();
        let patch = ProductPatch {
            price: Some(12.5),
            ..Default::default()
        };
        let updated = store.update(created.id, patch).unwrap();
        assert_eq!(updated.price, 12.5);
        store.delete(created.id).unwrap();
        assert!(store.get(created.id).is_err());
    }
}
