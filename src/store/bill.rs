use crate::db::DocumentStore;
use crate::error::ApiError;
use crate::model::bill::Bill;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const COLLECTION: &str = "bills";

/// Typed access to the `bills` collection. Bills are append-only history;
/// there is no update path.
#[derive(Clone)]
pub struct BillStore {
    db: Arc<dyn DocumentStore>,
}

impl BillStore {
    pub fn new(db: Arc<dyn DocumentStore>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Bill>, ApiError> {
        self.db.list(COLLECTION)?.into_iter().map(decode).collect()
    }

    pub fn create(&self, bill: &Bill) -> Result<(), ApiError> {
        let doc = serde_json::to_value(bill)
            .map_err(|e| ApiError::Upstream(format!("cannot encode bill: {e}")))?;
        self.db.put(COLLECTION, &bill.id.to_string(), doc)?;
        debug!(id = %bill.id, bill_no = %bill.bill_no, total = bill.total, "stored bill");
        Ok(())
    }
}

fn decode(doc: Value) -> Result<Bill, ApiError> {
    serde_json::from_value(doc).map_err(|e| ApiError::Upstream(format!("corrupt bill document: {e}")))
}
