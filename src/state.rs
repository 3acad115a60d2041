use crate::db::DocumentStore;
use crate::notify::Notifier;
use crate::store::{BillStore, EmployeeStore, ProductStore};
use crate::upload::ImageUploader;
use std::sync::Arc;

/// Shared application state: typed stores over one document-store port plus
/// the notification slot and the image-upload collaborator. Constructed once
/// per process and handed to handlers through `web::Data`.
pub struct AppState {
    pub employees: EmployeeStore,
    pub products: ProductStore,
    pub bills: BillStore,
    pub notifier: Notifier,
    pub uploader: ImageUploader,
}

impl AppState {
    pub fn new(db: Arc<dyn DocumentStore>, uploader: ImageUploader) -> Self {
        Self {
            employees: EmployeeStore::new(db.clone()),
            products: ProductStore::new(db.clone()),
            bills: BillStore::new(db),
            notifier: Notifier::new(),
            uploader,
        }
    }
}
