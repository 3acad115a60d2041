use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, error};

/// Abstract persistence collaborator: a document interface keyed by
/// (collection, id). Backends must tolerate ids that were never stored.
pub trait DocumentStore: Send + Sync {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;
    fn list(&self, collection: &str) -> Result<Vec<Value>>;
    fn put(&self, collection: &str, id: &str, doc: Value) -> Result<()>;
    /// Returns false when no document existed under the id.
    fn delete(&self, collection: &str, id: &str) -> Result<bool>;
}

type Collections = BTreeMap<String, BTreeMap<String, Value>>;

/// In-memory document collections mirrored write-through to a single JSON
/// file. The in-memory map is the source of truth; the file is a mirror and
/// mirror-write failures are logged, not retried.
pub struct JsonStore {
    collections: RwLock<Collections>,
    path: Option<PathBuf>,
}

impl JsonStore {
    /// Loads the store from `path`, starting empty when the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let collections = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt store file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Collections::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read store file {}", path.display()));
            }
        };
        Ok(Self {
            collections: RwLock::new(collections),
            path: Some(path),
        })
    }

    /// Volatile store with no file mirror.
    pub fn in_memory() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            path: None,
        }
    }

    fn mirror(&self, collections: &Collections) {
        let Some(path) = &self.path else { return };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                error!(error = %e, dir = %parent.display(), "failed to create store directory");
                return;
            }
        }
        let result = serde_json::to_vec_pretty(collections)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| std::fs::write(path, bytes).map_err(anyhow::Error::from));
        if let Err(e) = result {
            error!(error = %e, path = %path.display(), "failed to mirror store to disk");
        }
    }
}

impl DocumentStore for JsonStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    fn put(&self, collection: &str, id: &str, doc: Value) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        debug!(collection, id, "put document");
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        self.mirror(&collections);
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let removed = collections
            .get_mut(collection)
            .map(|docs| docs.remove(id).is_some())
            .unwrap_or(false);
        if removed {
            debug!(collection, id, "deleted document");
            self.mirror(&collections);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_get_roundtrip() {
        let store = JsonStore::in_memory();
        store.put("employees", "a", json!({"name": "John"})).unwrap();
        let doc = store.get("employees", "a").unwrap();
        assert_eq!(doc, Some(json!({"name": "John"})));
    }

    #[test]
    fn get_missing_is_none() {
        let store = JsonStore::in_memory();
        assert_eq!(store.get("employees", "nope").unwrap(), None);
        assert!(store.list("employees").unwrap().is_empty());
    }

    #[test]
    fn put_is_last_write_wins() {
        let store = JsonStore::in_memory();
        store.put("employees", "a", json!({"v": 1})).unwrap();
        store.put("employees", "a", json!({"v": 2})).unwrap();
        assert_eq!(store.get("employees", "a").unwrap(), Some(json!({"v": 2})));
        assert_eq!(store.list("employees").unwrap().len(), 1);
    }

    #[test]
    fn delete_reports_absence() {
        let store = JsonStore::in_memory();
        store.put("products", "p", json!({})).unwrap();
        assert!(store.delete("products", "p").unwrap());
        assert!(!store.delete("products", "p").unwrap());
    }

    #[test]
    fn reopen_reads_back_mirrored_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let store = JsonStore::open(&path).unwrap();
            store.put("employees", "a", json!({"name": "Jane"})).unwrap();
        }
        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("employees", "a").unwrap(),
            Some(json!({"name": "Jane"}))
        );
    }
}
