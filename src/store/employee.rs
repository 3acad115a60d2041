use crate::db::DocumentStore;
use crate::error::ApiError;
use crate::model::employee::{Employee, EmployeePatch};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const COLLECTION: &str = "employees";

/// Typed access to the `employees` collection. All mutations are
/// last-write-wins on the document; no history is retained.
#[derive(Clone)]
pub struct EmployeeStore {
    db: Arc<dyn DocumentStore>,
}

impl EmployeeStore {
    pub fn new(db: Arc<dyn DocumentStore>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.db.list(COLLECTION)?.into_iter().map(decode).collect()
    }

    pub fn get(&self, id: Uuid) -> Result<Employee, ApiError> {
        match self.db.get(COLLECTION, &id.to_string())? {
            Some(doc) => decode(doc),
            None => Err(ApiError::NotFound("Employee")),
        }
    }

    pub fn create(&self, employee: Employee) -> Result<Employee, ApiError> {
        self.put(&employee)?;
        debug!(id = %employee.id, name = %employee.name, "created employee");
        Ok(employee)
    }

    pub fn update(&self, id: Uuid, patch: EmployeePatch) -> Result<Employee, ApiError> {
        let mut employee = self.get(id)?;
        patch.apply(&mut employee)?;
        self.put(&employee)?;
        Ok(employee)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        if self.db.delete(COLLECTION, &id.to_string())? {
            Ok(())
        } else {
            Err(ApiError::NotFound("Employee"))
        }
    }

    /// Creates or overwrites the status for `(id, date)`.
    pub fn upsert_attendance(
        &self,
        id: Uuid,
        date: NaiveDate,
        present: bool,
    ) -> Result<Employee, ApiError> {
        let mut employee = self.get(id)?;
        employee.attendance.insert(date, present);
        self.put(&employee)?;
        Ok(employee)
    }

    fn put(&self, employee: &Employee) -> Result<(), ApiError> {
        let doc = serde_json::to_value(employee)
            .map_err(|e| ApiError::Upstream(format!("cannot encode employee: {e}")))?;
        self.db.put(COLLECTION, &employee.id.to_string(), doc)?;
        Ok(())
    }
}

fn decode(doc: Value) -> Result<Employee, ApiError> {
    serde_json::from_value(doc)
        .map_err(|e| ApiError::Upstream(format!("corrupt employee document: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonStore;
    use crate::model::employee::EmployeePatch;

    fn store() -> EmployeeStore {
        EmployeeStore::new(Arc::new(JsonStore::in_memory()))
    }

    fn sample() -> Employee {
        Employee::new(
            "John Doe".into(),
            "Engineer".into(),
            "john@example.com".into(),
            "0123".into(),
            500.0,
            None,
        )
        .unwrap()
    }

    #[test]
    fn create_then_get_roundtrip() {
        let store = store();
        let created = store.create(sample()).unwrap();
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.name, "John Doe");
        assert!(fetched.attendance.is_empty());
    }

    #[test]
    fn get_unknown_is_not_found() {
        assert!(matches!(
            store().get(Uuid::new_v4()),
            Err(ApiError::NotFound("Employee"))
        ));
    }

    #[test]
    fn upsert_attendance_overwrites_in_place() {
        let store = store();
        let emp = store.create(sample()).unwrap();
        let date: NaiveDate = "2024-03-01".parse().unwrap();
        store.upsert_attendance(emp.id, date, true).unwrap();
        let updated = store.upsert_attendance(emp.id, date, false).unwrap();
        assert_eq!(updated.attendance.len(), 1);
        assert_eq!(updated.status_on(date), Some(false));
    }

    #[test]
    fn update_applies_patch() {
        let store = store();
        let emp = store.create(sample()).unwrap();
        let patch = EmployeePatch {
            daily_wage: Some(750.0),
            ..Default::default()
        };
        let updated = store.update(emp.id, patch).unwrap();
        assert_eq!(updated.daily_wage, 750.0);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = store();
        let emp = store.create(sample()).unwrap();
        store.delete(emp.id).unwrap();
        assert!(store.get(emp.id).is_err());
        assert!(matches!(
            store.delete(emp.id),
            Err(ApiError::NotFound("Employee"))
        ));
    }
}
