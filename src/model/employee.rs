use crate::error::ApiError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "7f9c2ba4-e88f-4a5c-9c7d-1f2e3d4c5b6a",
        "name": "John Doe",
        "position": "Software Engineer",
        "email": "john.doe@company.com",
        "mobileNo": "+8801712345678",
        "dailyWage": 500.0,
        "image": "/uploads/7f9c2ba4.jpg",
        "attendance": { "2024-03-01": true, "2024-03-03": false }
    })
)]
pub struct Employee {
    pub id: Uuid,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Software Engineer")]
    pub position: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "+8801712345678")]
    pub mobile_no: String,

    /// Wage earned for each day marked present.
    #[schema(example = 500.0)]
    pub daily_wage: f64,

    #[schema(nullable = true)]
    pub image: Option<String>,

    /// Date-keyed present/absent entries. A missing date is "unmarked",
    /// which is not the same as an explicit false ("absent").
    #[schema(value_type = Object)]
    #[serde(default)]
    pub attendance: BTreeMap<NaiveDate, bool>,
}

impl Employee {
    /// Validated construction; the attendance map always starts empty.
    pub fn new(
        name: String,
        position: String,
        email: String,
        mobile_no: String,
        daily_wage: f64,
        image: Option<String>,
    ) -> Result<Self, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Name is required"));
        }
        if position.trim().is_empty() {
            return Err(ApiError::validation("Position is required"));
        }
        if !(daily_wage >= 0.0) {
            return Err(ApiError::validation("Daily wage must be non-negative"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            position,
            email,
            mobile_no,
            daily_wage,
            image,
            attendance: BTreeMap::new(),
        })
    }

    /// Status for a date: `None` when the day is unmarked.
    pub fn status_on(&self, date: NaiveDate) -> Option<bool> {
        self.attendance.get(&date).copied()
    }
}

/// Partial update applied onto an existing employee record.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub daily_wage: Option<f64>,
    pub image: Option<String>,
}

impl EmployeePatch {
    pub fn apply(self, employee: &mut Employee) -> Result<(), ApiError> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(ApiError::validation("Name is required"));
            }
            employee.name = name;
        }
        if let Some(position) = self.position {
            if position.trim().is_empty() {
                return Err(ApiError::validation("Position is required"));
            }
            employee.position = position;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(mobile_no) = self.mobile_no {
            employee.mobile_no = mobile_no;
        }
        if let Some(daily_wage) = self.daily_wage {
            if !(daily_wage >= 0.0) {
                return Err(ApiError::validation("Daily wage must be non-negative"));
            }
            employee.daily_wage = daily_wage;
        }
        if let Some(image) = self.image {
            employee.image = Some(image);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(wage: f64) -> Result<Employee, ApiError> {
        Employee::new(
            "John Doe".into(),
            "Engineer".into(),
            "john@example.com".into(),
            "0123456789".into(),
            wage,
            None,
        )
    }

    #[test]
    fn rejects_negative_wage() {
        assert!(employee(-1.0).is_err());
        assert!(employee(0.0).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = Employee::new(
            "   ".into(),
            "Engineer".into(),
            String::new(),
            String::new(),
            100.0,
            None,
        );
        assert!(err.is_err());
    }

    #[test]
    fn attendance_keys_serialize_as_iso_dates() {
        let mut emp = employee(500.0).unwrap();
        emp.attendance
            .insert(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), true);
        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(value["attendance"]["2024-03-01"], serde_json::json!(true));
        assert_eq!(value["dailyWage"], serde_json::json!(500.0));
    }

    #[test]
    fn patch_rejects_negative_wage_without_mutating() {
        let mut emp = employee(500.0).unwrap();
        let patch = EmployeePatch {
            daily_wage: Some(-5.0),
            ..Default::default()
        };
        assert!(patch.apply(&mut emp).is_err());
        assert_eq!(emp.daily_wage, 500.0);
    }
}
