pub mod attendance;
pub mod billing;
pub mod employee;
pub mod payroll;
pub mod product;

use crate::error::ApiError;
use chrono::NaiveDate;
use uuid::Uuid;

/// Path ids arrive as raw strings so a malformed id can map to 400 with the
/// usual `{"message"}` body instead of actix's default path-extractor error.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation(format!("Invalid {entity} ID format")))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Invalid date format, expected YYYY-MM-DD"))
}
