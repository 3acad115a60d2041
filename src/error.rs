use actix_web::{HttpResponse, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Crate-wide error taxonomy. Everything a handler can fail with maps onto
/// one of these, and every variant renders as a JSON `{"message": ...}` body.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Malformed input: bad id, missing field, invalid date. Maps to 400.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// The named entity does not exist. Maps to 404.
    #[display(fmt = "{} not found", _0)]
    NotFound(&'static str),

    /// Store or collaborator failure. Maps to 500.
    #[display(fmt = "{}", _0)]
    Upstream(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_renders_entity_name() {
        let err = ApiError::NotFound("Employee");
        assert_eq!(err.to_string(), "Employee not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::validation("Date is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
