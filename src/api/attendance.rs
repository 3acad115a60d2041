use crate::api::{parse_date, parse_id};
use crate::attendance::toggle;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

/// Body for the attendance endpoint. `date` is mandatory; when `status` is
/// omitted the day's status is toggled instead of set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceUpdate {
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    #[schema(example = true, nullable = true)]
    pub status: Option<bool>,
}

/// Update Attendance
#[utoipa::path(
    put,
    path = "/api/employees/{id}/attendance",
    params(("id", Path, description = "Employee ID")),
    request_body = AttendanceUpdate,
    responses(
        (status = 200, description = "Attendance updated", body = Object, example = json!({
            "message": "Attendance updated",
            "employee": { "id": "...", "attendance": { "2024-03-01": true } }
        })),
        (status = 400, description = "Bad id or missing date", body = Object, example = json!({
            "message": "Date is required"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<AttendanceUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Employee")?;
    // Resolve the employee before inspecting the body so an unknown id is a
    // 404 even when the date is also missing.
    state.employees.get(id)?;

    let raw_date = payload
        .date
        .as_deref()
        .ok_or_else(|| ApiError::validation("Date is required"))?;
    let date = parse_date(raw_date)?;

    let employee = match payload.status {
        Some(present) => toggle::set_status(&state.employees, &state.notifier, id, date, present)?,
        None => toggle::toggle(&state.employees, &state.notifier, id, date)?,
    };

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance updated",
        "employee": employee
    })))
}

/// Current Notification
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Active toast, or null once dismissed", body = Object, example = json!({
            "message": "Marked John Doe as present for 01 Mar, 2024",
            "kind": "success"
        }))
    ),
    tag = "Attendance"
)]
pub async fn current_notification(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.notifier.current())
}
