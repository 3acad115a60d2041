use crate::api::parse_id;
use crate::error::ApiError;
use crate::model::employee::{Employee, EmployeePatch};
use crate::state::AppState;
use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::error;

/// Multipart payload for employee creation: the admin form posts text
/// fields plus the profile image file.
#[derive(MultipartForm)]
pub struct CreateEmployeeForm {
    pub name: Text<String>,
    pub email: Text<String>,
    #[multipart(rename = "mobileNo")]
    pub mobile_no: Text<String>,
    pub position: Text<String>,
    #[multipart(rename = "dailyWage")]
    pub daily_wage: Text<f64>,
    pub image: Option<TempFile>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing field or image upload failed", body = Object, example = json!({
            "message": "Image upload failed"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<CreateEmployeeForm>,
) -> Result<HttpResponse, ApiError> {
    let Some(image) = form.image else {
        return Err(ApiError::validation("Image file is required"));
    };
    let bytes = std::fs::read(image.file.path())
        .map_err(|e| ApiError::Upstream(format!("cannot read uploaded file: {e}")))?;
    let filename = image.file_name.unwrap_or_else(|| "image".to_string());

    let url = state.uploader.upload(bytes, &filename).await.map_err(|e| {
        error!(error = %e, filename, "image upload failed");
        ApiError::validation("Image upload failed")
    })?;

    let employee = Employee::new(
        form.name.into_inner(),
        form.position.into_inner(),
        form.email.into_inner(),
        form.mobile_no.into_inner(),
        form.daily_wage.into_inner(),
        Some(url),
    )?;
    let saved = state.employees.create(employee)?;
    Ok(HttpResponse::Created().json(saved))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let employees = state.employees.list()?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Employee")?;
    let employee = state.employees.get(id)?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<EmployeePatch>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Employee")?;
    let employee = state.employees.update(id, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Employee")?;
    state.employees.delete(id)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}
