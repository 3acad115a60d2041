use crate::api::parse_id;
use crate::attendance::Month;
use crate::attendance::aggregate;
use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::state::AppState;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PayrollQuery {
    /// Target month as `YYYY-MM`; defaults to the current month.
    pub month: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    #[schema(example = 2)]
    pub present_days: u32,
    #[schema(example = 3)]
    pub marked_days: u32,
    #[schema(example = 67)]
    pub attendance_percentage: u32,
    #[schema(example = 1000.0)]
    pub monthly_salary: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    #[schema(example = "2024-03")]
    pub month: String,
    pub employees: Vec<EmployeeSummary>,
    #[schema(example = 84)]
    pub average_attendance: u32,
    #[schema(example = 4500.0)]
    pub total_salary_payout: f64,
}

fn summarize(employee: &Employee, month: Month) -> EmployeeSummary {
    EmployeeSummary {
        id: employee.id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        present_days: aggregate::present_days(employee, month),
        marked_days: aggregate::marked_days(employee, month),
        attendance_percentage: aggregate::attendance_percentage(employee, month),
        monthly_salary: aggregate::monthly_salary(employee, month),
    }
}

fn resolve_month(raw: Option<&str>) -> Result<Month, ApiError> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(Month::of(chrono::Utc::now().date_naive())),
    }
}

/// Monthly Payroll Report
#[utoipa::path(
    get,
    path = "/api/payroll",
    params(PayrollQuery),
    responses(
        (status = 200, description = "Fleet-wide monthly summary", body = PayrollReport),
        (status = 400, description = "Invalid month", body = Object, example = json!({
            "message": "Invalid month format, expected YYYY-MM"
        }))
    ),
    tag = "Payroll"
)]
pub async fn payroll_report(
    state: web::Data<AppState>,
    query: web::Query<PayrollQuery>,
) -> Result<HttpResponse, ApiError> {
    let month = resolve_month(query.month.as_deref())?;
    let employees = state.employees.list()?;
    let report = PayrollReport {
        month: month.to_string(),
        employees: employees.iter().map(|e| summarize(e, month)).collect(),
        average_attendance: aggregate::average_attendance(&employees, month),
        total_salary_payout: aggregate::total_salary_payout(&employees, month),
    };
    Ok(HttpResponse::Ok().json(report))
}

/// Employee Payroll Summary
#[utoipa::path(
    get,
    path = "/api/payroll/{id}",
    params(
        ("id", Path, description = "Employee ID"),
        PayrollQuery
    ),
    responses(
        (status = 200, description = "One employee's monthly summary", body = EmployeeSummary),
        (status = 404, description = "Employee not found")
    ),
    tag = "Payroll"
)]
pub async fn employee_payroll(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PayrollQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Employee")?;
    let month = resolve_month(query.month.as_deref())?;
    let employee = state.employees.get(id)?;
    Ok(HttpResponse::Ok().json(summarize(&employee, month)))
}
