use crate::api::attendance::AttendanceUpdate;
use crate::api::payroll::{EmployeeSummary, PayrollReport};
use crate::api::product::{CatalogStats, CreateProduct};
use crate::model::bill::{Bill, BillDraft, CartLine};
use crate::model::employee::{Employee, EmployeePatch};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::product::{Product, ProductPatch};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffdesk API",
        version = "1.0.0",
        description = r#"
## Staffdesk

Small business-administration backend: employee attendance and payroll
tracking, a product catalog, and a point-of-sale billing flow over a JSON
document store.

### Key Features
- **Employee Management** — create (with image upload), update, list, delete
- **Attendance** — per-day present/absent marking with toggle semantics
- **Payroll** — month-scoped attendance percentages and salary derivation
- **Catalog** — product CRUD plus stock/value totals
- **Billing** — validated bill drafts with price-snapshot totals

### Response Format
JSON throughout; errors always carry a `{"message": ...}` body.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::update_attendance,
        crate::api::attendance::current_notification,

        crate::api::payroll::payroll_report,
        crate::api::payroll::employee_payroll,

        crate::api::product::list_products,
        crate::api::product::get_product,
        crate::api::product::create_product,
        crate::api::product::update_product,
        crate::api::product::delete_product,
        crate::api::product::catalog_stats,

        crate::api::billing::create_bill,
        crate::api::billing::list_bills
    ),
    components(
        schemas(
            Employee,
            EmployeePatch,
            AttendanceUpdate,
            EmployeeSummary,
            PayrollReport,
            Product,
            ProductPatch,
            CreateProduct,
            CatalogStats,
            CartLine,
            BillDraft,
            Bill,
            Notification,
            NotificationKind
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance marking APIs"),
        (name = "Payroll", description = "Monthly aggregation APIs"),
        (name = "Catalog", description = "Product catalog APIs"),
        (name = "Billing", description = "Billing and bill history APIs"),
    )
)]
pub struct ApiDoc;
