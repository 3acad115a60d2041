use crate::billing::Cart;
use crate::error::ApiError;
use crate::model::bill::{Bill, BillDraft};
use crate::model::notification::Notification;
use crate::state::AppState;
use actix_web::{HttpResponse, web};

/// Create Bill
///
/// Validates the draft server-side and recomputes the total from the line
/// price snapshots; the client-supplied total, if any, is ignored.
#[utoipa::path(
    post,
    path = "/api/bills",
    request_body = BillDraft,
    responses(
        (status = 201, description = "Bill stored", body = Bill),
        (status = 400, description = "Draft not submittable", body = Object, example = json!({
            "message": "Bill requires all customer fields and at least one item"
        }))
    ),
    tag = "Billing"
)]
pub async fn create_bill(
    state: web::Data<AppState>,
    payload: web::Json<BillDraft>,
) -> Result<HttpResponse, ApiError> {
    let draft = payload.into_inner();
    if !draft.is_submittable() {
        return Err(ApiError::validation(
            "Bill requires all customer fields and at least one item",
        ));
    }
    if draft.items.iter().any(|line| line.quantity < 1) {
        return Err(ApiError::validation("Line quantity must be at least 1"));
    }

    let total = Cart::from(draft.items.clone()).total();
    let bill = Bill::from_draft(draft, total);
    state.bills.create(&bill)?;
    state
        .notifier
        .notify(Notification::success(format!("Bill {} saved", bill.bill_no)));
    Ok(HttpResponse::Created().json(bill))
}

/// List Bills
#[utoipa::path(
    get,
    path = "/api/bills",
    responses((status = 200, description = "Stored bills", body = [Bill])),
    tag = "Billing"
)]
pub async fn list_bills(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.bills.list()?))
}
