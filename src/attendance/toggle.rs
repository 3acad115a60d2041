//! Single-day attendance mutation with its notification side effect.

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::model::notification::Notification;
use crate::notify::Notifier;
use crate::store::employee::EmployeeStore;
use chrono::NaiveDate;
use uuid::Uuid;

fn announce(notifier: &Notifier, employee: &Employee, date: NaiveDate, present: bool) {
    let state = if present { "present" } else { "absent" };
    notifier.notify(Notification::success(format!(
        "Marked {} as {} for {}",
        employee.name,
        state,
        date.format("%d %b, %Y")
    )));
}

/// Flips the status for `(employee_id, date)`, treating an unmarked day as
/// absent, and writes the result back. Toggling twice restores the original
/// status.
pub fn toggle(
    store: &EmployeeStore,
    notifier: &Notifier,
    employee_id: Uuid,
    date: NaiveDate,
) -> Result<Employee, ApiError> {
    let employee = store.get(employee_id)?;
    let next = !employee.status_on(date).unwrap_or(false);
    let updated = store.upsert_attendance(employee_id, date, next)?;
    announce(notifier, &updated, date, next);
    Ok(updated)
}

/// Sets an explicit status for `(employee_id, date)`, last write wins.
pub fn set_status(
    store: &EmployeeStore,
    notifier: &Notifier,
    employee_id: Uuid,
    date: NaiveDate,
    present: bool,
) -> Result<Employee, ApiError> {
    let updated = store.upsert_attendance(employee_id, date, present)?;
    announce(notifier, &updated, date, present);
    Ok(updated)
}
