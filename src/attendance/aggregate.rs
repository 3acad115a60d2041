//! Month-scoped attendance statistics.
//!
//! A day with no entry at all ("unmarked") is excluded from every
//! denominator; only explicitly marked days count. Unmarked is not absent.

use crate::error::ApiError;
use crate::model::employee::Employee;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Month {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ApiError::validation("Invalid month format, expected YYYY-MM");
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Days in the month explicitly marked present.
pub fn present_days(employee: &Employee, month: Month) -> u32 {
    employee
        .attendance
        .iter()
        .filter(|(date, present)| month.contains(**date) && **present)
        .count() as u32
}

/// Days in the month with any entry, present or absent.
pub fn marked_days(employee: &Employee, month: Month) -> u32 {
    employee
        .attendance
        .keys()
        .filter(|date| month.contains(**date))
        .count() as u32
}

/// Present share of marked days, rounded half-up to a whole percent.
/// An employee with no marked days scores 0.
pub fn attendance_percentage(employee: &Employee, month: Month) -> u32 {
    let marked = marked_days(employee, month);
    if marked == 0 {
        return 0;
    }
    let present = present_days(employee, month);
    ((present as f64 / marked as f64) * 100.0).round() as u32
}

/// Salary earned in the month: present days times the daily wage.
pub fn monthly_salary(employee: &Employee, month: Month) -> f64 {
    present_days(employee, month) as f64 * employee.daily_wage
}

/// Mean attendance percentage over employees with at least one marked day in
/// the month. Employees with no marks are left out of both sides of the
/// division rather than dragged in as 0%. An empty fleet scores 0.
pub fn average_attendance(employees: &[Employee], month: Month) -> u32 {
    let percentages: Vec<u32> = employees
        .iter()
        .filter(|e| marked_days(e, month) > 0)
        .map(|e| attendance_percentage(e, month))
        .collect();
    if percentages.is_empty() {
        return 0;
    }
    let sum: u32 = percentages.iter().sum();
    (sum as f64 / percentages.len() as f64).round() as u32
}

/// Sum of monthly salaries across the whole fleet, independent of whether an
/// employee has any marked days.
pub fn total_salary_payout(employees: &[Employee], month: Month) -> f64 {
    employees.iter().map(|e| monthly_salary(e, month)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(wage: f64, entries: &[(&str, bool)]) -> Employee {
        let mut emp = Employee::new(
            "John Doe".into(),
            "Engineer".into(),
            "john@example.com".into(),
            "0123".into(),
            wage,
            None,
        )
        .unwrap();
        for (date, present) in entries {
            emp.attendance.insert(date.parse().unwrap(), *present);
        }
        emp
    }

    fn march() -> Month {
        "2024-03".parse().unwrap()
    }

    #[test]
    fn documented_scenario() {
        let emp = employee(
            500.0,
            &[
                ("2024-03-01", true),
                ("2024-03-02", true),
                ("2024-03-03", false),
            ],
        );
        assert_eq!(present_days(&emp, march()), 2);
        assert_eq!(marked_days(&emp, march()), 3);
        assert_eq!(attendance_percentage(&emp, march()), 67);
        assert_eq!(monthly_salary(&emp, march()), 1000.0);
    }

    #[test]
    fn present_never_exceeds_marked() {
        let emp = employee(
            100.0,
            &[
                ("2024-03-05", true),
                ("2024-03-06", false),
                ("2024-03-07", false),
            ],
        );
        assert!(present_days(&emp, march()) <= marked_days(&emp, march()));
    }

    #[test]
    fn other_months_are_excluded() {
        let emp = employee(
            100.0,
            &[
                ("2024-02-29", true),
                ("2024-03-01", true),
                ("2024-04-01", false),
            ],
        );
        assert_eq!(marked_days(&emp, march()), 1);
        assert_eq!(present_days(&emp, march()), 1);
        assert_eq!(attendance_percentage(&emp, march()), 100);
    }

    #[test]
    fn unmarked_days_do_not_enter_the_denominator() {
        // One present mark in a 31-day month: 100%, not 1/31.
        let emp = employee(100.0, &[("2024-03-15", true)]);
        assert_eq!(attendance_percentage(&emp, march()), 100);
    }

    #[test]
    fn no_marked_days_scores_zero() {
        let emp = employee(100.0, &[]);
        assert_eq!(attendance_percentage(&emp, march()), 0);
        assert_eq!(monthly_salary(&emp, march()), 0.0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 1 of 8 = 12.5 -> 13
        let emp = employee(
            100.0,
            &[
                ("2024-03-01", true),
                ("2024-03-02", false),
                ("2024-03-03", false),
                ("2024-03-04", false),
                ("2024-03-05", false),
                ("2024-03-06", false),
                ("2024-03-07", false),
                ("2024-03-08", false),
            ],
        );
        assert_eq!(attendance_percentage(&emp, march()), 13);
    }

    #[test]
    fn percentage_stays_in_bounds() {
        let all_absent = employee(100.0, &[("2024-03-01", false), ("2024-03-02", false)]);
        assert_eq!(attendance_percentage(&all_absent, march()), 0);
        let all_present = employee(100.0, &[("2024-03-01", true)]);
        assert_eq!(attendance_percentage(&all_present, march()), 100);
    }

    #[test]
    fn average_skips_employees_with_no_marks() {
        let fleet = vec![
            employee(100.0, &[("2024-03-01", true)]),  // 100%
            employee(100.0, &[("2024-03-01", false)]), // 0%
            employee(100.0, &[]),                      // unmarked, excluded
        ];
        assert_eq!(average_attendance(&fleet, march()), 50);
    }

    #[test]
    fn empty_fleet_averages_zero() {
        assert_eq!(average_attendance(&[], march()), 0);
    }

    #[test]
    fn payout_counts_every_employee() {
        let fleet = vec![
            employee(500.0, &[("2024-03-01", true), ("2024-03-02", true)]),
            employee(300.0, &[]),
            employee(200.0, &[("2024-03-01", true)]),
        ];
        assert_eq!(total_salary_payout(&fleet, march()), 1200.0);
    }

    #[test]
    fn month_parsing() {
        assert!("2024-00".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
        let m: Month = "2024-03".parse().unwrap();
        assert!(m.contains("2024-03-31".parse().unwrap()));
        assert!(!m.contains("2024-04-01".parse().unwrap()));
        assert_eq!(m.to_string(), "2024-03");
    }
}
