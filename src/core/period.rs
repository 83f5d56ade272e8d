use chrono::NaiveDate;

use crate::core::{AppError, Result};

/// Commission-period calendar.
///
/// A commission month does not follow the calendar month: invoices paid from
/// the 26th of the prior month through the 25th of the current month belong
/// to the current commission month.
pub struct CommissionPeriod;

/// English month names, in calendar order, used as keys in annual reports.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl CommissionPeriod {
    /// Start and end dates (inclusive) for commission month `month` (1-12)
    /// of `year`: 26th of the prior month through the 25th of `month`.
    pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Month must be between 1 and 12, got: {}",
                month
            )));
        }

        let (start_year, start_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };

        let start = NaiveDate::from_ymd_opt(start_year, start_month, 26)
            .ok_or_else(|| AppError::internal("Invalid period start date"))?;
        let end = NaiveDate::from_ymd_opt(year, month, 25)
            .ok_or_else(|| AppError::internal("Invalid period end date"))?;

        Ok((start, end))
    }

    /// Name of commission month `month` (1-12).
    pub fn month_name(month: u32) -> &'static str {
        MONTH_NAMES[(month.saturating_sub(1) as usize).min(11)]
    }
}
