//! Month grid builder for the Gregorian layouts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::interval::weekday_index;

/// A render-ready month: its days in order plus the number of leading blank
/// cells needed to align day 1 under its weekday column (Monday-first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub days_in_month: u32,
    /// Leading blank cells, always in `0..=6`.
    pub start_padding: u32,
    pub days: Vec<NaiveDate>,
}

/// Build the grid for `(year, month0)` where `month0` is 0-based (0 =
/// January), matching the indexing the view layer uses.
///
/// `month0` outside `0..=11` is a caller contract violation and is
/// rejected. Leap years follow the standard Gregorian rule, which chrono
/// implements; February 2024 has 29 days, February 2025 has 28.
pub fn month_grid(year: i32, month0: u32) -> CoreResult<MonthGrid> {
    if month0 > 11 {
        return Err(CoreError::MonthOutOfRange(month0));
    }
    let month = month0 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::YearOutOfRange(year))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or(CoreError::YearOutOfRange(year))?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CoreError::YearOutOfRange(year))?
    };

    let days_in_month = next_first.signed_duration_since(first).num_days() as u32;

    Ok(MonthGrid {
        days_in_month,
        start_padding: weekday_index(first),
        days: first.iter_days().take(days_in_month as usize).collect(),
    })
}
