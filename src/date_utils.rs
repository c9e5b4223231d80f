//! Shared date helpers (e.g. Unix epoch).

use chrono::NaiveDate;

/// Unix epoch (1970-01-01) as NaiveDate. Used to render Date32 cell values.
#[inline]
pub(crate) fn epoch_naive_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 is a valid date")
}

/// Render a Date32 value (days since epoch) as `YYYY-MM-DD`.
pub(crate) fn days_to_iso_date(days: i32) -> String {
    let date = epoch_naive_date() + chrono::Duration::days(days as i64);
    date.format("%Y-%m-%d").to_string()
}
