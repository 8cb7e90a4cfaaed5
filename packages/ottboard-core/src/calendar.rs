//! Civil-date handling pinned to the Mexico City calendar.
//!
//! Upstream figures lag by one day, so the dashboard always reports on
//! "yesterday" relative to wall-clock time in Mexico City. All date math
//! happens on `NaiveDate` values in that calendar; the host timezone never
//! leaks in.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};

use crate::baseline::{BASELINE_DAY, BASELINE_MONTH, BASELINE_YEAR, MONTH_NAMES_ES};

/// Mexico City runs UTC-6 year-round since DST was abolished in 2022.
pub fn mexico_city_offset() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).expect("offset within +/-24h")
}

pub fn baseline_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(BASELINE_YEAR, BASELINE_MONTH, BASELINE_DAY)
        .expect("baseline date is a valid calendar date")
}

/// The civil date the dashboard reports on: one calendar day behind the
/// given instant in Mexico City local time.
pub fn data_date_for(now: DateTime<Utc>) -> NaiveDate {
    let local = now.with_timezone(&mexico_city_offset());
    local
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap_or(NaiveDate::MIN)
}

/// Whole days between `date` and the baseline date. Negative when `date`
/// precedes the baseline, zero when equal.
pub fn days_since_baseline(date: NaiveDate) -> i64 {
    (date - baseline_date()).num_days()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("day 1 exists in every month")
}

/// Formats the label shown on the dashboard header, e.g. "AL 29 DE ENERO".
pub fn spanish_display_date(date: NaiveDate) -> String {
    let month = MONTH_NAMES_ES[date.month0() as usize];
    format!("AL {} DE {}", date.day(), month)
}
