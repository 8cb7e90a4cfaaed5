//! The analytics snapshot generator.
//!
//! Projects the fixed baseline counts forward to a target date with a seeded
//! pseudo-random walk. Pure and total: every input instant maps to a fully
//! populated snapshot, identical on every call for the same target date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::baseline::{
    BASELINE_MONTH, BASELINE_YEAR, MOBILE_APPS, PLATFORMS, PlatformBaseline,
};
use crate::calendar::{
    data_date_for, days_since_baseline, first_of_month, spanish_display_date,
};
use crate::rand::seeded_random;

/// Per-platform unit counts for one data date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUnits {
    pub platform: String,
    /// Units accumulated within the data date's calendar month.
    pub daily_units: i64,
    /// Cumulative units since launch.
    pub total_units: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotal {
    pub daily: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppUnits {
    pub platform: String,
    pub total_units: i64,
}

/// The full computed analytics result for one data date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// ISO `YYYY-MM-DD` form of the data date.
    pub date: String,
    /// Localized header label, e.g. "AL 29 DE ENERO".
    pub display_date: String,
    pub platforms: Vec<PlatformUnits>,
    pub grand_total: GrandTotal,
    pub mobile_apps: Vec<MobileAppUnits>,
    pub mobile_total: i64,
}

/// Body returned by the scheduled-refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReceipt {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub display_date: String,
    pub grand_total: i64,
}

/// One simulated day's unit increment for a platform: the monthly target
/// averaged over 30 days, varied by +/-30% from the seeded hash, rounded,
/// and clamped to >= 0 so totals never decrease.
fn daily_increment(platform: &PlatformBaseline, day_index: i64) -> i64 {
    let daily_average = platform.monthly_target as f64 / 30.0;
    let seed = i64::from(platform.name.as_bytes()[0]) * 1000 + day_index;
    let variation = (seeded_random(seed) - 0.5) * 0.6;
    let increment = (daily_average * (1.0 + variation)).round() as i64;
    increment.max(0)
}

/// Computes the snapshot for an already-resolved data date.
///
/// The walk only runs forward: a date at or before the baseline yields the
/// baseline values unchanged. The monthly counter accumulates only the days
/// whose offsets fall inside the target date's own calendar month, which
/// resets it at every month start without restarting the cumulative walk.
pub fn snapshot_for_date(data_date: NaiveDate) -> AnalyticsSnapshot {
    let days_diff = days_since_baseline(data_date);
    let in_baseline_month =
        data_date.year() == BASELINE_YEAR && data_date.month() == BASELINE_MONTH;
    let first_of_month_diff = days_since_baseline(first_of_month(data_date));

    let mut platforms = Vec::with_capacity(PLATFORMS.len());
    for platform in &PLATFORMS {
        let mut total_units = platform.total_units;
        let mut daily_units = if in_baseline_month {
            platform.daily_units
        } else {
            0
        };

        if days_diff > 0 {
            for i in 1..=days_diff {
                let increment = daily_increment(platform, i);
                total_units += increment;
                // Days before the target month's first day stay out of the
                // monthly counter.
                if in_baseline_month || i > first_of_month_diff {
                    daily_units += increment;
                }
            }
        }

        platforms.push(PlatformUnits {
            platform: platform.name.to_string(),
            daily_units,
            total_units,
        });
    }

    let grand_total = GrandTotal {
        daily: platforms.iter().map(|p| p.daily_units).sum(),
        total: platforms.iter().map(|p| p.total_units).sum(),
    };

    let mobile_apps: Vec<MobileAppUnits> = MOBILE_APPS
        .iter()
        .map(|app| {
            let mut total_units = app.total_units;
            if days_diff > 0 {
                // One increment of 1 or 2 units per fully elapsed week;
                // partial weeks contribute nothing.
                let weeks_passed = days_diff / 7;
                for week in 0..weeks_passed {
                    let seed = i64::from(app.name.as_bytes()[0]) * 100 + week;
                    total_units += if seeded_random(seed) > 0.5 { 2 } else { 1 };
                }
            }
            MobileAppUnits {
                platform: app.name.to_string(),
                total_units,
            }
        })
        .collect();

    let mobile_total = mobile_apps.iter().map(|app| app.total_units).sum();

    AnalyticsSnapshot {
        date: data_date.format("%Y-%m-%d").to_string(),
        display_date: spanish_display_date(data_date),
        platforms,
        grand_total,
        mobile_apps,
        mobile_total,
    }
}

/// Computes the snapshot for the data date implied by `reference_instant`
/// (one day behind Mexico City wall-clock time).
pub fn snapshot_at(reference_instant: DateTime<Utc>) -> AnalyticsSnapshot {
    snapshot_for_date(data_date_for(reference_instant))
}

/// Convenience wrapper over [`snapshot_at`] for the invocation instant.
pub fn current_snapshot() -> AnalyticsSnapshot {
    snapshot_at(Utc::now())
}

/// Thousands-grouped rendering of a unit count, e.g. 81834 -> "81,834".
pub fn format_units(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
