pub mod baseline;
pub mod calendar;
pub mod rand;
pub mod snapshot;

pub use baseline::{MobileAppBaseline, PlatformBaseline, MOBILE_APPS, PLATFORMS};
pub use calendar::{data_date_for, days_since_baseline, mexico_city_offset, spanish_display_date};
pub use snapshot::{
    current_snapshot, format_units, snapshot_at, snapshot_for_date, AnalyticsSnapshot, GrandTotal,
    MobileAppUnits, PlatformUnits, RefreshReceipt,
};
