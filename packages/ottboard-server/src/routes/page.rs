use crate::error::AppError;
use axum::response::{Html, IntoResponse};
use chrono::{DateTime, Utc};
use ottboard_core::{AnalyticsSnapshot, format_units, mexico_city_offset, snapshot_at};
use std::fmt::Write;

pub(crate) async fn dashboard_handler() -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let data = snapshot_at(now);
    let page = render_dashboard(&data, now)?;
    Ok(Html(page))
}

/// Renders the dashboard page: a daily card, a cumulative card, the mobile
/// apps card and the update notes. Platform and app names come from static
/// tables, so no HTML escaping is involved.
fn render_dashboard(data: &AnalyticsSnapshot, now: DateTime<Utc>) -> Result<String, AppError> {
    let mut page = String::with_capacity(4096);

    write!(
        page,
        "<!DOCTYPE html>\
         <html lang=\"es\"><head><meta charset=\"utf-8\">\
         <title>OTT Analytics Dashboard</title>\
         <style>\
         body{{font-family:sans-serif;background:#f3f4f6;margin:0;padding:2rem}}\
         main{{max-width:72rem;margin:0 auto}}\
         h1{{text-align:center;color:#1f2937}}\
         .grid{{display:grid;grid-template-columns:1fr 1fr;gap:2rem}}\
         .card{{background:#fff;border-radius:.5rem;box-shadow:0 4px 6px rgba(0,0,0,.1);overflow:hidden}}\
         .card header{{background:#9333ea;color:#fff;text-align:center;padding:.75rem;font-weight:bold}}\
         .card.light header{{background:#c084fc}}\
         table{{width:100%;border-collapse:collapse}}\
         th,td{{padding:.75rem 1rem;text-align:left}}\
         td:last-child,th:last-child{{text-align:right}}\
         tr:nth-child(even){{background:#f9fafb}}\
         tr.total{{border-top:2px solid #d1d5db;background:#f3f4f6;font-weight:bold}}\
         .mobile{{max-width:28rem;margin:2rem auto 0}}\
         footer{{margin-top:2rem;text-align:center;color:#6b7280;font-size:.875rem}}\
         </style></head><body><main>\
         <h1>OTT Analytics Dashboard</h1><div class=\"grid\">"
    )?;

    let daily_rows: Vec<(&str, i64)> = data
        .platforms
        .iter()
        .map(|p| (p.platform.as_str(), p.daily_units))
        .collect();
    write_card(
        &mut page,
        &data.display_date,
        &daily_rows,
        Some(data.grand_total.daily),
        false,
    )?;

    let total_rows: Vec<(&str, i64)> = data
        .platforms
        .iter()
        .map(|p| (p.platform.as_str(), p.total_units))
        .collect();
    write_card(&mut page, "TOTAL", &total_rows, Some(data.grand_total.total), true)?;

    write!(page, "</div><div class=\"mobile\">")?;
    let mobile_rows: Vec<(&str, i64)> = data
        .mobile_apps
        .iter()
        .map(|app| (app.platform.as_str(), app.total_units))
        .collect();
    write_card(&mut page, "APLICACIONES MÓVILES", &mobile_rows, None, true)?;

    let updated_at = now
        .with_timezone(&mexico_city_offset())
        .format("%d/%m/%Y %H:%M:%S");
    write!(
        page,
        "</div><footer>\
         <p>Los datos se actualizan automáticamente. Última actualización: {updated_at}</p>\
         <p>Los datos mostrados tienen un día de retraso</p>\
         </footer></main></body></html>"
    )?;

    Ok(page)
}

fn write_card(
    out: &mut String,
    title: &str,
    rows: &[(&str, i64)],
    total: Option<i64>,
    light: bool,
) -> Result<(), AppError> {
    let class = if light { "card light" } else { "card" };
    write!(
        out,
        "<div class=\"{class}\"><header>{title}</header><table>\
         <thead><tr><th>PLATAFORMA</th><th>UNIDADES TOTALES</th></tr></thead><tbody>"
    )?;
    for (name, units) in rows {
        write!(
            out,
            "<tr><td>{name}</td><td>{}</td></tr>",
            format_units(*units)
        )?;
    }
    if let Some(total) = total {
        write!(
            out,
            "<tr class=\"total\"><td>TOTAL</td><td>{}</td></tr>",
            format_units(total)
        )?;
    }
    write!(out, "</tbody></table></div>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ottboard_core::snapshot_for_date;

    #[test]
    fn test_render_contains_all_tables() {
        let data = snapshot_for_date(chrono::NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());
        let now = Utc.with_ymd_and_hms(2026, 1, 30, 12, 0, 0).unwrap();
        let page = render_dashboard(&data, now).unwrap();

        assert!(page.contains("OTT Analytics Dashboard"));
        assert!(page.contains("AL 29 DE ENERO"));
        for name in ["ROKU", "FIRE TV", "GOOGLE OS", "LG", "TVOS", "SAMSUNG"] {
            assert!(page.contains(name), "{name} missing");
        }
        assert!(page.contains("APLICACIONES MÓVILES"));
        assert!(page.contains("El Horizonte iOS"));
        // Grouped baseline figures.
        assert!(page.contains("81,834"));
        assert!(page.contains("1,999"));
        assert!(page.contains("Los datos mostrados tienen un día de retraso"));
    }

    #[test]
    fn test_render_shows_update_instant_in_mexico_city() {
        let data = snapshot_for_date(chrono::NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());
        // 02:00 UTC on Jan 31 is 20:00 on Jan 30 local.
        let now = Utc.with_ymd_and_hms(2026, 1, 31, 2, 0, 0).unwrap();
        let page = render_dashboard(&data, now).unwrap();
        assert!(page.contains("30/01/2026 20:00:00"));
    }

    #[test]
    fn test_mobile_card_has_no_total_row() {
        let data = snapshot_for_date(chrono::NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());
        let now = Utc.with_ymd_and_hms(2026, 1, 30, 12, 0, 0).unwrap();
        let page = render_dashboard(&data, now).unwrap();
        // Two TOTAL footer rows: daily card and cumulative card.
        assert_eq!(page.matches("<tr class=\"total\">").count(), 2);
    }
}
