use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ottboard_core::{AnalyticsSnapshot, current_snapshot, format_units, snapshot_for_date};
use ottboard_sdk::OttboardClient;

#[derive(Parser)]
#[command(name = "ottboard-cli")]
#[command(about = "OTT analytics dashboard client")]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current snapshot and print the dashboard tables
    Analytics,
    /// Trigger the scheduled refresh endpoint
    Refresh {
        /// Shared secret for the refresh endpoint
        #[arg(long)]
        secret: Option<String>,
    },
    /// Compute a snapshot locally, without a server
    Snapshot {
        /// Data date (YYYY-MM-DD); defaults to yesterday in Mexico City
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analytics => {
            let client = OttboardClient::new(&cli.server);
            match client.get_analytics().await {
                Ok(data) => print_dashboard(&data),
                Err(e) => {
                    eprintln!("❌ Failed to fetch analytics: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Refresh { secret } => {
            let mut client = OttboardClient::new(&cli.server);
            if let Some(secret) = secret {
                client = client.with_cron_secret(&secret);
            }
            match client.trigger_refresh().await {
                Ok(receipt) => {
                    println!("🔄 {} ({})", receipt.message, receipt.display_date);
                    println!("   Grand total: {}", format_units(receipt.grand_total));
                }
                Err(e) => {
                    eprintln!("❌ Failed to trigger refresh: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Snapshot { date } => {
            let data = match date {
                Some(date) => snapshot_for_date(date),
                None => current_snapshot(),
            };
            let json = serde_json::to_string_pretty(&data).context("serialize snapshot")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_dashboard(data: &AnalyticsSnapshot) {
    println!("📊 {}", data.display_date);
    for platform in &data.platforms {
        println!(
            "  {:<12} {:>10}",
            platform.platform,
            format_units(platform.daily_units)
        );
    }
    println!(
        "  {:<12} {:>10}",
        "TOTAL",
        format_units(data.grand_total.daily)
    );

    println!();
    println!("📈 TOTAL");
    for platform in &data.platforms {
        println!(
            "  {:<12} {:>10}",
            platform.platform,
            format_units(platform.total_units)
        );
    }
    println!(
        "  {:<12} {:>10}",
        "TOTAL",
        format_units(data.grand_total.total)
    );

    println!();
    println!("📱 APLICACIONES MÓVILES");
    for app in &data.mobile_apps {
        println!("  {:<32} {:>8}", app.platform, format_units(app.total_units));
    }
    println!("  {:<32} {:>8}", "TOTAL", format_units(data.mobile_total));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_server() {
        let cli = Cli::try_parse_from(["ottboard-cli", "analytics"]).unwrap();
        assert_eq!(cli.server, "http://127.0.0.1:3000");
        assert!(matches!(cli.command, Commands::Analytics));
    }

    #[test]
    fn test_cli_custom_server() {
        let cli =
            Cli::try_parse_from(["ottboard-cli", "--server", "http://example.com", "analytics"])
                .unwrap();
        assert_eq!(cli.server, "http://example.com");
    }

    #[test]
    fn test_cli_snapshot_date_parses() {
        let cli =
            Cli::try_parse_from(["ottboard-cli", "snapshot", "--date", "2026-02-01"]).unwrap();
        match cli.command {
            Commands::Snapshot { date } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 1));
            }
            _ => panic!("expected snapshot subcommand"),
        }
    }

    #[test]
    fn test_cli_snapshot_rejects_bad_date() {
        assert!(Cli::try_parse_from(["ottboard-cli", "snapshot", "--date", "not-a-date"]).is_err());
    }

    #[test]
    fn test_cli_refresh_secret() {
        let cli =
            Cli::try_parse_from(["ottboard-cli", "refresh", "--secret", "hunter2"]).unwrap();
        match cli.command {
            Commands::Refresh { secret } => assert_eq!(secret.as_deref(), Some("hunter2")),
            _ => panic!("expected refresh subcommand"),
        }
    }
}
