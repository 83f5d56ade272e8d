use std::fs;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use komisi::config::Config;
use komisi::modules::commissions::models::PeriodReport;
use komisi::modules::commissions::services::PeriodAggregator;
use komisi::modules::snapshots::models::{EmploymentStatus, SnapshotRow};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "komisi=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Komisi Commission Engine");
    tracing::info!("Environment: {}", config.app.env);

    let mut args = std::env::args().skip(1);
    let rows_path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: komisi <rows.json> [employment-status]");
        std::process::exit(2);
    });
    let status = EmploymentStatus::parse(args.next().as_deref());

    let raw = fs::read_to_string(&rows_path)?;
    let rows: Vec<SnapshotRow> = serde_json::from_str(&raw)?;

    tracing::info!("Loaded {} snapshot rows from {}", rows.len(), rows_path);

    let result = PeriodAggregator::compute(&rows, status);
    let report = PeriodReport::from(&result);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
