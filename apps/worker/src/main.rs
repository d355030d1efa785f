//! Maildeck data retention worker runtime.
//!
//! Runs the retention cleanup on a fixed interval. The cleanup itself never
//! fails, so the loop only has to log the per-collection outcomes and sleep.

#![forbid(unsafe_code)]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use maildeck_application::{CleanupReport, RetentionCleanupService, SweepOutcome};
use maildeck_core::{AppError, AppResult};
use maildeck_domain::{DEFAULT_RETENTION_DAYS, RetentionPolicy};
use maildeck_infrastructure::PostgresRetentionStore;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct WorkerConfig {
    database_url: String,
    retention_days: u32,
    cleanup_interval_seconds: u64,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = WorkerConfig::load()?;
    let policy = RetentionPolicy::new(config.retention_days)?;
    let pool = connect_pool(config.database_url.as_str()).await?;
    let service = RetentionCleanupService::new(Arc::new(PostgresRetentionStore::new(pool)), policy);

    info!(
        retention_days = policy.retention_days(),
        cleanup_interval_seconds = config.cleanup_interval_seconds,
        "maildeck-worker started"
    );

    loop {
        let report = service.run_cleanup().await;
        log_report(&report);

        tokio::time::sleep(Duration::from_secs(config.cleanup_interval_seconds)).await;
    }
}

fn log_report(report: &CleanupReport) {
    warn_on_failure(&report.cloned_emails);
    warn_on_failure(&report.created_lists);

    if let Ok(encoded) = serde_json::to_string(report) {
        debug!(report = %encoded, "retention cleanup report");
    }
}

fn warn_on_failure(outcome: &SweepOutcome) {
    if outcome.success {
        return;
    }

    warn!(
        collection = %outcome.collection,
        error = outcome.error.as_deref().unwrap_or("unknown failure"),
        "retention sweep failed, will retry on the next interval"
    );
}

async fn connect_pool(database_url: &str) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

impl WorkerConfig {
    fn load() -> AppResult<Self> {
        let database_url = required_env("DATABASE_URL")?;
        let retention_days = parse_env_u32("RETENTION_DAYS", DEFAULT_RETENTION_DAYS)?;
        let cleanup_interval_seconds = parse_env_u64("CLEANUP_INTERVAL_SECONDS", 86_400)?;

        if cleanup_interval_seconds == 0 {
            return Err(AppError::Validation(
                "CLEANUP_INTERVAL_SECONDS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            database_url,
            retention_days,
            cleanup_interval_seconds,
        })
    }
}

fn required_env(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn parse_env_u32(name: &str, default: u32) -> AppResult<u32> {
    match env::var(name) {
        Ok(value) => value.parse::<u32>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_env_u64(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(value) => value.parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}
