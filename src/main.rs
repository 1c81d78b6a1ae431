//! taskboard-smoke - CLI entry point
//!
//! Runs the sequential smoke scenario against a running Taskboard server
//! and maps the outcome to an exit code: 0 on success, 1 when a step got an
//! unexpected HTTP status, 2 on transport or malformed-response failures.

use taskboard_smoke::{config::Config, progress, scenario};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_smoke=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(api_base = %config.api_base, email = %config.email, "loaded configuration");

    match scenario::run_scenario(&config).await {
        Ok(_) => Ok(()),
        Err(err) => {
            progress::failure(&err.to_string());
            std::process::exit(err.exit_code());
        }
    }
}
