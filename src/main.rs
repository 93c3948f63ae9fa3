//! Startup binary: migrate the schema, seed baseline data, exit.

use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use medisched::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Ctrl-C flips the cancellation signal; seeding checks it between steps.
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    if let Err(e) = startup::run(&config, cancel_rx).await {
        error!(error = %e, "bootstrap failed, service must not start");
        std::process::exit(1);
    }

    info!("persistence bootstrap complete");
}
