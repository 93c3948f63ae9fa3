//! Bootstrap orchestration: connect, migrate, seed, release.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbBackend};
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    config::{Config, Environment},
    error::Error,
    seed,
};

/// Connect to the database without touching the schema.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Apply all pending schema migrations, each exactly once, in order.
///
/// Only SQLite exposes the versioned migration mechanism this service uses;
/// against any other backend this is a no-op. Already-applied migrations are
/// skipped, so calling this on every start is safe.
pub async fn ensure_schema_current(db: &DatabaseConnection) -> Result<(), Error> {
    if db.get_database_backend() != DbBackend::Sqlite {
        warn!("store does not support versioned migrations, leaving schema untouched");
        return Ok(());
    }

    info!("applying pending schema migrations");

    Migrator::up(db, None).await.map_err(|err| {
        error!(error = %err, "schema migration failed");
        Error::Migration(err)
    })?;

    Ok(())
}

/// Full startup bootstrap: connect, bring the schema current, seed baseline
/// data (outside production), and release the connection on every exit path
/// before surfacing the result.
pub async fn run(config: &Config, cancel: watch::Receiver<bool>) -> Result<(), Error> {
    let db = connect_to_database(config).await?;

    let result = bootstrap(&db, config, &cancel).await;
    let closed = db.close().await;

    result?;
    closed.map_err(Error::from)
}

async fn bootstrap(
    db: &DatabaseConnection,
    config: &Config,
    cancel: &watch::Receiver<bool>,
) -> Result<(), Error> {
    ensure_schema_current(db).await?;

    if config.environment == Environment::Production {
        info!("production mode, skipping baseline seeding");
        return Ok(());
    }

    let report = seed::seed_baseline_data(db, cancel).await?;

    if report.cancelled {
        warn!(
            completed_steps = report.steps.len(),
            "seeding cancelled before completion; finished steps stay committed"
        );
    }

    Ok(())
}
