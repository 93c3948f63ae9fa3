use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Holds the per-test database connection.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

/// Fresh in-memory SQLite with the full migration set applied.
pub async fn test_setup() -> Result<TestSetup, TestError> {
    let setup = test_setup_bare().await?;

    Migrator::up(&setup.db, None).await?;

    Ok(setup)
}

/// Connection without any schema, for exercising failure paths.
pub async fn test_setup_bare() -> Result<TestSetup, TestError> {
    let db = Database::connect("sqlite::memory:").await?;

    Ok(TestSetup { db })
}
