//! Bootstrap error taxonomy.
//!
//! Every variant is fatal: the documented recovery path is to fix the data or
//! migration and restart the process, relying on already-applied migrations
//! and already-seeded steps being skipped on the next run. There is no retry
//! anywhere in this subsystem.

use thiserror::Error;

/// Errors surfaced by the bootstrap orchestrator.
#[derive(Error, Debug)]
pub enum Error {
    /// A schema migration failed against the store. The process must not
    /// start on a schema of unknown shape.
    #[error("failed to bring the database schema to the latest version")]
    Migration(#[source] sea_orm::DbErr),
    /// A seed step could not find a prerequisite row written by an earlier
    /// step. Indicates broken step ordering or manually corrupted data.
    #[error("seed step {step:?} requires a {entity} row that does not exist")]
    SeedDependencyMissing {
        /// Name of the failing seed step.
        step: &'static str,
        /// Kind of row the step expected to find.
        entity: &'static str,
    },
    /// A constructed entity violated a store-level constraint (unique email,
    /// foreign key) when its batch was inserted.
    #[error("seed step {step:?} violated a storage constraint")]
    SeedConstraintViolation {
        /// Name of the failing seed step.
        step: &'static str,
        /// The underlying storage error.
        #[source]
        source: sea_orm::DbErr,
    },
    /// A seed entity failed domain validation before reaching the store.
    #[error(transparent)]
    Validation(#[from] entity::ValidationError),
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set to a value this service cannot use.
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// The offending variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Any other storage error (connection, reads outside seed inserts).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
