//! Test utilities for database setup.
//!
//! Provides a throwaway database initialized with the authoritative schema,
//! so tests never duplicate DDL.

use tempfile::TempDir;

use crate::db::{self, DbPool, ProgressStore};

/// Test environment with a temporary database and a progress store on it.
///
/// The temporary directory is kept alive for the lifetime of the value and
/// cleaned up on drop.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Connection pool on the temporary database
    pub pool: DbPool,
    /// Progress store handle backed by `pool`
    pub store: ProgressStore,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("net_tutor.db");
        let pool = db::init_db(&db_path)?;
        let store = ProgressStore::new(pool.clone());

        Ok(Self { temp, pool, store })
    }
}
