use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Single-row object store: the progress record lives as one JSON blob
  // under a fixed id. Absence of the row means "all topics at zero".
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS progress_store (
      id TEXT PRIMARY KEY,
      data TEXT NOT NULL
    );
    "#,
  )?;

  Ok(())
}
