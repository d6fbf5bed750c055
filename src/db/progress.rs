//! The progress store: durable per-topic completion percentages.
//!
//! There is exactly one record, stored as a JSON blob under the fixed key
//! `"progress"`. A missing record is not an error; it reads back as all
//! topics at zero. `save` is a read-modify-write of the whole record with
//! no cross-process coordination, so the last writer wins.

use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

use crate::db::{DbPool, try_lock};
use crate::domain::Topic;

/// Fixed id of the single persisted record.
pub const PROGRESS_KEY: &str = "progress";

fn progress_id() -> String {
    PROGRESS_KEY.to_string()
}

/// The single persisted object holding per-topic completion percentages.
///
/// Every field is always present and clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default = "progress_id")]
    pub id: String,
    #[serde(default)]
    pub basic: f64,
    #[serde(default)]
    pub ip_address: f64,
    #[serde(default)]
    pub routing: f64,
    #[serde(default)]
    pub vlan: f64,
    #[serde(default)]
    pub wireless: f64,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            id: progress_id(),
            basic: 0.0,
            ip_address: 0.0,
            routing: 0.0,
            vlan: 0.0,
            wireless: 0.0,
        }
    }
}

impl ProgressRecord {
    pub fn topic(&self, topic: Topic) -> f64 {
        match topic {
            Topic::Basic => self.basic,
            Topic::IpAddress => self.ip_address,
            Topic::Routing => self.routing,
            Topic::Vlan => self.vlan,
            Topic::Wireless => self.wireless,
        }
    }

    pub fn set_topic(&mut self, topic: Topic, value: f64) {
        let value = clamp_percent(value);
        match topic {
            Topic::Basic => self.basic = value,
            Topic::IpAddress => self.ip_address = value,
            Topic::Routing => self.routing = value,
            Topic::Vlan => self.vlan = value,
            Topic::Wireless => self.wireless = value,
        }
    }

    /// Mean of the five topic percentages.
    pub fn overall(&self) -> f64 {
        let sum: f64 = Topic::ALL.iter().map(|t| self.topic(*t)).sum();
        sum / Topic::ALL.len() as f64
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Error raised by progress store operations.
///
/// A missing record is NOT represented here; it is the default record.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying storage cannot be reached (poisoned lock).
    Unavailable,
    /// Read or write failed inside SQLite.
    Sql(rusqlite::Error),
    /// The stored blob could not be encoded or decoded.
    Encoding(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "progress store unavailable"),
            StoreError::Sql(e) => write!(f, "progress store query failed: {}", e),
            StoreError::Encoding(e) => write!(f, "progress record malformed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Sql(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encoding(e)
    }
}

/// Handle to the persisted progress record.
///
/// Passed explicitly into every caller (handlers, controllers) instead of
/// living as a module-level singleton, so tests can point it at a
/// throwaway database.
#[derive(Clone)]
pub struct ProgressStore {
    pool: DbPool,
}

impl ProgressStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Read the current record, defaulting to all zeros if none was ever
    /// written.
    pub fn get(&self) -> Result<ProgressRecord, StoreError> {
        let conn = try_lock(&self.pool).map_err(|_| StoreError::Unavailable)?;
        read_record(&conn)
    }

    /// Overwrite exactly one topic's percentage, preserving the other four.
    ///
    /// The value is clamped to `[0, 100]`. This reads the whole record and
    /// writes it back; concurrent writers from another process can lose an
    /// update (accepted, single-user usage).
    pub fn save(&self, topic: Topic, value: f64) -> Result<(), StoreError> {
        let conn = try_lock(&self.pool).map_err(|_| StoreError::Unavailable)?;
        let mut record = read_record(&conn)?;
        record.set_topic(topic, value);
        write_record(&conn, &record)
    }

    /// Rewrite the entire record with all topics at zero.
    pub fn reset(&self) -> Result<(), StoreError> {
        let conn = try_lock(&self.pool).map_err(|_| StoreError::Unavailable)?;
        write_record(&conn, &ProgressRecord::default())
    }
}

fn read_record(conn: &Connection) -> Result<ProgressRecord, StoreError> {
    let blob: Option<String> = conn
        .query_row(
            "SELECT data FROM progress_store WHERE id = ?1",
            params![PROGRESS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match blob {
        Some(json) => {
            let mut record: ProgressRecord = serde_json::from_str(&json)?;
            record.id = progress_id();
            for topic in Topic::ALL {
                record.set_topic(topic, record.topic(topic));
            }
            Ok(record)
        }
        None => Ok(ProgressRecord::default()),
    }
}

fn write_record(conn: &Connection, record: &ProgressRecord) -> Result<(), StoreError> {
    let json = serde_json::to_string(record)?;
    conn.execute(
        "INSERT OR REPLACE INTO progress_store (id, data) VALUES (?1, ?2)",
        params![PROGRESS_KEY, json],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    #[test]
    fn test_fresh_store_reads_all_zeros() {
        let env = TestEnv::new().unwrap();
        let record = env.store.get().unwrap();
        assert_eq!(record, ProgressRecord::default());
        assert_eq!(record.id, "progress");
        for topic in Topic::ALL {
            assert_eq!(record.topic(topic), 0.0);
        }
    }

    #[test]
    fn test_save_updates_only_the_named_topic() {
        let env = TestEnv::new().unwrap();
        env.store.save(Topic::Vlan, 40.0).unwrap();

        let record = env.store.get().unwrap();
        assert_eq!(record.vlan, 40.0);
        assert_eq!(record.basic, 0.0);
        assert_eq!(record.ip_address, 0.0);
        assert_eq!(record.routing, 0.0);
        assert_eq!(record.wireless, 0.0);
    }

    #[test]
    fn test_save_round_trips_for_every_topic() {
        let env = TestEnv::new().unwrap();
        for (i, topic) in Topic::ALL.into_iter().enumerate() {
            let value = (i as f64) * 20.0;
            env.store.save(topic, value).unwrap();
            assert_eq!(env.store.get().unwrap().topic(topic), value);
        }
    }

    #[test]
    fn test_last_write_wins_not_cumulative() {
        let env = TestEnv::new().unwrap();
        env.store.save(Topic::Routing, 30.0).unwrap();
        env.store.save(Topic::Routing, 70.0).unwrap();
        assert_eq!(env.store.get().unwrap().routing, 70.0);
    }

    #[test]
    fn test_save_is_idempotent() {
        let env = TestEnv::new().unwrap();
        env.store.save(Topic::Wireless, 67.0).unwrap();
        let once = env.store.get().unwrap();
        env.store.save(Topic::Wireless, 67.0).unwrap();
        assert_eq!(env.store.get().unwrap(), once);
    }

    #[test]
    fn test_save_clamps_out_of_range_values() {
        let env = TestEnv::new().unwrap();
        env.store.save(Topic::Basic, 150.0).unwrap();
        assert_eq!(env.store.get().unwrap().basic, 100.0);

        env.store.save(Topic::Basic, -3.0).unwrap();
        assert_eq!(env.store.get().unwrap().basic, 0.0);
    }

    #[test]
    fn test_reset_zeroes_every_topic() {
        let env = TestEnv::new().unwrap();
        for topic in Topic::ALL {
            env.store.save(topic, 55.0).unwrap();
        }
        env.store.reset().unwrap();

        let record = env.store.get().unwrap();
        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let mut record = ProgressRecord::default();
        record.set_topic(Topic::IpAddress, 25.0);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":\"progress\""));
        assert!(json.contains("\"ipAddress\":25.0"));
    }

    #[test]
    fn test_partial_blob_fills_missing_fields_with_zero() {
        let env = TestEnv::new().unwrap();
        {
            let conn = env.pool.lock().unwrap();
            conn.execute(
                "INSERT OR REPLACE INTO progress_store (id, data) VALUES ('progress', ?1)",
                params![r#"{"id":"progress","vlan":40}"#],
            )
            .unwrap();
        }

        let record = env.store.get().unwrap();
        assert_eq!(record.vlan, 40.0);
        assert_eq!(record.basic, 0.0);
        assert_eq!(record.wireless, 0.0);
    }

    #[test]
    fn test_overall_is_mean_of_topics() {
        let mut record = ProgressRecord::default();
        record.set_topic(Topic::Basic, 100.0);
        record.set_topic(Topic::Vlan, 50.0);
        assert_eq!(record.overall(), 30.0);
    }
}
