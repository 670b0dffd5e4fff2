//! Key-value persistence for the two state blobs.
//!
//! The desktop rendition of the original browser storage: one SQLite file
//! in the working directory holding a two-column `kv` table with the record
//! list and the header config as JSON blobs. Absent or malformed blobs are
//! treated as missing and replaced by the built-in example data/defaults;
//! every save rewrites its blob whole.

use common::model::header::HeaderConfig;
use common::model::record::{example_records, DonationRecord};
use log::warn;
use rusqlite::{params, Connection};
use std::path::Path;

pub const DB_FILE: &str = "jadwal_tajil.sqlite";
pub const KEY_RECORDS: &str = "jadwal_tajil_data";
pub const KEY_HEADER: &str = "jadwal_tajil_header";

pub fn load_records() -> Vec<DonationRecord> {
    load_records_at(Path::new(DB_FILE))
}

pub fn save_records(records: &[DonationRecord]) -> Result<(), String> {
    save_records_at(Path::new(DB_FILE), records)
}

pub fn load_header() -> HeaderConfig {
    load_header_at(Path::new(DB_FILE))
}

pub fn save_header(header: &HeaderConfig) -> Result<(), String> {
    save_header_at(Path::new(DB_FILE), header)
}

fn load_records_at(path: &Path) -> Vec<DonationRecord> {
    match read_blob(path, KEY_RECORDS) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!("record blob is malformed, falling back to example data: {}", e);
                example_records()
            }
        },
        Ok(None) => example_records(),
        Err(e) => {
            warn!("record blob could not be read, falling back to example data: {}", e);
            example_records()
        }
    }
}

fn save_records_at(path: &Path, records: &[DonationRecord]) -> Result<(), String> {
    let blob = serde_json::to_string(records).map_err(|e| e.to_string())?;
    write_blob(path, KEY_RECORDS, &blob)
}

fn load_header_at(path: &Path) -> HeaderConfig {
    match read_blob(path, KEY_HEADER) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(header) => header,
            Err(e) => {
                warn!("header blob is malformed, falling back to defaults: {}", e);
                HeaderConfig::default()
            }
        },
        Ok(None) => HeaderConfig::default(),
        Err(e) => {
            warn!("header blob could not be read, falling back to defaults: {}", e);
            HeaderConfig::default()
        }
    }
}

fn save_header_at(path: &Path, header: &HeaderConfig) -> Result<(), String> {
    let blob = serde_json::to_string(header).map_err(|e| e.to_string())?;
    write_blob(path, KEY_HEADER, &blob)
}

fn open(path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
        [],
    )
    .map_err(|e| e.to_string())?;
    Ok(conn)
}

fn read_blob(path: &Path, key: &str) -> Result<Option<String>, String> {
    let conn = open(path)?;
    let mut stmt = conn
        .prepare("SELECT value FROM kv WHERE key = ?1")
        .map_err(|e| e.to_string())?;
    let mut rows = stmt.query(params![key]).map_err(|e| e.to_string())?;
    match rows.next().map_err(|e| e.to_string())? {
        Some(row) => Ok(Some(row.get(0).map_err(|e| e.to_string())?)),
        None => Ok(None),
    }
}

fn write_blob(path: &Path, key: &str, value: &str) -> Result<(), String> {
    let conn = open(path)?;
    conn.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        params![key, value],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_round_trip_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.sqlite");

        let records = example_records();
        save_records_at(&db, &records).unwrap();
        assert_eq!(load_records_at(&db), records);
    }

    #[test]
    fn missing_blobs_fall_back_to_seed_data() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.sqlite");

        let records = load_records_at(&db);
        assert_eq!(records.len(), example_records().len());
        assert_eq!(load_header_at(&db), HeaderConfig::default());
    }

    #[test]
    fn malformed_blobs_are_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.sqlite");

        write_blob(&db, KEY_RECORDS, "{not json").unwrap();
        write_blob(&db, KEY_HEADER, "[]").unwrap();

        assert_eq!(load_records_at(&db).len(), example_records().len());
        assert_eq!(load_header_at(&db), HeaderConfig::default());
    }

    #[test]
    fn header_saves_overwrite_the_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("kv.sqlite");

        let mut header = HeaderConfig::default();
        header.mosque_name = "MESJID AL-FALAH".to_string();
        save_header_at(&db, &header).unwrap();
        header.hijri_year = "1448 HIJRIYAH".to_string();
        save_header_at(&db, &header).unwrap();

        assert_eq!(load_header_at(&db), header);
    }
}
