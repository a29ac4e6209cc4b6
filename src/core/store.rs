// src/core/store.rs

//! History rows.
//!
//! A finished scan is flattened into a `ScanRecord`, the row shape of the
//! `scan_reports` table: scalar columns for the fields that get listed and
//! filtered, and two JSON columns for everything else. `ReportStore` is the
//! seam the application talks to; `JsonFileStore` keeps the rows in a local
//! file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::knowledge_base;
use crate::core::models::{
    CheckSummary, RiskLevel, ScanError, ScanResult, SystemType, Vulnerability,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    Scan(#[from] ScanError),
    #[error("unknown finding in record: {0}")]
    UnknownFinding(String),
}

/// One row of scan history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRecord {
    pub id: String,
    pub user_id: String,
    pub target: String,
    pub system_type: String,
    pub risk_score: u8,
    pub risk_level: String,
    pub vulnerabilities: Value,
    pub scan_data: Value,
    pub created_at: DateTime<Utc>,
}

/// The contents of the `scan_data` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanData {
    pub open_ports: Vec<u16>,
    pub scan_duration: u32,
    pub summary: CheckSummary,
}

impl ScanResult {
    /// Flattens the result into a history row owned by `user_id`.
    pub fn to_record(&self, user_id: &str) -> Result<ScanRecord, StoreError> {
        let scan_data = ScanData {
            open_ports: self.open_ports.clone(),
            scan_duration: self.scan_duration,
            summary: self.summary,
        };
        Ok(ScanRecord {
            id: self.scan_id.clone(),
            user_id: user_id.to_string(),
            target: self.target.clone(),
            system_type: self.system_type.to_string(),
            risk_score: self.risk_score,
            risk_level: self.risk_level.to_string(),
            vulnerabilities: serde_json::to_value(&self.vulnerabilities)?,
            scan_data: serde_json::to_value(scan_data)?,
            created_at: self.timestamp,
        })
    }

    /// Rebuilds a result from a history row.
    ///
    /// Rows are tolerated as loosely as possible: a `vulnerabilities` column
    /// that is not a list reads as no findings, a missing or malformed
    /// `scan_data` column reads as no ports, zero duration and a summary with
    /// only the total filled in. An unknown system type is an error.
    pub fn from_record(record: &ScanRecord) -> Result<ScanResult, StoreError> {
        let system_type = SystemType::from_str(&record.system_type)
            .map_err(|_| ScanError::InvalidCategory(record.system_type.clone()))?;

        let vulnerabilities: Vec<Vulnerability> = match &record.vulnerabilities {
            Value::Array(items) => items
                .iter()
                .map(finding_from_value)
                .collect::<Result<_, _>>()?,
            _ => Vec::new(),
        };

        let scan_data = serde_json::from_value::<ScanData>(record.scan_data.clone())
            .unwrap_or_else(|e| {
                debug!(id = %record.id, error = %e, "Record has no usable scan_data, using defaults.");
                ScanData {
                    open_ports: Vec::new(),
                    scan_duration: 0,
                    summary: CheckSummary {
                        total_checks: knowledge_base::catalog_size(system_type),
                        ..CheckSummary::default()
                    },
                }
            });

        let risk_level = RiskLevel::from_str(&record.risk_level).unwrap_or_else(|_| {
            warn!(id = %record.id, level = %record.risk_level, "Unknown risk level, recomputing.");
            crate::core::scoring::level(record.risk_score)
        });

        Ok(ScanResult {
            scan_id: record.id.clone(),
            target: record.target.clone(),
            system_type,
            timestamp: record.created_at,
            risk_score: record.risk_score,
            risk_level,
            open_ports: scan_data.open_ports,
            vulnerabilities,
            scan_duration: scan_data.scan_duration,
            summary: scan_data.summary,
        })
    }
}

/// Reads one stored finding.
///
/// Compact rows keep only catalog ids, either as bare strings or as objects
/// missing the descriptive fields; those are filled in from the catalog.
fn finding_from_value(value: &Value) -> Result<Vulnerability, StoreError> {
    if let Ok(finding) = serde_json::from_value::<Vulnerability>(value.clone()) {
        return Ok(finding);
    }
    let id = match value {
        Value::String(id) => Some(id.as_str()),
        Value::Object(fields) => fields.get("id").and_then(Value::as_str),
        _ => None,
    }
    .ok_or_else(|| StoreError::UnknownFinding(value.to_string()))?;

    knowledge_base::get_finding_detail(id)
        .map(Vulnerability::from)
        .ok_or_else(|| StoreError::UnknownFinding(id.to_string()))
}

/// Storage of history rows.
pub trait ReportStore {
    fn insert(&mut self, record: ScanRecord) -> Result<(), StoreError>;

    /// Rows newest first. `None` lists the rows of every user.
    fn list(&self, user_id: Option<&str>) -> Result<Vec<ScanRecord>, StoreError>;

    /// Deletes every row of `user_id`, returning how many were removed.
    fn clear(&mut self, user_id: &str) -> Result<usize, StoreError>;
}

fn newest_first(mut records: Vec<ScanRecord>, user_id: Option<&str>) -> Vec<ScanRecord> {
    if let Some(user) = user_id {
        records.retain(|r| r.user_id == user);
    }
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}

/// Keeps rows in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ScanRecord>,
}

impl ReportStore for MemoryStore {
    fn insert(&mut self, record: ScanRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn list(&self, user_id: Option<&str>) -> Result<Vec<ScanRecord>, StoreError> {
        Ok(newest_first(self.records.clone(), user_id))
    }

    fn clear(&mut self, user_id: &str) -> Result<usize, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.user_id != user_id);
        Ok(before - self.records.len())
    }
}

/// Keeps rows as a JSON array in a single file.
///
/// Every write rewrites the file through a temporary sibling and a rename,
/// so a crash never leaves a half-written history behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<ScanRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, records: &[ScanRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), rows = records.len(), "History saved.");
        Ok(())
    }
}

impl ReportStore for JsonFileStore {
    fn insert(&mut self, record: ScanRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    fn list(&self, user_id: Option<&str>) -> Result<Vec<ScanRecord>, StoreError> {
        Ok(newest_first(self.load()?, user_id))
    }

    fn clear(&mut self, user_id: &str) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.user_id != user_id);
        let removed = before - records.len();
        if removed > 0 {
            self.save(&records)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::Simulator;
    use chrono::Duration;
    use serde_json::json;

    async fn scan() -> ScanResult {
        Simulator::new(0.0)
            .run_scan("10.0.0.5", "smart_port", |_| {}, None)
            .await
            .unwrap()
    }

    fn record_at(user: &str, id: &str, created_at: DateTime<Utc>) -> ScanRecord {
        ScanRecord {
            id: id.into(),
            user_id: user.into(),
            target: "10.0.0.5".into(),
            system_type: "ship_network".into(),
            risk_score: 42,
            risk_level: "medium".into(),
            vulnerabilities: json!([]),
            scan_data: json!(null),
            created_at,
        }
    }

    #[tokio::test]
    async fn record_keeps_every_result_field() {
        let result = scan().await;
        let record = result.to_record("alice").unwrap();
        assert_eq!(record.id, result.scan_id);
        assert_eq!(record.system_type, "smart_port");
        assert_eq!(record.risk_level, result.risk_level.to_string());
        assert_eq!(record.scan_data["open_ports"], json!(result.open_ports));

        assert_eq!(ScanResult::from_record(&record).unwrap(), result);
    }

    #[test]
    fn sparse_records_fall_back_to_defaults() {
        let mut record = record_at("bob", "SCAN-1", Utc::now());
        record.vulnerabilities = json!({"not": "a list"});
        let result = ScanResult::from_record(&record).unwrap();

        assert!(result.vulnerabilities.is_empty());
        assert!(result.open_ports.is_empty());
        assert_eq!(result.scan_duration, 0);
        assert_eq!(
            result.summary.total_checks,
            knowledge_base::catalog_size(SystemType::ShipNetwork)
        );
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn compact_findings_are_filled_from_the_catalog() {
        let mut record = record_at("bob", "SCAN-4", Utc::now());
        record.vulnerabilities = json!(["RAM001", {"id": "SHN001", "severity": "high"}]);
        let result = ScanResult::from_record(&record).unwrap();

        let ids: Vec<_> = result.vulnerabilities.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["RAM001", "SHN001"]);
        assert_eq!(result.vulnerabilities[0].port, Some(23));
        assert_eq!(result.vulnerabilities[1].port, Some(10110));

        record.vulnerabilities = json!(["XYZ999"]);
        assert!(matches!(
            ScanResult::from_record(&record),
            Err(StoreError::UnknownFinding(id)) if id == "XYZ999"
        ));
        record.vulnerabilities = json!([42]);
        assert!(matches!(
            ScanResult::from_record(&record),
            Err(StoreError::UnknownFinding(_))
        ));
    }

    #[test]
    fn critical_level_from_older_rows_is_accepted() {
        let mut record = record_at("bob", "SCAN-2", Utc::now());
        record.risk_level = "critical".into();
        assert_eq!(
            ScanResult::from_record(&record).unwrap().risk_level,
            RiskLevel::Critical
        );
    }

    #[test]
    fn unknown_system_type_is_rejected() {
        let mut record = record_at("bob", "SCAN-3", Utc::now());
        record.system_type = "unknown_type".into();
        assert!(matches!(
            ScanResult::from_record(&record),
            Err(StoreError::Scan(ScanError::InvalidCategory(_)))
        ));
    }

    #[test]
    fn memory_store_lists_newest_first_per_user() {
        let now = Utc::now();
        let mut store = MemoryStore::default();
        store.insert(record_at("alice", "old", now - Duration::hours(2))).unwrap();
        store.insert(record_at("alice", "new", now)).unwrap();
        store.insert(record_at("bob", "other", now - Duration::hours(1))).unwrap();

        let ids: Vec<_> = store.list(Some("alice")).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["new", "old"]);
        assert_eq!(store.list(None).unwrap().len(), 3);

        assert_eq!(store.clear("alice").unwrap(), 2);
        assert_eq!(store.list(None).unwrap().len(), 1);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let now = Utc::now();

        let mut store = JsonFileStore::new(&path);
        assert!(store.list(None).unwrap().is_empty());
        store.insert(record_at("alice", "a1", now - Duration::minutes(5))).unwrap();
        store.insert(record_at("alice", "a2", now)).unwrap();

        let mut reopened = JsonFileStore::new(&path);
        let ids: Vec<_> = reopened.list(Some("alice")).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["a2", "a1"]);

        assert_eq!(reopened.clear("bob").unwrap(), 0);
        assert_eq!(reopened.clear("alice").unwrap(), 2);
        assert!(JsonFileStore::new(&path).list(None).unwrap().is_empty());
    }
}
