// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::core::knowledge_base::FindingDetail;

// --- Enumerations ---

/// Severity of a single finding, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The class of infrastructure being assessed.
///
/// The snake_case name is the wire form used by the history store and
/// accepted by the scanner; `label()` is the human-readable form.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SystemType {
    SmartPort,
    ShipNetwork,
    LogisticsSystem,
}

impl SystemType {
    pub fn label(&self) -> &'static str {
        match self {
            SystemType::SmartPort => "Smart Port Infrastructure",
            SystemType::ShipNetwork => "Ship IT Network",
            SystemType::LogisticsSystem => "Logistics / Port Management",
        }
    }
}

/// Discrete banding of a risk score.
///
/// The scorer only ever yields `Low`, `Medium` or `High`; `Critical` is kept
/// so history rows written with a four-band table still load.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

// --- Findings ---

/// An owned copy of a catalog entry, as carried by a `ScanResult`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vulnerability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub recommendation: String,
    pub category: String,
}

impl From<&FindingDetail> for Vulnerability {
    fn from(detail: &FindingDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            name: detail.name.to_string(),
            description: detail.description.to_string(),
            severity: detail.severity,
            port: detail.port,
            service: detail.service.map(str::to_string),
            recommendation: detail.recommendation.to_string(),
            category: detail.category.to_string(),
        }
    }
}

// --- Scan Output ---

/// Pass/fail counters of a scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckSummary {
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub warnings: usize,
}

/// The complete, immutable outcome of one simulated scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub scan_id: String,
    pub target: String,
    pub system_type: SystemType,
    pub timestamp: DateTime<Utc>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub open_ports: Vec<u16>,
    pub vulnerabilities: Vec<Vulnerability>,
    /// Reported scan duration, in seconds.
    pub scan_duration: u32,
    pub summary: CheckSummary,
}

impl ScanResult {
    /// Number of findings with the given severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.vulnerabilities
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

// --- Progress ---

/// One step of the simulated scanning sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPhase {
    pub label: &'static str,
    pub description: &'static str,
    pub duration_ms: u64,
}

/// Progress notification emitted once per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub phase: &'static str,
    pub description: &'static str,
    /// 1-based index of the phase being run.
    pub index: usize,
    pub total: usize,
    pub percent: u8,
}

// --- Errors ---

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("invalid system type: {0}")]
    InvalidCategory(String),
    #[error("scan cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn system_type_parses_wire_names() {
        assert_eq!(SystemType::from_str("smart_port"), Ok(SystemType::SmartPort));
        assert_eq!(SystemType::from_str("ship_network"), Ok(SystemType::ShipNetwork));
        assert_eq!(
            SystemType::from_str("logistics_system"),
            Ok(SystemType::LogisticsSystem)
        );
        assert!(SystemType::from_str("unknown_type").is_err());
        assert_eq!(SystemType::ShipNetwork.to_string(), "ship_network");
    }

    #[test]
    fn severity_orders_by_impact() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!(Severity::High.as_ref(), "high");
    }

    #[test]
    fn vulnerability_omits_absent_port_and_service() {
        let v = Vulnerability {
            id: "WAS002".into(),
            name: "Missing HSTS Header".into(),
            description: "d".into(),
            severity: Severity::Medium,
            port: None,
            service: None,
            recommendation: "r".into(),
            category: "Web & Application Security".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("port").is_none());
        assert!(json.get("service").is_none());
        assert_eq!(json["severity"], "medium");
    }
}
