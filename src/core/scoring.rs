// src/core/scoring.rs

//! Severity-weighted risk scoring.
//!
//! Everything in here is a pure function of its input, so the same list of
//! findings always yields the same score, level and counters.

use crate::core::models::{CheckSummary, RiskLevel, Severity, Vulnerability};

/// Lowest score a scan can receive, including a scan with no findings.
pub const SCORE_FLOOR: u8 = 15;
/// Highest score a scan can receive.
pub const SCORE_CEILING: u8 = 95;

/// Scores at or above this are `High`.
pub const HIGH_CUTOFF: u8 = 70;
/// Scores at or above this (and below `HIGH_CUTOFF`) are `Medium`.
pub const MEDIUM_CUTOFF: u8 = 40;

pub fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 25,
        Severity::High => 15,
        Severity::Medium => 8,
        Severity::Low => 3,
    }
}

/// Sums the severity weights of `findings`, clamped to `[SCORE_FLOOR, SCORE_CEILING]`.
pub fn score(findings: &[Vulnerability]) -> u8 {
    let total: u32 = findings.iter().map(|f| severity_weight(f.severity)).sum();
    total.clamp(SCORE_FLOOR as u32, SCORE_CEILING as u32) as u8
}

/// Maps a score onto the three-band level table.
pub fn level(score: u8) -> RiskLevel {
    if score >= HIGH_CUTOFF {
        RiskLevel::High
    } else if score >= MEDIUM_CUTOFF {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Builds the pass/fail counters for a scan that ran `total_checks` checks.
///
/// High and critical findings count as failed checks, low and medium ones as
/// warnings, so `failed_checks + warnings == findings.len()`.
pub fn summarize(total_checks: usize, findings: &[Vulnerability]) -> CheckSummary {
    let failed_checks = findings
        .iter()
        .filter(|f| matches!(f.severity, Severity::High | Severity::Critical))
        .count();
    CheckSummary {
        total_checks,
        passed_checks: total_checks.saturating_sub(findings.len()),
        failed_checks,
        warnings: findings.len() - failed_checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> Vulnerability {
        Vulnerability {
            id: format!("T-{}", severity),
            name: "test".into(),
            description: String::new(),
            severity,
            port: None,
            service: None,
            recommendation: String::new(),
            category: "Test".into(),
        }
    }

    #[test]
    fn empty_scan_scores_at_the_floor() {
        assert_eq!(score(&[]), SCORE_FLOOR);
        assert_eq!(level(score(&[])), RiskLevel::Low);
    }

    #[test]
    fn score_sums_weights() {
        let findings = vec![
            finding(Severity::Critical),
            finding(Severity::High),
            finding(Severity::Medium),
            finding(Severity::Low),
        ];
        assert_eq!(score(&findings), 25 + 15 + 8 + 3);
    }

    #[test]
    fn score_is_clamped_on_both_ends() {
        assert_eq!(score(&[finding(Severity::Low)]), SCORE_FLOOR);
        let many = vec![finding(Severity::Critical); 10];
        assert_eq!(score(&many), SCORE_CEILING);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level(0), RiskLevel::Low);
        assert_eq!(level(39), RiskLevel::Low);
        assert_eq!(level(40), RiskLevel::Medium);
        assert_eq!(level(69), RiskLevel::Medium);
        assert_eq!(level(70), RiskLevel::High);
        assert_eq!(level(100), RiskLevel::High);
    }

    #[test]
    fn summary_partitions_findings() {
        let findings = vec![
            finding(Severity::Critical),
            finding(Severity::High),
            finding(Severity::High),
            finding(Severity::Medium),
            finding(Severity::Low),
        ];
        let summary = summarize(76, &findings);
        assert_eq!(summary.total_checks, 76);
        assert_eq!(summary.passed_checks, 71);
        assert_eq!(summary.failed_checks, 3);
        assert_eq!(summary.warnings, 2);
    }

    #[test]
    fn summary_never_underflows() {
        let findings = vec![finding(Severity::Low); 3];
        assert_eq!(summarize(2, &findings).passed_checks, 0);
    }
}
