// src/core/report.rs

//! Turns a `ScanResult` into the plain-text assessment report.
//!
//! Rendering is a pure formatting step: the same result always produces the
//! same text, byte for byte.

use std::fmt::Write;

use crate::core::models::{ScanResult, Severity, Vulnerability};

const RULE: &str =
    "================================================================================";

/// Frameworks the assessment is mapped against.
const COMPLIANCE_FRAMEWORKS: &[&str] = &[
    "CERT-In Security Guidelines",
    "NIC Security Baseline",
    "IEC 62443 (Industrial Automation)",
    "NIST Cybersecurity Framework",
    "IMO Maritime Cyber Risk Management Guidelines",
];

/// A remediation bucket: the severity it collects, its heading and the text
/// printed when it is empty.
struct PriorityWindow {
    severity: Severity,
    heading: &'static str,
    empty: &'static str,
}

const PRIORITY_WINDOWS: &[PriorityWindow] = &[
    PriorityWindow {
        severity: Severity::Critical,
        heading: "IMMEDIATE (Within 24 Hours):",
        empty: "No critical issues found",
    },
    PriorityWindow {
        severity: Severity::High,
        heading: "HIGH PRIORITY (Within 7 Days):",
        empty: "No high priority issues found",
    },
    PriorityWindow {
        severity: Severity::Medium,
        heading: "MEDIUM PRIORITY (Within 30 Days):",
        empty: "No medium priority issues found",
    },
    PriorityWindow {
        severity: Severity::Low,
        heading: "LOW PRIORITY (Within 90 Days):",
        empty: "No low priority issues found",
    },
];

/// Renders the full report for `result`.
pub fn render(result: &ScanResult) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &ScanResult) -> std::fmt::Result {
    section(out, "SMART PORT / NAVAL INFRASTRUCTURE SECURITY ASSESSMENT REPORT")?;
    writeln!(out)?;
    writeln!(out, "Target System: {}", result.target)?;
    writeln!(out, "System Type: {}", result.system_type.label().to_uppercase())?;
    writeln!(
        out,
        "Assessment Date: {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Report ID: {}", result.scan_id)?;
    writeln!(out)?;

    section(out, "EXECUTIVE SUMMARY")?;
    writeln!(out)?;
    let summary = &result.summary;
    writeln!(out, "Overall Risk Score: {}/100", result.risk_score)?;
    writeln!(out, "Risk Classification: {}", result.risk_level.as_ref().to_uppercase())?;
    writeln!(out)?;
    writeln!(out, "Total Security Checks Performed: {}", summary.total_checks)?;
    writeln!(out, "├── Passed Checks: {}", summary.passed_checks)?;
    writeln!(out, "├── Failed Checks (High/Critical): {}", summary.failed_checks)?;
    writeln!(out, "└── Warnings (Low/Medium): {}", summary.warnings)?;
    writeln!(out)?;
    writeln!(out, "Open Ports: {}", join_ports(&result.open_ports))?;
    writeln!(out, "Scan Duration: {}s", result.scan_duration)?;
    writeln!(out)?;

    section(out, "DETAILED FINDINGS BY CATEGORY")?;
    if result.vulnerabilities.is_empty() {
        writeln!(out)?;
        writeln!(out, "No findings were reported for this target.")?;
    }
    for (category, findings) in group_by_category(&result.vulnerabilities) {
        writeln!(out)?;
        writeln!(out, "--- {} ---", category.to_uppercase())?;
        writeln!(out)?;
        for finding in findings {
            write_finding(out, finding)?;
        }
    }
    writeln!(out)?;

    section(out, "COMPLIANCE ALIGNMENT")?;
    writeln!(out)?;
    writeln!(out, "This assessment aligns with the following frameworks:")?;
    for framework in COMPLIANCE_FRAMEWORKS {
        writeln!(out, "• {}", framework)?;
    }
    writeln!(out)?;

    section(out, "REMEDIATION PRIORITY")?;
    for window in PRIORITY_WINDOWS {
        writeln!(out)?;
        writeln!(out, "{}", window.heading)?;
        let mut names = result
            .vulnerabilities
            .iter()
            .filter(|v| v.severity == window.severity)
            .map(|v| v.name.as_str())
            .peekable();
        if names.peek().is_none() {
            writeln!(out, "• {}", window.empty)?;
        }
        for name in names {
            writeln!(out, "• {}", name)?;
        }
    }
    writeln!(out)?;

    section(out, "END OF REPORT")
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:^80}", title)?;
    writeln!(out, "{}", RULE)
}

fn write_finding(out: &mut String, finding: &Vulnerability) -> std::fmt::Result {
    writeln!(out, "[{}] {}", finding.severity.as_ref().to_uppercase(), finding.name)?;
    writeln!(out, "   ID: {}", finding.id)?;
    writeln!(out, "   Description: {}", finding.description)?;
    if let Some(port) = finding.port {
        writeln!(out, "   Port: {}", port)?;
    }
    if let Some(service) = &finding.service {
        writeln!(out, "   Service: {}", service)?;
    }
    writeln!(out, "   Recommendation: {}", finding.recommendation)?;
    writeln!(out)
}

/// Groups findings by category, keeping categories in order of first appearance.
fn group_by_category(findings: &[Vulnerability]) -> Vec<(&str, Vec<&Vulnerability>)> {
    let mut groups: Vec<(&str, Vec<&Vulnerability>)> = Vec::new();
    for finding in findings {
        match groups.iter_mut().find(|(c, _)| *c == finding.category) {
            Some((_, members)) => members.push(finding),
            None => groups.push((finding.category.as_str(), vec![finding])),
        }
    }
    groups
}

fn join_ports(ports: &[u16]) -> String {
    if ports.is_empty() {
        return "none".to_string();
    }
    ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::get_finding_detail;
    use crate::core::models::{CheckSummary, RiskLevel, SystemType};
    use chrono::{TimeZone, Utc};

    fn sample_result() -> ScanResult {
        let vulnerabilities: Vec<Vulnerability> = ["RAM001", "WAS002", "NPS009", "RAM003"]
            .iter()
            .map(|id| Vulnerability::from(get_finding_detail(id).unwrap()))
            .collect();
        ScanResult {
            scan_id: "SCAN-1700000000000-abc123xyz".into(),
            target: "10.0.0.5".into(),
            system_type: SystemType::SmartPort,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            risk_score: 51,
            risk_level: RiskLevel::Medium,
            open_ports: vec![22, 23, 80, 443],
            vulnerabilities,
            scan_duration: 120,
            summary: CheckSummary {
                total_checks: 76,
                passed_checks: 72,
                failed_checks: 2,
                warnings: 2,
            },
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let result = sample_result();
        assert_eq!(render(&result), render(&result.clone()));
    }

    #[test]
    fn header_and_summary_carry_result_fields() {
        let text = render(&sample_result());
        assert!(text.contains("Target System: 10.0.0.5"));
        assert!(text.contains("System Type: SMART PORT INFRASTRUCTURE"));
        assert!(text.contains("Assessment Date: 2024-03-01 12:30:00 UTC"));
        assert!(text.contains("Report ID: SCAN-1700000000000-abc123xyz"));
        assert!(text.contains("Overall Risk Score: 51/100"));
        assert!(text.contains("Risk Classification: MEDIUM"));
        assert!(text.contains("├── Passed Checks: 72"));
        assert!(text.contains("Open Ports: 22, 23, 80, 443"));
        assert!(text.contains("Scan Duration: 120s"));

        let compliance = text.find("COMPLIANCE ALIGNMENT").unwrap();
        let remediation = text.find("REMEDIATION PRIORITY").unwrap();
        assert!(text.find("DETAILED FINDINGS BY CATEGORY").unwrap() < compliance);
        assert!(compliance < remediation);
        for framework in COMPLIANCE_FRAMEWORKS {
            assert!(text[compliance..remediation].contains(&format!("• {}\n", framework)));
        }
    }

    #[test]
    fn findings_are_grouped_by_first_seen_category() {
        let text = render(&sample_result());
        let remote = text.find("--- REMOTE ACCESS & MANAGEMENT ---").unwrap();
        let web = text.find("--- WEB & APPLICATION SECURITY ---").unwrap();
        let network = text.find("--- NETWORK & PERIMETER SECURITY ---").unwrap();
        assert!(remote < web && web < network);
        assert_eq!(text.matches("--- REMOTE ACCESS & MANAGEMENT ---").count(), 1);

        assert!(text.contains("[CRITICAL] Telnet Service Enabled Check"));
        assert!(text.contains("   Port: 23\n   Service: Telnet\n"));
    }

    #[test]
    fn findings_without_port_print_no_port_line() {
        let text = render(&sample_result());
        let hsts = text.find("[MEDIUM] Missing HSTS Header").unwrap();
        let block_end = text[hsts..].find("Recommendation:").unwrap();
        assert!(!text[hsts..hsts + block_end].contains("Port:"));
    }

    #[test]
    fn remediation_windows_bucket_by_severity() {
        let text = render(&sample_result());
        let immediate = text.find("IMMEDIATE (Within 24 Hours):").unwrap();
        let high = text.find("HIGH PRIORITY (Within 7 Days):").unwrap();
        assert!(text[immediate..high].contains("• Telnet Service Enabled Check"));
        assert!(text[high..].contains("• SSH Weak Configuration Check"));
        assert!(text.contains("LOW PRIORITY (Within 90 Days):\n• ICMP Exposure Check"));
    }

    #[test]
    fn empty_buckets_say_so() {
        let mut result = sample_result();
        result.vulnerabilities.retain(|v| v.severity == Severity::Low);
        let text = render(&result);
        assert!(text.contains("• No critical issues found"));
        assert!(text.contains("• No high priority issues found"));
        assert!(text.contains("• No medium priority issues found"));
        assert!(text.trim_end().ends_with(RULE));
    }
}
