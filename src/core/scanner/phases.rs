// src/core/scanner/phases.rs

use crate::core::models::ScanPhase;

/// The fixed sequence the simulator walks through, in order.
///
/// Durations are the nominal delay of each phase before the configured pace
/// is applied.
pub static SCAN_PHASES: &[ScanPhase] = &[
    ScanPhase { label: "Network Discovery", description: "Mapping network topology and hosts...", duration_ms: 800 },
    ScanPhase { label: "Open Common Ports Check", description: "Scanning standard service ports (21, 22, 23, 80, 443, 3389)...", duration_ms: 600 },
    ScanPhase { label: "Excessive Ports Analysis", description: "Identifying excessive open port exposure...", duration_ms: 500 },
    ScanPhase { label: "Insecure Service Detection", description: "Detecting FTP and Telnet services...", duration_ms: 600 },
    ScanPhase { label: "Unnecessary Services Scan", description: "Finding non-essential exposed services...", duration_ms: 500 },
    ScanPhase { label: "Port-Service Mapping", description: "Verifying port-to-service consistency...", duration_ms: 400 },
    ScanPhase { label: "Internal Services Exposure", description: "Checking publicly reachable internal services...", duration_ms: 600 },
    ScanPhase { label: "Network Segmentation Check", description: "Analyzing network segmentation architecture...", duration_ms: 700 },
    ScanPhase { label: "Firewall Configuration Audit", description: "Reviewing firewall rules and policies...", duration_ms: 800 },
    ScanPhase { label: "ICMP/Gateway Exposure", description: "Testing ICMP and gateway exposure...", duration_ms: 400 },
    ScanPhase { label: "Remote Access Analysis", description: "Scanning Telnet, FTP, SSH configurations...", duration_ms: 700 },
    ScanPhase { label: "Legacy Protocol Detection", description: "Detecting legacy remote access protocols...", duration_ms: 500 },
    ScanPhase { label: "Admin Interface Discovery", description: "Finding exposed admin interfaces...", duration_ms: 600 },
    ScanPhase { label: "HTTP Security Headers", description: "Checking HSTS, CSP, X-Frame-Options...", duration_ms: 600 },
    ScanPhase { label: "Web Application Analysis", description: "Analyzing web security configurations...", duration_ms: 700 },
    ScanPhase { label: "Directory/Banner Exposure", description: "Checking directory listing and server disclosure...", duration_ms: 500 },
    ScanPhase { label: "TLS/SSL Protocol Check", description: "Testing SSL/TLS configurations...", duration_ms: 800 },
    ScanPhase { label: "Certificate Validation", description: "Validating certificate chain and expiry...", duration_ms: 600 },
    ScanPhase { label: "Cipher Suite Analysis", description: "Analyzing cipher suite strength...", duration_ms: 500 },
    ScanPhase { label: "Encryption Key Assessment", description: "Checking encryption key lengths...", duration_ms: 400 },
    ScanPhase { label: "Authentication Policy Check", description: "Reviewing authentication mechanisms...", duration_ms: 700 },
    ScanPhase { label: "Default Credentials Test", description: "Testing for default credentials...", duration_ms: 600 },
    ScanPhase { label: "Account Lockout Policy", description: "Verifying account lockout configurations...", duration_ms: 400 },
    ScanPhase { label: "Privilege Analysis", description: "Analyzing privilege assignments...", duration_ms: 500 },
    ScanPhase { label: "API Security Assessment", description: "Testing API authentication and rate limiting...", duration_ms: 600 },
    ScanPhase { label: "Session Management Check", description: "Analyzing session security configurations...", duration_ms: 500 },
    ScanPhase { label: "Configuration Baseline", description: "Comparing against security baselines...", duration_ms: 700 },
    ScanPhase { label: "Patch Level Assessment", description: "Checking for unpatched vulnerabilities...", duration_ms: 800 },
    ScanPhase { label: "Legacy Software Detection", description: "Identifying end-of-life software...", duration_ms: 500 },
    ScanPhase { label: "Debug Mode Detection", description: "Checking for debug mode exposure...", duration_ms: 400 },
    ScanPhase { label: "Test Interface Discovery", description: "Finding exposed test interfaces...", duration_ms: 400 },
    ScanPhase { label: "Backup File Exposure", description: "Scanning for exposed backup files...", duration_ms: 500 },
    ScanPhase { label: "Error Handling Review", description: "Analyzing error message disclosure...", duration_ms: 400 },
    ScanPhase { label: "Logging/Monitoring Check", description: "Verifying logging and monitoring...", duration_ms: 600 },
    ScanPhase { label: "IoT Device Discovery", description: "Identifying IoT devices on network...", duration_ms: 700 },
    ScanPhase { label: "OT Protocol Analysis", description: "Scanning Modbus, DNP3, OPC protocols...", duration_ms: 800 },
    ScanPhase { label: "SCADA Interface Check", description: "Testing SCADA HMI accessibility...", duration_ms: 700 },
    ScanPhase { label: "Device Authentication", description: "Verifying OT device authentication...", duration_ms: 600 },
    ScanPhase { label: "Firmware Security Check", description: "Analyzing firmware update security...", duration_ms: 500 },
    ScanPhase { label: "OT Network Segmentation", description: "Reviewing OT network architecture...", duration_ms: 600 },
    ScanPhase { label: "CERT-In Compliance", description: "Checking CERT-In guideline compliance...", duration_ms: 700 },
    ScanPhase { label: "NIC Baseline Deviation", description: "Comparing against NIC security baseline...", duration_ms: 600 },
    ScanPhase { label: "Cyber Hygiene Assessment", description: "Evaluating cyber hygiene controls...", duration_ms: 500 },
    ScanPhase { label: "Incident Response Review", description: "Checking incident response readiness...", duration_ms: 600 },
    ScanPhase { label: "Defence-in-Depth Analysis", description: "Evaluating multi-layer security controls...", duration_ms: 700 },
    ScanPhase { label: "Final Risk Compilation", description: "Compiling risk assessment results...", duration_ms: 400 },
];

/// Percentage reported after `completed` of `total` phases, rounded to the nearest integer.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Sum of the nominal phase durations, in milliseconds.
pub fn nominal_duration_ms() -> u64 {
    SCAN_PHASES.iter().map(|p| p.duration_ms).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_table_starts_with_discovery_and_ends_with_compilation() {
        assert_eq!(SCAN_PHASES.len(), 46);
        assert_eq!(SCAN_PHASES[0].label, "Network Discovery");
        assert_eq!(SCAN_PHASES[SCAN_PHASES.len() - 1].label, "Final Risk Compilation");
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent_complete(1, 46), 2);
        assert_eq!(percent_complete(23, 46), 50);
        assert_eq!(percent_complete(46, 46), 100);
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 67);
    }

    #[test]
    fn nominal_duration_is_positive() {
        assert!(nominal_duration_ms() > 0);
        assert!(SCAN_PHASES.iter().all(|p| p.duration_ms > 0));
    }
}
