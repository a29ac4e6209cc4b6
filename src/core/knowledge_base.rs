//! This module is the scanner's static catalog of simulated findings.
//! Every category shares the same core checks; each system type then adds a
//! handful of checks built around the services of its own port profile.
//! Nothing here is mutated at runtime.

use crate::core::models::{Severity, SystemType};
use std::fmt;

/// Ports assumed open on every target.
pub const BASE_PORTS: [u16; 3] = [22, 80, 443];

/// Defines the high-level categories for findings.
/// Used to group related issues in the report and in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FindingCategory {
    NetworkPerimeter,
    RemoteAccess,
    WebApplication,
    TlsCryptography,
    AccessControl,
    Hardening,
    IotOtMaritime,
    Governance,
}

/// Implements the `Display` trait to provide the human-friendly name of each category.
impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::NetworkPerimeter => write!(f, "Network & Perimeter Security"),
            FindingCategory::RemoteAccess => write!(f, "Remote Access & Management"),
            FindingCategory::WebApplication => write!(f, "Web & Application Security"),
            FindingCategory::TlsCryptography => write!(f, "TLS & Cryptography"),
            FindingCategory::AccessControl => write!(f, "Authentication & Access Control"),
            FindingCategory::Hardening => write!(f, "Configuration & Hardening"),
            FindingCategory::IotOtMaritime => write!(f, "IoT/OT Maritime Systems"),
            FindingCategory::Governance => write!(f, "Governance & Defence"),
        }
    }
}

/// A struct that holds everything known about one catalog check.
///
/// Entries are `'static`; a scan copies the ones it samples into owned
/// `Vulnerability` values.
#[derive(Debug)]
pub struct FindingDetail {
    /// A unique identifier for the check (e.g., "NPS001").
    pub id: &'static str,
    /// A short, human-readable title.
    pub name: &'static str,
    /// The category this check belongs to.
    pub category: FindingCategory,
    pub severity: Severity,
    /// The port the finding is attached to, if any. Sampled ports end up in the open port list.
    pub port: Option<u16>,
    pub service: Option<&'static str>,
    /// What was (supposedly) observed.
    pub description: &'static str,
    /// Clear, actionable steps to fix the issue.
    pub recommendation: &'static str,
}

/// Checks shared by every system type.
static CORE_FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        id: "NPS001",
        name: "Open Common Ports Check",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::High,
        port: Some(22),
        service: Some("Multiple"),
        description: "Common service ports (21, 22, 23, 80, 443, 3389) found open and accessible from external networks.",
        recommendation: "Close unnecessary ports and implement firewall rules to restrict access.",
    },
    FindingDetail {
        id: "NPS002",
        name: "Excessive Open Ports Exposure",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::High,
        port: None,
        service: None,
        description: "More than 20 ports detected open on the target system, increasing attack surface.",
        recommendation: "Conduct port audit and close all non-essential services.",
    },
    FindingDetail {
        id: "NPS003",
        name: "Insecure Service Port Detection (FTP/Telnet)",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Critical,
        port: Some(21),
        service: Some("FTP/Telnet"),
        description: "Legacy insecure services FTP (21) and Telnet (23) detected running on the system.",
        recommendation: "Disable FTP and Telnet. Use SFTP and SSH as secure alternatives.",
    },
    FindingDetail {
        id: "NPS004",
        name: "Unnecessary Service Exposure",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Non-essential services exposed to network including print spooler, NetBIOS, and RPC.",
        recommendation: "Disable unnecessary services and implement service hardening.",
    },
    FindingDetail {
        id: "NPS005",
        name: "Port-to-Service Mismatch Check",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Services running on non-standard ports detected, possible evasion technique.",
        recommendation: "Investigate mismatched services and normalize port assignments.",
    },
    FindingDetail {
        id: "NPS006",
        name: "Publicly Reachable Internal Services",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Critical,
        port: Some(3306),
        service: Some("MySQL"),
        description: "Internal services (database, admin panels) accessible from public network.",
        recommendation: "Implement network segmentation and restrict internal services to private networks.",
    },
    FindingDetail {
        id: "NPS007",
        name: "Network Segmentation Absence Check",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "No network segmentation detected between IT, OT, and guest networks.",
        recommendation: "Implement VLANs and network zones with proper access controls.",
    },
    FindingDetail {
        id: "NPS008",
        name: "Firewall Misconfiguration Indicator",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Firewall rules allow broad access patterns including ANY-ANY rules detected.",
        recommendation: "Audit firewall rules and implement principle of least privilege.",
    },
    FindingDetail {
        id: "NPS009",
        name: "ICMP Exposure Check",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "System responds to ICMP echo requests, enabling network reconnaissance.",
        recommendation: "Block ICMP at perimeter firewall for external interfaces.",
    },
    FindingDetail {
        id: "NPS010",
        name: "Default Gateway Exposure Check",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::High,
        port: Some(443),
        service: Some("HTTPS"),
        description: "Network gateway management interface accessible from untrusted networks.",
        recommendation: "Restrict gateway management to dedicated management VLAN.",
    },
    FindingDetail {
        id: "RAM001",
        name: "Telnet Service Enabled Check",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Critical,
        port: Some(23),
        service: Some("Telnet"),
        description: "Telnet service active on port 23, transmitting credentials in plaintext.",
        recommendation: "Disable Telnet immediately and migrate to SSH.",
    },
    FindingDetail {
        id: "RAM002",
        name: "FTP Service Enabled Check",
        category: FindingCategory::RemoteAccess,
        severity: Severity::High,
        port: Some(21),
        service: Some("FTP"),
        description: "FTP service running without encryption, exposing file transfers.",
        recommendation: "Replace FTP with SFTP or FTPS for secure file transfers.",
    },
    FindingDetail {
        id: "RAM003",
        name: "SSH Weak Configuration Check",
        category: FindingCategory::RemoteAccess,
        severity: Severity::High,
        port: Some(22),
        service: Some("SSH"),
        description: "SSH service using weak ciphers, key exchange algorithms, or protocol version 1.",
        recommendation: "Harden SSH configuration with strong ciphers and disable SSHv1.",
    },
    FindingDetail {
        id: "RAM004",
        name: "Remote Management Port Exposure",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Critical,
        port: Some(3389),
        service: Some("RDP"),
        description: "Remote management ports (RDP 3389, VNC 5900) exposed to public network.",
        recommendation: "Implement VPN or jump server for remote management access.",
    },
    FindingDetail {
        id: "RAM005",
        name: "Legacy Remote Access Protocol Detection",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Critical,
        port: Some(514),
        service: Some("RSH"),
        description: "Legacy protocols (rsh, rlogin, rexec) detected on the system.",
        recommendation: "Disable all legacy remote access protocols immediately.",
    },
    FindingDetail {
        id: "RAM006",
        name: "Plaintext Authentication Service Detection",
        category: FindingCategory::RemoteAccess,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Services accepting plaintext authentication without TLS encryption.",
        recommendation: "Enforce TLS/SSL for all authentication services.",
    },
    FindingDetail {
        id: "RAM007",
        name: "Multiple Remote Access Services Enabled",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Multiple remote access methods active (SSH, RDP, VNC, TeamViewer).",
        recommendation: "Standardize on single secure remote access solution.",
    },
    FindingDetail {
        id: "RAM008",
        name: "Remote Admin Interface Exposure",
        category: FindingCategory::RemoteAccess,
        severity: Severity::High,
        port: Some(8443),
        service: Some("HTTPS"),
        description: "Administrative web interfaces accessible without IP restrictions.",
        recommendation: "Restrict admin interfaces to whitelisted IP addresses.",
    },
    FindingDetail {
        id: "WAS001",
        name: "Missing HTTP Security Headers",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Critical HTTP security headers not configured on web applications.",
        recommendation: "Implement all recommended HTTP security headers.",
    },
    FindingDetail {
        id: "WAS002",
        name: "Missing HSTS Header",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "HTTP Strict Transport Security header not configured.",
        recommendation: "Enable HSTS with max-age of at least 31536000 seconds.",
    },
    FindingDetail {
        id: "WAS003",
        name: "Missing Content Security Policy",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "No Content-Security-Policy header, increasing XSS attack risk.",
        recommendation: "Implement strict Content-Security-Policy header.",
    },
    FindingDetail {
        id: "WAS004",
        name: "Missing X-Frame-Options Header",
        category: FindingCategory::WebApplication,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "Clickjacking protection not enabled via X-Frame-Options.",
        recommendation: "Add X-Frame-Options: DENY or SAMEORIGIN header.",
    },
    FindingDetail {
        id: "WAS005",
        name: "Missing X-Content-Type-Options",
        category: FindingCategory::WebApplication,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "MIME type sniffing protection not enabled.",
        recommendation: "Add X-Content-Type-Options: nosniff header.",
    },
    FindingDetail {
        id: "WAS006",
        name: "HTTP Allowed Over HTTPS Systems",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "System allows unencrypted HTTP connections alongside HTTPS.",
        recommendation: "Enforce HTTPS-only and redirect all HTTP to HTTPS.",
    },
    FindingDetail {
        id: "WAS007",
        name: "Insecure HTTP Methods Enabled",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Dangerous HTTP methods (PUT, DELETE, TRACE) enabled on web server.",
        recommendation: "Disable unnecessary HTTP methods in server configuration.",
    },
    FindingDetail {
        id: "WAS008",
        name: "Directory Listing Enabled Indicator",
        category: FindingCategory::WebApplication,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Web server exposing directory contents to unauthenticated users.",
        recommendation: "Disable directory listing in web server configuration.",
    },
    FindingDetail {
        id: "WAS009",
        name: "Default Web Page Detected",
        category: FindingCategory::WebApplication,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "Default installation page or sample content still present.",
        recommendation: "Remove default pages and deploy custom error pages.",
    },
    FindingDetail {
        id: "WAS010",
        name: "Server Banner Disclosure",
        category: FindingCategory::WebApplication,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "Web server revealing software name and version in HTTP headers.",
        recommendation: "Configure server to suppress version information.",
    },
    FindingDetail {
        id: "WAS011",
        name: "Web Server Version Disclosure",
        category: FindingCategory::WebApplication,
        severity: Severity::Low,
        port: None,
        service: None,
        description: "Detailed web server version exposed in response headers.",
        recommendation: "Remove or obfuscate server version headers.",
    },
    FindingDetail {
        id: "TLS001",
        name: "HTTPS Not Enforced Check",
        category: FindingCategory::TlsCryptography,
        severity: Severity::High,
        port: None,
        service: None,
        description: "HTTPS not enforced, allowing data transmission over unencrypted HTTP.",
        recommendation: "Implement mandatory HTTPS with proper redirects.",
    },
    FindingDetail {
        id: "TLS002",
        name: "SSL/TLS Not Configured",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "No SSL/TLS configuration found on public-facing services.",
        recommendation: "Obtain and install valid SSL/TLS certificates.",
    },
    FindingDetail {
        id: "TLS003",
        name: "Weak TLS Protocol Support",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Server supports deprecated TLS 1.0 and TLS 1.1 protocols.",
        recommendation: "Disable TLS 1.0/1.1 and enforce TLS 1.2 or higher.",
    },
    FindingDetail {
        id: "TLS004",
        name: "Deprecated Cipher Suite Support",
        category: FindingCategory::TlsCryptography,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Server accepts weak cipher suites including RC4, 3DES, and NULL ciphers.",
        recommendation: "Configure server to use only strong modern cipher suites.",
    },
    FindingDetail {
        id: "TLS005",
        name: "Self-Signed Certificate Detection",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Self-signed certificate in use instead of CA-issued certificate.",
        recommendation: "Obtain certificate from trusted Certificate Authority.",
    },
    FindingDetail {
        id: "TLS006",
        name: "Certificate Expiry Check",
        category: FindingCategory::TlsCryptography,
        severity: Severity::High,
        port: None,
        service: None,
        description: "SSL/TLS certificate expires within 30 days or already expired.",
        recommendation: "Renew SSL certificate before expiration date.",
    },
    FindingDetail {
        id: "TLS007",
        name: "Certificate CN Mismatch Check",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Certificate Common Name does not match the server hostname.",
        recommendation: "Obtain certificate with correct CN or SAN entries.",
    },
    FindingDetail {
        id: "TLS008",
        name: "Insecure Key Length Detection",
        category: FindingCategory::TlsCryptography,
        severity: Severity::High,
        port: None,
        service: None,
        description: "RSA key length less than 2048 bits detected.",
        recommendation: "Use minimum 2048-bit RSA keys or 256-bit ECC keys.",
    },
    FindingDetail {
        id: "TLS009",
        name: "Mixed Content Detection",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "HTTPS pages loading resources over unencrypted HTTP.",
        recommendation: "Ensure all resources are loaded over HTTPS.",
    },
    FindingDetail {
        id: "TLS010",
        name: "Plaintext Data Transmission Indicator",
        category: FindingCategory::TlsCryptography,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "Sensitive data transmitted without encryption over the network.",
        recommendation: "Implement end-to-end encryption for all sensitive data.",
    },
    FindingDetail {
        id: "AAC001",
        name: "Default Credential Usage Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "System responding to default username/password combinations.",
        recommendation: "Change all default credentials immediately.",
    },
    FindingDetail {
        id: "AAC002",
        name: "Weak Authentication Policy Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Weak password policy allowing simple or short passwords.",
        recommendation: "Implement strong password policy with complexity requirements.",
    },
    FindingDetail {
        id: "AAC003",
        name: "Missing Account Lockout Policy Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "No account lockout after failed login attempts detected.",
        recommendation: "Implement account lockout after 5 failed attempts.",
    },
    FindingDetail {
        id: "AAC004",
        name: "Excessive Privilege Exposure Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Users or services operating with excessive privileges.",
        recommendation: "Implement principle of least privilege across all accounts.",
    },
    FindingDetail {
        id: "AAC005",
        name: "Anonymous Access Enabled Check",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Anonymous or unauthenticated access allowed to sensitive resources.",
        recommendation: "Disable anonymous access and require authentication.",
    },
    FindingDetail {
        id: "AAC006",
        name: "Guest Account Enabled Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Guest or default accounts remain enabled on the system.",
        recommendation: "Disable all guest and default accounts.",
    },
    FindingDetail {
        id: "AAC007",
        name: "Unrestricted API Access Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "APIs accessible without authentication or rate limiting.",
        recommendation: "Implement API authentication and rate limiting.",
    },
    FindingDetail {
        id: "AAC008",
        name: "Token-Based Authentication Absence",
        category: FindingCategory::AccessControl,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Session management using weak or predictable tokens.",
        recommendation: "Implement secure token-based authentication (JWT, OAuth).",
    },
    FindingDetail {
        id: "AAC009",
        name: "Session Security Misconfiguration Indicator",
        category: FindingCategory::AccessControl,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Session cookies missing Secure, HttpOnly, or SameSite flags.",
        recommendation: "Configure secure cookie attributes for all sessions.",
    },
    FindingDetail {
        id: "AAC010",
        name: "Missing Multi-Factor Authentication",
        category: FindingCategory::AccessControl,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Administrative interfaces lack multi-factor authentication.",
        recommendation: "Implement MFA for all administrative and privileged access.",
    },
    FindingDetail {
        id: "CFH001",
        name: "Default Configuration Detected",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "System running with default configuration settings.",
        recommendation: "Apply security hardening guidelines and customize configuration.",
    },
    FindingDetail {
        id: "CFH002",
        name: "Unpatched Service Version Indicator",
        category: FindingCategory::Hardening,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "Services running outdated versions with known vulnerabilities.",
        recommendation: "Apply latest security patches and updates.",
    },
    FindingDetail {
        id: "CFH003",
        name: "Legacy Software Usage Indicator",
        category: FindingCategory::Hardening,
        severity: Severity::High,
        port: None,
        service: None,
        description: "End-of-life or unsupported software in use.",
        recommendation: "Upgrade to supported software versions.",
    },
    FindingDetail {
        id: "CFH004",
        name: "Debug Mode Enabled Indicator",
        category: FindingCategory::Hardening,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Application or service running in debug mode in production.",
        recommendation: "Disable debug mode in production environments.",
    },
    FindingDetail {
        id: "CFH005",
        name: "Test Interface Exposure",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Test or development interfaces accessible in production.",
        recommendation: "Remove or disable all test interfaces in production.",
    },
    FindingDetail {
        id: "CFH006",
        name: "Backup File Exposure Indicator",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Backup files (.bak, .old, .backup) accessible via web.",
        recommendation: "Remove backup files from web-accessible directories.",
    },
    FindingDetail {
        id: "CFH007",
        name: "Error Handling Misconfiguration",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Detailed error messages exposing system information.",
        recommendation: "Implement custom error pages without technical details.",
    },
    FindingDetail {
        id: "CFH008",
        name: "Excessive Information Disclosure",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "System revealing sensitive technical information in responses.",
        recommendation: "Review and minimize information exposed in responses.",
    },
    FindingDetail {
        id: "CFH009",
        name: "Logging & Monitoring Absence Indicator",
        category: FindingCategory::Hardening,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Insufficient logging and monitoring capabilities detected.",
        recommendation: "Implement comprehensive logging and real-time monitoring.",
    },
    FindingDetail {
        id: "IOT001",
        name: "IoT Device Exposure Indicator",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: None,
        service: None,
        description: "IoT devices accessible from external network without protection.",
        recommendation: "Segment IoT devices and implement access controls.",
    },
    FindingDetail {
        id: "IOT002",
        name: "OT Protocol Exposure Indicator",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::Critical,
        port: Some(502),
        service: Some("Modbus"),
        description: "Industrial protocols (Modbus, DNP3, OPC) accessible without protection.",
        recommendation: "Implement industrial firewall with protocol-aware filtering.",
    },
    FindingDetail {
        id: "IOT003",
        name: "SCADA Interface Exposure Indicator",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "SCADA HMI or control interfaces accessible from IT network.",
        recommendation: "Physically and logically isolate SCADA systems.",
    },
    FindingDetail {
        id: "IOT004",
        name: "Unauthenticated Device Communication",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: None,
        service: None,
        description: "OT/IoT devices communicating without authentication.",
        recommendation: "Implement device authentication for all OT communications.",
    },
    FindingDetail {
        id: "IOT005",
        name: "Weak Device Identity Enforcement",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Weak or absent device identity verification mechanisms.",
        recommendation: "Implement certificate-based device identity.",
    },
    FindingDetail {
        id: "IOT006",
        name: "Firmware Update Security Absence",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Devices accepting unsigned firmware updates.",
        recommendation: "Implement secure boot and signed firmware validation.",
    },
    FindingDetail {
        id: "IOT007",
        name: "Insecure Device Management Interface",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Device management interfaces using weak authentication.",
        recommendation: "Secure device management with strong authentication.",
    },
    FindingDetail {
        id: "IOT008",
        name: "Flat OT Network Indicator",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::Critical,
        port: None,
        service: None,
        description: "No segmentation between OT zones and levels detected.",
        recommendation: "Implement Purdue Model network segmentation.",
    },
    FindingDetail {
        id: "GOV001",
        name: "CERT-In Compliance Indicator",
        category: FindingCategory::Governance,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Non-compliance with CERT-In security guidelines detected.",
        recommendation: "Review and implement CERT-In security advisories.",
    },
    FindingDetail {
        id: "GOV002",
        name: "NIC Security Baseline Deviation",
        category: FindingCategory::Governance,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Deviation from NIC security baseline standards detected.",
        recommendation: "Align systems with NIC security baseline requirements.",
    },
    FindingDetail {
        id: "GOV003",
        name: "Absence of Cyber Hygiene Controls",
        category: FindingCategory::Governance,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Basic cyber hygiene controls not implemented.",
        recommendation: "Implement cyber hygiene best practices and regular audits.",
    },
    FindingDetail {
        id: "GOV004",
        name: "Incident Response Readiness Indicator",
        category: FindingCategory::Governance,
        severity: Severity::High,
        port: None,
        service: None,
        description: "No documented incident response plan or procedures.",
        recommendation: "Develop and test cyber incident response plan.",
    },
    FindingDetail {
        id: "GOV005",
        name: "Defence-in-Depth Control Absence",
        category: FindingCategory::Governance,
        severity: Severity::High,
        port: None,
        service: None,
        description: "Single layer of security without defence-in-depth strategy.",
        recommendation: "Implement multi-layer security controls and monitoring.",
    },
];

// --- System-specific checks ---

static SMART_PORT_FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        id: "SPT001",
        name: "OPC UA Endpoint Without Security Policy",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::Critical,
        port: Some(4840),
        service: Some("OPC UA"),
        description: "OPC UA server accepts sessions with security policy 'None', exposing terminal automation data and commands.",
        recommendation: "Enforce Basic256Sha256 or stronger security policies and require signed and encrypted sessions.",
    },
    FindingDetail {
        id: "SPT002",
        name: "BACnet Building Controller Exposure",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: Some(47808),
        service: Some("BACnet"),
        description: "Building automation controllers for warehouses and terminals respond to BACnet requests from the IT network.",
        recommendation: "Place building automation behind a dedicated OT firewall and restrict BACnet to the management zone.",
    },
    FindingDetail {
        id: "SPT003",
        name: "S7 PLC Reachable From Corporate Network",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::Critical,
        port: Some(102),
        service: Some("S7comm"),
        description: "Crane and gate PLCs accept S7comm connections without authentication from non-OT hosts.",
        recommendation: "Isolate PLCs in a control zone and enable PLC access protection with passwords.",
    },
    FindingDetail {
        id: "SPT004",
        name: "SNMP Default Community String",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::High,
        port: Some(161),
        service: Some("SNMP"),
        description: "Network equipment answers SNMP queries using the default 'public' community string.",
        recommendation: "Migrate to SNMPv3 with authentication and privacy, and remove default community strings.",
    },
    FindingDetail {
        id: "SPT005",
        name: "Terminal Operating Database Exposure",
        category: FindingCategory::Hardening,
        severity: Severity::Medium,
        port: Some(1433),
        service: Some("MSSQL"),
        description: "Terminal operating system database listens on all interfaces with SQL authentication enabled.",
        recommendation: "Bind the database to the application network and enforce Windows authentication.",
    },
];

static SHIP_NETWORK_FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        id: "SHN001",
        name: "Unauthenticated NMEA Data Stream",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: Some(10110),
        service: Some("NMEA 0183"),
        description: "Navigation sensor data (GPS, AIS, heading) is broadcast over TCP without authentication or integrity checks.",
        recommendation: "Restrict NMEA feeds to the bridge network and deploy a data diode towards IT systems.",
    },
    FindingDetail {
        id: "SHN002",
        name: "VoIP Gateway Exposure",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Medium,
        port: Some(5060),
        service: Some("SIP"),
        description: "Onboard SIP gateway accepts registrations from untrusted networks, enabling toll fraud and eavesdropping.",
        recommendation: "Require SIP over TLS, restrict registrations to crew VLANs and enable strong extension passwords.",
    },
    FindingDetail {
        id: "SHN003",
        name: "MQTT Broker Without Authentication",
        category: FindingCategory::IotOtMaritime,
        severity: Severity::High,
        port: Some(1883),
        service: Some("MQTT"),
        description: "Engine room telemetry broker allows anonymous publish and subscribe.",
        recommendation: "Enable broker authentication, TLS on port 8883 and per-topic access control lists.",
    },
    FindingDetail {
        id: "SHN004",
        name: "ECDIS Remote Update Interface Exposure",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Critical,
        port: Some(8443),
        service: Some("HTTPS"),
        description: "Electronic chart display update service is reachable over the satellite link with vendor default credentials.",
        recommendation: "Disable remote chart updates outside maintenance windows and rotate vendor credentials.",
    },
    FindingDetail {
        id: "SHN005",
        name: "Crew Network Not Isolated From Bridge Systems",
        category: FindingCategory::NetworkPerimeter,
        severity: Severity::Medium,
        port: None,
        service: None,
        description: "Crew welfare Wi-Fi shares a broadcast domain with bridge and engine control systems.",
        recommendation: "Separate crew, business and operational networks with VLANs and a stateful firewall.",
    },
];

static LOGISTICS_FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        id: "LGS001",
        name: "Redis Instance Without Authentication",
        category: FindingCategory::Hardening,
        severity: Severity::Critical,
        port: Some(6379),
        service: Some("Redis"),
        description: "Shipment tracking cache accepts commands without a password and is reachable from external networks.",
        recommendation: "Enable Redis ACLs, bind to internal interfaces and disable dangerous commands.",
    },
    FindingDetail {
        id: "LGS002",
        name: "MongoDB Open to Network",
        category: FindingCategory::Hardening,
        severity: Severity::High,
        port: Some(27017),
        service: Some("MongoDB"),
        description: "Cargo manifest database allows unauthenticated connections.",
        recommendation: "Enable MongoDB access control and restrict network exposure to application servers.",
    },
    FindingDetail {
        id: "LGS003",
        name: "Elasticsearch Cluster Exposure",
        category: FindingCategory::WebApplication,
        severity: Severity::High,
        port: Some(9200),
        service: Some("Elasticsearch"),
        description: "Search cluster holding customs documents exposes its REST API without authentication.",
        recommendation: "Enable the security features of the cluster and place it behind an authenticated proxy.",
    },
    FindingDetail {
        id: "LGS004",
        name: "Message Broker Console Exposure",
        category: FindingCategory::RemoteAccess,
        severity: Severity::Medium,
        port: Some(8161),
        service: Some("ActiveMQ"),
        description: "ActiveMQ web console reachable with default admin credentials.",
        recommendation: "Change default console credentials and restrict the console to the management network.",
    },
    FindingDetail {
        id: "LGS005",
        name: "Database Accepting Remote Password Logins",
        category: FindingCategory::AccessControl,
        severity: Severity::Medium,
        port: Some(5432),
        service: Some("PostgreSQL"),
        description: "Port management database accepts password logins from any address.",
        recommendation: "Limit pg_hba.conf entries to application hosts and require certificate authentication.",
    },
];

/// Additional ports a target of the given type may expose besides `BASE_PORTS`.
pub fn system_ports(system_type: SystemType) -> &'static [u16] {
    match system_type {
        SystemType::SmartPort => &[21, 23, 502, 102, 4840, 47808, 161, 3389, 8080, 1433, 5432],
        SystemType::ShipNetwork => &[10110, 5060, 1883, 502, 8080, 8443, 161, 3389, 23, 21],
        SystemType::LogisticsSystem => &[1433, 3306, 5432, 6379, 27017, 8080, 8443, 9200, 9300, 8161],
    }
}

fn extension(system_type: SystemType) -> &'static [FindingDetail] {
    match system_type {
        SystemType::SmartPort => SMART_PORT_FINDINGS,
        SystemType::ShipNetwork => SHIP_NETWORK_FINDINGS,
        SystemType::LogisticsSystem => LOGISTICS_FINDINGS,
    }
}

/// Enumerates the catalog of a system type: the core checks first, then the
/// system-specific ones. The order is fixed.
pub fn catalog(system_type: SystemType) -> impl Iterator<Item = &'static FindingDetail> {
    CORE_FINDINGS.iter().chain(extension(system_type).iter())
}

/// Number of checks performed against a target of the given type.
pub fn catalog_size(system_type: SystemType) -> usize {
    CORE_FINDINGS.len() + extension(system_type).len()
}

/// Retrieves a catalog entry by id, across all system types.
///
/// # Returns
///
/// `None` if the id does not exist in the catalog.
pub fn get_finding_detail(id: &str) -> Option<&'static FindingDetail> {
    CORE_FINDINGS
        .iter()
        .chain(SMART_PORT_FINDINGS)
        .chain(SHIP_NETWORK_FINDINGS)
        .chain(LOGISTICS_FINDINGS)
        .find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_system_type_has_core_and_extension_checks() {
        for system_type in SystemType::iter() {
            let entries: Vec<_> = catalog(system_type).collect();
            assert_eq!(entries.len(), catalog_size(system_type));
            assert_eq!(entries.len(), CORE_FINDINGS.len() + 5);
            assert_eq!(entries[0].id, "NPS001");
        }
    }

    #[test]
    fn ids_are_unique_across_the_catalog() {
        let mut seen = HashSet::new();
        for detail in CORE_FINDINGS
            .iter()
            .chain(SMART_PORT_FINDINGS)
            .chain(SHIP_NETWORK_FINDINGS)
            .chain(LOGISTICS_FINDINGS)
        {
            assert!(seen.insert(detail.id), "duplicate id {}", detail.id);
        }
    }

    #[test]
    fn lookup_finds_core_and_system_specific_entries() {
        let telnet = get_finding_detail("RAM001").unwrap();
        assert_eq!(telnet.port, Some(23));
        assert_eq!(telnet.severity, Severity::Critical);
        assert_eq!(telnet.category.to_string(), "Remote Access & Management");

        assert_eq!(get_finding_detail("SHN001").unwrap().port, Some(10110));
        assert!(get_finding_detail("XYZ999").is_none());
    }

    #[test]
    fn extension_checks_stay_within_their_system() {
        let ship: HashSet<_> = catalog(SystemType::ShipNetwork).map(|f| f.id).collect();
        assert!(ship.contains("SHN004"));
        assert!(!ship.contains("SPT001"));
        assert!(!ship.contains("LGS001"));
    }

    #[test]
    fn system_ports_never_repeat_the_base_ports() {
        for system_type in SystemType::iter() {
            assert!(system_ports(system_type).iter().all(|p| !BASE_PORTS.contains(p)));
        }
    }
}
