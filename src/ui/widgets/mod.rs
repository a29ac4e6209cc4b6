// src/ui/widgets/mod.rs

// Module declarations for all UI widgets, plus the colour conventions they share.

pub mod analysis_view;    // Main panel: instructions, progress, findings.
pub mod confirm_popup;    // Confirmation before history is cleared.
pub mod disclaimer_popup; // The simulated-assessment notice shown at start.
pub mod footer;           // Key hints for the current state.
pub mod history_view;     // Table of stored scans.
pub mod input;            // Target field, system type selector and status line.
pub mod report_view;      // The full synthesized report, scrollable.
pub mod summary;          // Score gauge and counters.

use crate::core::models::{RiskLevel, Severity};
use ratatui::style::Color;

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Cyan,
    }
}

pub fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Critical | RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}
