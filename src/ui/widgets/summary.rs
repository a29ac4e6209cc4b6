// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use crate::core::models::Severity;
use super::{risk_color, severity_color};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    text::Line,
};
use strum::IntoEnumIterator;

/// Renders the summary widget, a high-level overview of the displayed result.
///
/// Shows the risk score with its level, a gauge, the check counters, the
/// per-severity breakdown and the open ports. Nothing is drawn until a result
/// is on screen.
///
/// # Arguments
/// * `frame` - The `Frame` used for rendering the UI.
/// * `app` - A reference to the application's state.
/// * `area` - The `Rect` defining the drawable area for this widget.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & level
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Checks
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Severity breakdown
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Open ports + identifiers
        ])
        .split(area);

    let Some(result) = app.scan_result.as_ref().filter(|_| app.state == AppState::Finished) else {
        return;
    };

    // --- Score & Level ---
    let level_style = Style::default().fg(risk_color(result.risk_level)).bold();
    let score_text = Text::from(vec![
        Line::from("Risk Score".bold()),
        Line::from(format!(
            "{}/100 ({} RISK)",
            result.risk_score,
            result.risk_level.as_ref().to_uppercase()
        ))
        .style(level_style),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    let score_gauge = Gauge::default()
        .percent(u16::from(result.risk_score))
        .label("")
        .gauge_style(Style::default().fg(risk_color(result.risk_level)));
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Checks ---
    let s = &result.summary;
    let checks = vec![
        Line::from(vec![Span::raw("Total:    "), Span::raw(s.total_checks.to_string())]),
        Line::from(vec![
            Span::raw("Passed:   "),
            Span::styled(s.passed_checks.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Failed:   "),
            Span::styled(s.failed_checks.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::raw("Warnings: "),
            Span::styled(s.warnings.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(checks).block(Block::default().title("SECURITY CHECKS".bold())),
        summary_chunks[3],
    );

    // --- Severity Breakdown ---
    let breakdown: Vec<Line> = Severity::iter()
        .rev()
        .map(|severity| {
            Line::from(vec![
                Span::raw(format!("{:<10}", severity.as_ref().to_uppercase())),
                Span::styled(
                    result.count_by_severity(severity).to_string(),
                    Style::default().fg(severity_color(severity)),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(breakdown).block(Block::default().title("FINDINGS".bold())),
        summary_chunks[5],
    );

    // --- Open Ports ---
    let ports = result
        .open_ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let details = Text::from(vec![
        Line::from("OPEN PORTS".bold()),
        Line::from(ports).fg(Color::Cyan),
        Line::from(""),
        Line::from(format!("Scan ID: {}", result.scan_id)).fg(Color::DarkGray),
        Line::from(format!("Duration: {}s", result.scan_duration)).fg(Color::DarkGray),
    ]);
    frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), summary_chunks[7]);
}
