// src/ui/widgets/history_view.rs

use crate::app::App;
use crate::core::models::{RiskLevel, SystemType};
use super::risk_color;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::str::FromStr;

/// Renders the session user's stored scans, newest first.
pub fn render_history(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Scan History ({})", app.session.user_id));

    if app.history.is_empty() {
        let empty = Paragraph::new("No reports stored yet.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Date", "Target", "System", "Score", "Level"])
        .style(Style::default().fg(Color::Yellow).bold());

    let rows: Vec<Row> = app
        .history
        .iter()
        .map(|record| {
            // Rows written by other tools may carry values this build does not know.
            let system = SystemType::from_str(&record.system_type)
                .map(|s| s.label().to_string())
                .unwrap_or_else(|_| record.system_type.clone());
            let level_style = RiskLevel::from_str(&record.risk_level)
                .map(|l| Style::default().fg(risk_color(l)))
                .unwrap_or_default();
            Row::new(vec![
                Cell::from(record.created_at.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(record.target.clone()),
                Cell::from(system),
                Cell::from(record.risk_score.to_string()),
                Cell::from(record.risk_level.to_uppercase()).style(level_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1)
    .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(table, area, &mut app.history_state);
}
