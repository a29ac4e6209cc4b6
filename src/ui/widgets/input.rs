// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState, ExportStatus};

/// Renders the target input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("Target (IP address or domain)");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // The cursor belongs to the input only while it can be edited.
    if app.state == AppState::Idle && !app.show_disclaimer {
        frame.set_cursor_position((
            area.x + app.input.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}

/// Renders the system type selector next to the input box.
pub fn render_system_type(frame: &mut Frame, app: &App, area: Rect) {
    let editable = app.state == AppState::Idle;
    let arrow_style = if editable {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(app.system_type.label(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" ▶", arrow_style),
    ]);
    let block = Block::default().borders(Borders::ALL).title("System Type (↑ ↓)");
    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

/// Renders the one-line status bar: the latest notice, else the export outcome.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(notice) = &app.status {
        let colour = if notice.is_error() { Color::Red } else { Color::Gray };
        Line::from(Span::styled(notice.text(), Style::default().fg(colour)))
    } else {
        match &app.export_status {
            ExportStatus::Success(path) => Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(format!("Report exported to {}", path)),
            ]),
            ExportStatus::Error(e) => Line::from(Span::styled(
                format!("✗ Export failed: {}", e),
                Style::default().fg(Color::Red),
            )),
            ExportStatus::Idle => Line::from(Span::styled(
                format!("Session: {}", app.session.user_id),
                Style::default().fg(Color::DarkGray),
            )),
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
