// src/ui/widgets/report_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the synthesized plain-text report with a vertical scrollbar.
pub fn render_report(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = app.report_text().unwrap_or_default();
    let line_count = report.lines().count();
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(line_count)
        .position(app.scroll_offset);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Security Assessment Report (Scroll with ↑ ↓)");
    let paragraph = Paragraph::new(report)
        .block(block)
        .scroll((app.scroll_offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓")),
        area.inner(Margin { vertical: 1, horizontal: 0 }),
        &mut app.report_scroll_state,
    );
}
