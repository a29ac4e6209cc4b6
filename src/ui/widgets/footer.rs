// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays the actions available in the current state.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = match app.state {
        AppState::Idle => vec![
            key("Enter"),
            Span::raw(" scan, "),
            key("↑ ↓"),
            Span::raw(" system type, "),
        ],
        AppState::Scanning => vec![
            Span::raw("Scanning... "),
            key("Esc"),
            Span::raw(" cancel, "),
            key("Q"),
            Span::raw(" quit."),
        ],
        AppState::Finished => vec![
            key("[N]"),
            Span::raw("ew Scan, "),
            key("[E]"),
            Span::raw("xport, "),
            key("[R]"),
            Span::raw(if app.show_report { " findings, " } else { "eport, " }),
        ],
        AppState::History if app.confirm_clear => vec![
            key("[Y]"),
            Span::raw(" delete history, any other key cancels."),
        ],
        AppState::History => vec![
            key("Enter"),
            Span::raw(" open, "),
            key("[C]"),
            Span::raw("lear, "),
            key("Esc"),
            Span::raw(" back, "),
            key("[Q]"),
            Span::raw("uit"),
        ],
    };

    // History is reachable from the idle and finished screens when a store is configured.
    if matches!(app.state, AppState::Idle | AppState::Finished) {
        if app.history_enabled() {
            spans.extend([key("Tab"), Span::raw(" history, ")]);
        }
        let quit = if app.state == AppState::Idle { "Esc" } else { "[Q]" };
        spans.extend([key(quit), Span::raw(" quit.")]);
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
