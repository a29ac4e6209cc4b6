// src/ui/widgets/confirm_popup.rs

use crate::app::App;
use super::disclaimer_popup::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Asks the user to confirm that their stored reports should be deleted.
pub fn render_clear_confirmation(frame: &mut Frame, app: &App, area: Rect) {
    let text = Text::from(vec![
        Line::from("CLEAR SCAN HISTORY".bold().red()),
        Line::from(""),
        Line::from(format!(
            "This permanently deletes {} stored report(s) for {}.",
            app.history.len(),
            app.session.user_id
        )),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from("Press ".bold() + "Y".bold().yellow() + " to delete, any other key to keep them".bold()),
    ]);

    let block = Block::default()
        .title("Confirm")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(50, 30, area);
    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
