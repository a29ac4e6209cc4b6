// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the disclaimer popup on top of the existing UI.
///
/// The popup is a centered, bordered window explaining that every result is
/// simulated. `Clear` wipes the area first so the UI underneath does not show
/// through.
///
/// # Arguments
/// * `frame` - A mutable reference to the `Frame` used for rendering the TUI.
/// * `area` - The `Rect` representing the total area available for rendering.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("SIMULATED ASSESSMENT".bold().yellow()),
        Line::from(""),
        Line::from("Harbor RS produces mock cyber-risk assessments of maritime and port systems for training and demonstration."),
        Line::from(""),
        Line::from("No packet is ever sent to the target you enter. Open ports, findings, scores and timings are drawn at random from a fixed catalog and do NOT describe the real state of any system."),
        Line::from(""),
        Line::from("By continuing you acknowledge that:"),
        Line::from("1. Reports generated here must not be presented as the result of a real security test."),
        Line::from("2. Real assessments require written authorization from the owner of the system."),
        Line::from("3. The authors assume NO liability for decisions taken on the basis of simulated output."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to Acknowledge and Continue".bold()),
    ]);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 70, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Returns a `Rect` of the given percentage size, centered within `r`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_inside_the_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 70, frame);
        assert_eq!(popup.width, 70);
        assert_eq!(popup.height, 28);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 6);
    }
}
