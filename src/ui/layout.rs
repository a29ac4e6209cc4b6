// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each `Rect` is the area of one widget, so widgets never have to
/// re-calculate dimensions themselves.
pub struct AppLayout {
    pub input: Rect,
    pub system_type: Rect,
    pub status: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Creates the complete application layout.
///
/// Vertically: the input row, a one-line status bar, the content area and the
/// footer. The input row holds the target field and the system type selector
/// side by side; the content area holds the main panel and the summary.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[2]);

    AppLayout {
        input: input_chunks[0],
        system_type: input_chunks[1],
        status: main_chunks[1],
        report: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[3],
    }
}
