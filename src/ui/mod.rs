// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::input::render_system_type(frame, app, layout.system_type);
    widgets::input::render_status(frame, app, layout.status);

    // The main panel switches between instructions, scan progress, findings,
    // the full report and the history table depending on the state.
    widgets::analysis_view::render_analysis_view(frame, app, layout.report);

    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.confirm_clear {
        widgets::confirm_popup::render_clear_confirmation(frame, app, frame.area());
    }

    if app.show_disclaimer {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, frame.area());
    }
}
