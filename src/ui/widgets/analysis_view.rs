// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::knowledge_base;
use crate::core::scanner::phases::{nominal_duration_ms, SCAN_PHASES};
use crate::core::models::Vulnerability;
use super::{history_view, report_view, severity_color};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    text::Line,
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.state {
        AppState::Idle => render_idle(frame, app, area),
        AppState::Scanning => render_progress(frame, app, area),
        AppState::History => history_view::render_history(frame, app, area),
        AppState::Finished if app.show_report => report_view::render_report(frame, app, area),
        AppState::Finished => render_findings(frame, app, area),
    }
}

fn render_idle(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Assessment");
    let catalog = knowledge_base::catalog_size(app.system_type);
    let text = Text::from(vec![
        Line::from(""),
        Line::from("Enter a target and pick the system type to assess."),
        Line::from(""),
        Line::from(format!(
            "{} checks are available for {}.",
            catalog,
            app.system_type.label()
        ))
        .fg(Color::DarkGray),
        Line::from(format!(
            "The simulated sequence runs {} phases, about {}s at normal pace.",
            SCAN_PHASES.len(),
            nominal_duration_ms() / 1000
        ))
        .fg(Color::DarkGray),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Assessment in progress");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Spinner + phase
            Constraint::Length(2), // Phase description
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let spinner_char = SPINNER_CHARS[app.spinner_frame];
    let (phase, description, percent, step) = match &app.progress {
        Some(p) => (p.phase, p.description, p.percent, format!("{}/{}", p.index, p.total)),
        None => ("Preparing scan", "", 0, String::new()),
    };

    let heading = Line::from(vec![
        Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
        Span::styled(phase, Style::default().bold()),
        Span::styled(format!("  {}", step), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(heading), chunks[0]);
    frame.render_widget(
        Paragraph::new(description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(percent))
        .label(format!("{}%", percent));
    frame.render_widget(gauge, chunks[2]);
}

fn render_findings(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Findings (Navigate with ↑ ↓)");
    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(0)])
        .split(inner_area);

    let Some(result) = &app.scan_result else {
        return;
    };

    let items: Vec<ListItem> = result.vulnerabilities.iter().map(finding_item).collect();
    let findings_list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let selected = app
        .analysis_list_state
        .selected()
        .and_then(|i| result.vulnerabilities.get(i));
    let details = match selected {
        Some(finding) => Paragraph::new(detail_text(finding)).wrap(Wrap { trim: true }),
        None => Paragraph::new("Select an item above to see details.").alignment(Alignment::Center),
    };
    frame.render_widget(details.block(detail_block), chunks[1]);

    frame.render_stateful_widget(findings_list, chunks[0], &mut app.analysis_list_state);
}

fn finding_item(finding: &Vulnerability) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<9}", finding.severity.as_ref().to_uppercase()),
            Style::default().fg(severity_color(finding.severity)),
        ),
        Span::styled(format!("[{}] ", finding.id), Style::default().fg(Color::DarkGray)),
        Span::raw(finding.name.as_str()),
    ]))
}

fn detail_text(finding: &Vulnerability) -> Text<'_> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::raw(finding.category.as_str()),
        ]),
    ];
    if let (Some(port), Some(service)) = (finding.port, &finding.service) {
        lines.push(Line::from(vec![
            Span::styled("Port/Service: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}/{}", port, service)),
        ]));
    }
    lines.extend([
        Line::from(""),
        Line::from("WHAT IT IS:".yellow().bold()),
        Line::from(finding.description.as_str()),
        Line::from(""),
        Line::from("HOW TO FIX:".yellow().bold()),
        Line::from(finding.recommendation.as_str()),
    ]);
    Text::from(lines)
}
