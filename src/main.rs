// src/main.rs

use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use crate::app::{App, AppState, ScanEvent, ScanRequest};
use crate::config::AppConfig;
use crate::core::scanner::Simulator;
use crate::core::store::{JsonFileStore, MemoryStore, ReportStore};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;
    let config = config::load_default()?;
    info!(
        user = %config.session.user_id,
        admin = config.session.is_admin,
        pace = config.scan.pace,
        config_file = ?config.config_path,
        "Starting {}.",
        env!("CARGO_PKG_NAME")
    );

    let store: Box<dyn ReportStore> = if config.history.enabled {
        let store = JsonFileStore::new(config.history.path.clone());
        info!(path = %store.path().display(), "History enabled.");
        Box::new(store)
    } else {
        info!("History persistence disabled, keeping this session's scans in memory.");
        Box::new(MemoryStore::default())
    };
    let mut app = App::new(config.session.clone(), Some(store));

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let outcome = run(&mut terminal, &mut app, &config).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;

    if let Err(e) = &outcome {
        error!(error = %e, "Application exited with an error.");
    }
    outcome
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(app, config, &tx)?;
        }

        while let Ok(scan_event) = rx.try_recv() {
            app.apply_event(scan_event);
        }
        app.on_tick();
    }
    Ok(())
}

/// Starts the simulated scan on its own task; progress and the outcome come back over `tx`.
fn spawn_scan(request: ScanRequest, pace: f64, tx: &mpsc::UnboundedSender<ScanEvent>) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let system_type: &'static str = request.system_type.into();
        let outcome = Simulator::new(pace)
            .run_scan(
                &request.target,
                system_type,
                |progress| {
                    let _ = progress_tx.send(ScanEvent::Progress(progress));
                },
                Some(&request.cancel),
            )
            .await;
        let _ = tx.send(ScanEvent::Finished(outcome));
    });
}

fn handle_events(app: &mut App, config: &AppConfig, tx: &mpsc::UnboundedSender<ScanEvent>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.quit();
            return Ok(());
        }
        if app.show_disclaimer {
            if key.code == KeyCode::Enter {
                app.acknowledge_disclaimer();
            }
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key, config, tx),
            AppState::Scanning => match key.code {
                KeyCode::Esc => app.cancel_scan(),
                KeyCode::Char('q') => app.quit(),
                _ => {}
            },
            AppState::Finished => handle_finished_input(app, key.code, config),
            AppState::History => handle_history_input(app, key.code),
        }
    }
    Ok(())
}

fn handle_idle_input(app: &mut App, key: KeyEvent, config: &AppConfig, tx: &mpsc::UnboundedSender<ScanEvent>) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => {
            app.input.push(c);
            app.status = None;
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Up => app.previous_system_type(),
        KeyCode::Down => app.next_system_type(),
        KeyCode::Tab => app.open_history(),
        KeyCode::Enter => {
            if let Some(request) = app.begin_scan() {
                spawn_scan(request, config.scan.pace, tx);
            }
        }
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode, config: &AppConfig) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('e') => app.export_report(&config.export.dir),
        KeyCode::Char('r') => app.toggle_report(),
        KeyCode::Tab | KeyCode::Char('h') => app.open_history(),
        KeyCode::Up if app.show_report => app.scroll_up(),
        KeyCode::Down if app.show_report => {
            let lines = app.report_text().map_or(0, |t| t.lines().count());
            app.scroll_down(lines);
        }
        KeyCode::Up => app.select_previous_finding(),
        KeyCode::Down => app.select_next_finding(),
        _ => {}
    }
}

fn handle_history_input(app: &mut App, key_code: KeyCode) {
    if app.confirm_clear {
        match key_code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear_history(),
            _ => app.cancel_clear_history(),
        }
        return;
    }
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => {
            app.status = None;
            app.state = if app.scan_result.is_some() {
                AppState::Finished
            } else {
                AppState::Idle
            };
        }
        KeyCode::Up => app.select_previous_record(),
        KeyCode::Down => app.select_next_record(),
        KeyCode::Enter => app.open_selected_record(),
        KeyCode::Char('c') => app.request_clear_history(),
        _ => {}
    }
}
