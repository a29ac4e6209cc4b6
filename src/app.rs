// src/app.rs

use std::net::Ipv4Addr;
use std::path::Path;

use once_cell::sync::Lazy;
use ratatui::widgets::{ListState, ScrollbarState, TableState};
use regex::Regex;
use strum::IntoEnumIterator;
use tracing::{error, info, warn};

use crate::config::Session;
use crate::core::models::{ScanError, ScanProgress, ScanResult, SystemType};
use crate::core::report;
use crate::core::scanner::CancelToken;
use crate::core::store::{ReportStore, ScanRecord};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

static IPV4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9](?:\.[a-zA-Z]{2,})+$").unwrap()
});

/// Messages sent from the scan task to the UI loop.
#[derive(Debug)]
pub enum ScanEvent {
    Progress(ScanProgress),
    Finished(Result<ScanResult, ScanError>),
}

/// A one-line message under the input. Errors are drawn in red, the rest neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
    History,
}

/// Everything the scan task needs to start.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub target: String,
    pub system_type: SystemType,
    pub cancel: CancelToken,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub show_disclaimer: bool,
    pub session: Session,
    pub input: String,
    pub system_type: SystemType,
    /// One-line notice shown under the input (validation errors, access denied, store outcomes).
    pub status: Option<Notice>,
    pub progress: Option<ScanProgress>,
    pub spinner_frame: usize,
    pub scan_result: Option<ScanResult>,
    pub analysis_list_state: ListState,
    pub show_report: bool,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub export_status: ExportStatus,
    pub history: Vec<ScanRecord>,
    pub history_state: TableState,
    /// Set by the first clear request; the rows go only once it is confirmed.
    pub confirm_clear: bool,
    cancel: Option<CancelToken>,
    store: Option<Box<dyn ReportStore>>,
}

impl App {
    pub fn new(session: Session, store: Option<Box<dyn ReportStore>>) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            show_disclaimer: true,
            session,
            input: String::new(),
            system_type: SystemType::SmartPort,
            status: None,
            progress: None,
            spinner_frame: 0,
            scan_result: None,
            analysis_list_state: ListState::default(),
            show_report: false,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            export_status: ExportStatus::Idle,
            history: Vec::new(),
            history_state: TableState::default(),
            confirm_clear: false,
            cancel: None,
            store,
        }
    }

    // --- Idle ---

    pub fn next_system_type(&mut self) {
        let all: Vec<SystemType> = SystemType::iter().collect();
        let pos = all.iter().position(|s| *s == self.system_type).unwrap_or(0);
        self.system_type = all[(pos + 1) % all.len()];
    }

    pub fn previous_system_type(&mut self) {
        let all: Vec<SystemType> = SystemType::iter().collect();
        let pos = all.iter().position(|s| *s == self.system_type).unwrap_or(0);
        self.system_type = all[(pos + all.len() - 1) % all.len()];
    }

    /// Validates the input and switches to `Scanning`.
    ///
    /// Returns `None` (with `status` set) if the session may not scan or the
    /// target is invalid.
    pub fn begin_scan(&mut self) -> Option<ScanRequest> {
        if !self.session.is_admin {
            warn!(user = %self.session.user_id, "Scan refused, session is not an admin.");
            self.status = Some(Notice::Error(access_denied()));
            return None;
        }
        let target = match normalize_target(&self.input) {
            Ok(t) => t,
            Err(msg) => {
                self.status = Some(Notice::Error(msg));
                return None;
            }
        };

        let cancel = CancelToken::new();
        self.cancel = Some(cancel.clone());
        self.status = None;
        self.progress = None;
        self.state = AppState::Scanning;
        info!(scan_target = %target, system_type = %self.system_type, "Scan requested.");

        Some(ScanRequest {
            target,
            system_type: self.system_type,
            cancel,
        })
    }

    // --- Scanning ---

    pub fn cancel_scan(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    pub fn apply_event(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::Progress(progress) => self.progress = Some(progress),
            ScanEvent::Finished(Ok(result)) => {
                self.cancel = None;
                self.record_result(&result);
                self.show_result(result);
            }
            ScanEvent::Finished(Err(ScanError::Cancelled)) => {
                self.cancel = None;
                self.progress = None;
                self.state = AppState::Idle;
                self.status = Some(Notice::Info("Scan cancelled.".to_string()));
            }
            ScanEvent::Finished(Err(e)) => {
                self.cancel = None;
                self.progress = None;
                self.state = AppState::Idle;
                self.status = Some(Notice::Error(format!("Scan failed: {}", e)));
            }
        }
    }

    fn record_result(&mut self, result: &ScanResult) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let outcome = result
            .to_record(&self.session.user_id)
            .and_then(|record| store.insert(record));
        if let Err(e) = outcome {
            error!(error = %e, scan_id = %result.scan_id, "Failed to store scan in history.");
            self.status = Some(Notice::Error(format!("Could not save to history: {}", e)));
        }
    }

    fn show_result(&mut self, result: ScanResult) {
        self.analysis_list_state = ListState::default();
        if !result.vulnerabilities.is_empty() {
            self.analysis_list_state.select(Some(0));
        }
        self.scan_result = Some(result);
        self.progress = None;
        self.show_report = false;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
        self.state = AppState::Finished;
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Scanning {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    // --- Finished ---

    pub fn select_next_finding(&mut self) {
        let len = self.scan_result.as_ref().map_or(0, |r| r.vulnerabilities.len());
        if len == 0 {
            return;
        }
        let next = self.analysis_list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.analysis_list_state.select(Some(next));
    }

    pub fn select_previous_finding(&mut self) {
        if let Some(i) = self.analysis_list_state.selected() {
            self.analysis_list_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn toggle_report(&mut self) {
        self.show_report = !self.show_report;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }

    pub fn report_text(&self) -> Option<String> {
        self.scan_result.as_ref().map(report::render)
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self, content_lines: usize) {
        self.scroll_offset = (self.scroll_offset + 1).min(content_lines.saturating_sub(1));
        self.report_scroll_state = self
            .report_scroll_state
            .content_length(content_lines)
            .position(self.scroll_offset);
    }

    /// Writes the synthesized report to `<dir>/<scan_id>.txt`.
    pub fn export_report(&mut self, dir: &Path) {
        let Some(result) = &self.scan_result else {
            return;
        };
        let path = dir.join(format!("{}.txt", result.scan_id));
        let outcome = std::fs::create_dir_all(dir)
            .and_then(|_| std::fs::write(&path, report::render(result)));
        self.export_status = match outcome {
            Ok(()) => {
                info!(path = %path.display(), "Report exported.");
                ExportStatus::Success(path.display().to_string())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Report export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    // --- History ---

    pub fn history_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Loads the session user's history rows and switches to the history view.
    pub fn open_history(&mut self) {
        if !self.session.is_admin {
            self.status = Some(Notice::Error(access_denied()));
            return;
        }
        let Some(store) = self.store.as_ref() else {
            self.status = Some(Notice::Info("History is disabled in the configuration.".to_string()));
            return;
        };
        match store.list(Some(&self.session.user_id)) {
            Ok(rows) => {
                self.history = rows;
                self.confirm_clear = false;
                self.history_state = TableState::default();
                if !self.history.is_empty() {
                    self.history_state.select(Some(0));
                }
                self.state = AppState::History;
            }
            Err(e) => {
                error!(error = %e, "Failed to load history.");
                self.status = Some(Notice::Error(format!("Could not load history: {}", e)));
            }
        }
    }

    pub fn select_next_record(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let last = self.history.len() - 1;
        let next = self.history_state.selected().map_or(0, |i| (i + 1).min(last));
        self.history_state.select(Some(next));
    }

    pub fn select_previous_record(&mut self) {
        if let Some(i) = self.history_state.selected() {
            self.history_state.select(Some(i.saturating_sub(1)));
        }
    }

    /// Rebuilds the selected row into a result and shows it.
    pub fn open_selected_record(&mut self) {
        let Some(record) = self.history_state.selected().and_then(|i| self.history.get(i)).cloned() else {
            return;
        };
        match ScanResult::from_record(&record) {
            Ok(result) => self.show_result(result),
            Err(e) => {
                warn!(id = %record.id, error = %e, "History row could not be opened.");
                self.status = Some(Notice::Error(format!("Could not open report: {}", e)));
            }
        }
    }

    /// Asks for confirmation before the session user's rows are deleted.
    pub fn request_clear_history(&mut self) {
        if self.history.is_empty() {
            self.status = Some(Notice::Info("History is already empty.".to_string()));
            return;
        }
        self.confirm_clear = true;
    }

    pub fn cancel_clear_history(&mut self) {
        self.confirm_clear = false;
    }

    /// Deletes the session user's rows and reloads the view. Does nothing
    /// unless `request_clear_history` came first.
    pub fn confirm_clear_history(&mut self) {
        if !std::mem::take(&mut self.confirm_clear) {
            return;
        }
        let Some(store) = self.store.as_mut() else {
            return;
        };
        match store.clear(&self.session.user_id) {
            Ok(removed) => {
                info!(user = %self.session.user_id, removed, "History cleared.");
                self.open_history();
                self.status = Some(Notice::Info(format!(
                    "Removed {} report(s) from history.",
                    removed
                )));
            }
            Err(e) => {
                error!(error = %e, "Failed to clear history.");
                self.status = Some(Notice::Error(format!("Could not clear history: {}", e)));
            }
        }
    }

    // --- Global ---

    pub fn acknowledge_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    pub fn quit(&mut self) {
        self.cancel_scan();
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.status = None;
        self.progress = None;
        self.scan_result = None;
        self.analysis_list_state = ListState::default();
        self.show_report = false;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
    }
}

fn access_denied() -> String {
    "Access Denied: this area is restricted to authorized personnel only.".to_string()
}

/// Turns raw user input into a scan target.
///
/// A literal `http://` or `https://` prefix, a `:port` suffix and any path
/// are cut off. The remaining text is checked as typed, without any host
/// rewriting, and must be an IPv4 address or a domain name.
pub fn normalize_target(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Please enter an IP address or domain.".to_string());
    }

    let authority = strip_scheme(raw)
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if port.parse::<u16>().is_ok() => host,
        _ => authority,
    };

    let valid = if IPV4_RE.is_match(host) {
        host.parse::<Ipv4Addr>().is_ok()
    } else {
        DOMAIN_RE.is_match(host)
    };
    if valid {
        Ok(host.to_string())
    } else {
        Err("Please enter a valid IP address or domain name.".to_string())
    }
}

fn strip_scheme(raw: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = raw.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &raw[scheme.len()..];
            }
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::Simulator;
    use crate::core::store::MemoryStore;

    fn admin() -> Session {
        Session {
            user_id: "alice".into(),
            is_admin: true,
        }
    }

    async fn finished_app() -> App {
        let mut app = App::new(admin(), Some(Box::new(MemoryStore::default())));
        app.input = "10.0.0.5".into();
        let request = app.begin_scan().unwrap();
        let result = Simulator::new(0.0)
            .run(&request.target, request.system_type, |_| {}, Some(&request.cancel))
            .await
            .unwrap();
        app.apply_event(ScanEvent::Finished(Ok(result)));
        app
    }

    #[test]
    fn targets_are_normalized_and_validated() {
        assert_eq!(normalize_target(" 10.0.0.5 "), Ok("10.0.0.5".into()));
        assert_eq!(normalize_target("port.example.com"), Ok("port.example.com".into()));
        assert_eq!(
            normalize_target("https://port.example.com:8443/login"),
            Ok("port.example.com".into())
        );
        assert!(normalize_target("").is_err());
        assert!(normalize_target("999.1.1.1").is_err());
        assert!(normalize_target("localhost").is_err());
        assert!(normalize_target("not a host").is_err());
        assert_eq!(normalize_target("HTTP://10.0.0.5:8080"), Ok("10.0.0.5".into()));
    }

    #[test]
    fn targets_are_checked_as_typed() {
        // Shorthand and hex IPv4 forms, userinfo and other schemes are not rewritten.
        for raw in [
            "10",
            "1.2.3",
            "0x7f.1",
            "0x7f.0.0.1",
            "user@port.example.com",
            "https://user@port.example.com/",
            "ftp://port.example.com",
            "port.example.com:http",
        ] {
            assert!(normalize_target(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn system_type_selection_wraps() {
        let mut app = App::new(admin(), None);
        app.previous_system_type();
        assert_eq!(app.system_type, SystemType::LogisticsSystem);
        app.next_system_type();
        app.next_system_type();
        assert_eq!(app.system_type, SystemType::ShipNetwork);
    }

    #[test]
    fn non_admin_sessions_cannot_scan_or_browse() {
        let mut app = App::new(
            Session {
                user_id: "guest".into(),
                is_admin: false,
            },
            Some(Box::new(MemoryStore::default())),
        );
        app.input = "10.0.0.5".into();
        assert!(app.begin_scan().is_none());
        assert_eq!(app.state, AppState::Idle);
        let notice = app.status.clone().unwrap();
        assert!(notice.is_error());
        assert!(notice.text().starts_with("Access Denied"));

        app.open_history();
        assert_eq!(app.state, AppState::Idle);
    }

    #[test]
    fn invalid_target_keeps_the_app_idle() {
        let mut app = App::new(admin(), None);
        app.input = "bad target".into();
        assert!(app.begin_scan().is_none());
        assert_eq!(app.state, AppState::Idle);
        assert!(app.status.is_some());
    }

    #[test]
    fn cancellation_returns_to_idle() {
        let mut app = App::new(admin(), None);
        app.input = "10.0.0.5".into();
        let request = app.begin_scan().unwrap();
        app.cancel_scan();
        assert!(request.cancel.is_cancelled());
        app.apply_event(ScanEvent::Finished(Err(ScanError::Cancelled)));
        assert_eq!(app.state, AppState::Idle);
        assert_eq!(app.status, Some(Notice::Info("Scan cancelled.".into())));
    }

    #[tokio::test]
    async fn finished_scan_is_shown_and_stored() {
        let mut app = finished_app().await;
        assert_eq!(app.state, AppState::Finished);
        assert_eq!(app.analysis_list_state.selected(), Some(0));

        app.open_history();
        assert_eq!(app.state, AppState::History);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].user_id, "alice");

        let scan_id = app.history[0].id.clone();
        app.open_selected_record();
        assert_eq!(app.state, AppState::Finished);
        assert_eq!(app.scan_result.as_ref().unwrap().scan_id, scan_id);
    }

    #[tokio::test]
    async fn clearing_history_needs_confirmation() {
        let mut app = finished_app().await;
        app.open_history();

        app.request_clear_history();
        assert!(app.confirm_clear);
        assert_eq!(app.history.len(), 1);

        app.cancel_clear_history();
        app.confirm_clear_history();
        app.open_history();
        assert_eq!(app.history.len(), 1);

        app.request_clear_history();
        app.confirm_clear_history();
        assert!(!app.confirm_clear);
        assert!(app.history.is_empty());
        assert_eq!(
            app.status,
            Some(Notice::Info("Removed 1 report(s) from history.".into()))
        );
    }

    #[test]
    fn clearing_an_empty_history_asks_nothing() {
        let mut app = App::new(admin(), Some(Box::new(MemoryStore::default())));
        app.open_history();
        app.request_clear_history();
        assert!(!app.confirm_clear);
        assert!(!app.status.as_ref().unwrap().is_error());
    }

    #[tokio::test]
    async fn finding_selection_is_bounded() {
        let mut app = finished_app().await;
        let len = app.scan_result.as_ref().unwrap().vulnerabilities.len();
        for _ in 0..len + 5 {
            app.select_next_finding();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(len - 1));
        for _ in 0..len + 5 {
            app.select_previous_finding();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn export_writes_the_rendered_report() {
        let mut app = finished_app().await;
        let dir = tempfile::tempdir().unwrap();
        app.export_report(dir.path());

        let result = app.scan_result.as_ref().unwrap();
        let path = dir.path().join(format!("{}.txt", result.scan_id));
        assert_eq!(
            app.export_status,
            ExportStatus::Success(path.display().to_string())
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report::render(result));
    }
}
