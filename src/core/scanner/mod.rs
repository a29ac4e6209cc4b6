// src/core/scanner/mod.rs

// This file is the public interface of the `scanner` module: the phase table,
// the random sampling helpers and the simulator that ties them together.
pub mod phases;
pub mod sampling;

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::core::knowledge_base;
use crate::core::models::{ScanError, ScanPhase, ScanProgress, ScanResult, SystemType};
use crate::core::scoring;
use self::phases::{SCAN_PHASES, percent_complete};

/// A cheap, clonable flag used to abort a running scan between phases.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

fn check_cancelled(cancel: Option<&CancelToken>) -> Result<(), ScanError> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(ScanError::Cancelled),
        _ => Ok(()),
    }
}

/// Runs simulated scans.
///
/// The random source is injected so that tests can use a seeded generator;
/// `Simulator::new` uses a fresh entropy-seeded one, which makes repeated
/// scans of the same target differ.
pub struct Simulator<R = StdRng> {
    rng: R,
    /// Multiplier applied to every phase duration. `0.0` disables the delays.
    pace: f64,
}

impl Simulator<StdRng> {
    pub fn new(pace: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), pace)
    }
}

impl<R: Rng> Simulator<R> {
    pub fn with_rng(rng: R, pace: f64) -> Self {
        let pace = if pace.is_finite() { pace.max(0.0) } else { 0.0 };
        Self { rng, pace }
    }

    /// Executes a full simulated scan against `target`.
    ///
    /// `system_type` is validated before anything else happens, so an unknown
    /// value fails without a single progress notification. Each phase reports
    /// its progress through `on_progress` and then sleeps for its (paced)
    /// duration. `cancel` is checked before every phase and after every delay.
    ///
    /// # Arguments
    /// * `target` - The host or address being "assessed". Not validated here.
    /// * `system_type` - The wire name of a `SystemType` (e.g. "smart_port").
    /// * `on_progress` - Called once per phase, in order.
    /// * `cancel` - Optional cancellation hook.
    pub async fn run_scan<F>(
        &mut self,
        target: &str,
        system_type: &str,
        on_progress: F,
        cancel: Option<&CancelToken>,
    ) -> Result<ScanResult, ScanError>
    where
        F: FnMut(ScanProgress),
    {
        let system_type = SystemType::from_str(system_type).map_err(|_| {
            warn!(system_type, "Rejected scan with unknown system type.");
            ScanError::InvalidCategory(system_type.to_string())
        })?;
        self.run(target, system_type, on_progress, cancel).await
    }

    /// Same as `run_scan`, for an already validated system type.
    pub async fn run<F>(
        &mut self,
        target: &str,
        system_type: SystemType,
        mut on_progress: F,
        cancel: Option<&CancelToken>,
    ) -> Result<ScanResult, ScanError>
    where
        F: FnMut(ScanProgress),
    {
        info!(scan_target = target, %system_type, "Starting simulated scan.");
        let total = SCAN_PHASES.len();

        for (i, phase) in SCAN_PHASES.iter().enumerate() {
            check_cancelled(cancel)?;

            let progress = ScanProgress {
                phase: phase.label,
                description: phase.description,
                index: i + 1,
                total,
                percent: percent_complete(i + 1, total),
            };
            debug!(phase = phase.label, percent = progress.percent, "Running phase.");
            on_progress(progress);

            let delay = self.phase_delay(phase);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            if let Err(e) = check_cancelled(cancel) {
                info!(phase = phase.label, "Scan cancelled.");
                return Err(e);
            }
        }

        let result = self.compile_result(target, system_type);
        info!(
            scan_id = %result.scan_id,
            risk_score = result.risk_score,
            risk_level = %result.risk_level,
            findings = result.vulnerabilities.len(),
            "Simulated scan finished."
        );
        Ok(result)
    }

    /// Samples the catalog and derives every field of the result.
    fn compile_result(&mut self, target: &str, system_type: SystemType) -> ScanResult {
        let rng = &mut self.rng;
        let now = Utc::now();

        let vulnerabilities = sampling::sample_findings(rng, system_type);
        let open_ports = sampling::derive_open_ports(rng, system_type, &vulnerabilities);
        let risk_score = scoring::score(&vulnerabilities);
        let summary = scoring::summarize(knowledge_base::catalog_size(system_type), &vulnerabilities);

        ScanResult {
            scan_id: sampling::scan_id(rng, now),
            target: target.to_string(),
            system_type,
            timestamp: now,
            risk_score,
            risk_level: scoring::level(risk_score),
            open_ports,
            vulnerabilities,
            scan_duration: sampling::scan_duration(rng),
            summary,
        }
    }

    fn phase_delay(&self, phase: &ScanPhase) -> Duration {
        Duration::from_millis((phase.duration_ms as f64 * self.pace).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::BASE_PORTS;
    use crate::core::scanner::sampling::{MAX_FINDINGS, MIN_FINDINGS};
    use strum::IntoEnumIterator;

    fn assert_invariants(result: &ScanResult) {
        assert!(result.risk_score <= 100);
        assert_eq!(result.risk_level, scoring::level(result.risk_score));
        assert!(result.open_ports.windows(2).all(|w| w[0] < w[1]));
        for base in BASE_PORTS {
            assert!(result.open_ports.contains(&base));
        }
        let summary = result.summary;
        assert_eq!(summary.total_checks, knowledge_base::catalog_size(result.system_type));
        assert_eq!(
            summary.passed_checks + result.vulnerabilities.len(),
            summary.total_checks
        );
        assert_eq!(
            summary.failed_checks + summary.warnings,
            result.vulnerabilities.len()
        );
    }

    #[tokio::test]
    async fn every_system_type_yields_a_valid_result() {
        let mut simulator = Simulator::with_rng(StdRng::seed_from_u64(42), 0.0);
        for system_type in SystemType::iter() {
            let result = simulator
                .run_scan("10.0.0.5", system_type.into(), |_| {}, None)
                .await
                .unwrap();
            assert_eq!(result.system_type, system_type);
            assert_eq!(result.target, "10.0.0.5");
            assert_invariants(&result);
        }
    }

    #[tokio::test]
    async fn smart_port_example() {
        let mut simulator = Simulator::new(0.0);
        let result = simulator
            .run_scan("10.0.0.5", "smart_port", |_| {}, None)
            .await
            .unwrap();
        assert!((MIN_FINDINGS..=MAX_FINDINGS).contains(&result.vulnerabilities.len()));
        for port in [22, 80, 443] {
            assert!(result.open_ports.contains(&port));
        }
        assert!(result.scan_id.starts_with("SCAN-"));
        assert_invariants(&result);
    }

    #[tokio::test]
    async fn progress_is_reported_for_every_phase_in_order() {
        let mut simulator = Simulator::new(0.0);
        let mut seen = Vec::new();
        simulator
            .run_scan("port.example.com", "ship_network", |p| seen.push(p), None)
            .await
            .unwrap();

        assert_eq!(seen.len(), SCAN_PHASES.len());
        assert_eq!(seen[0].phase, "Network Discovery");
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen.last().unwrap().percent, 100);
        assert!(seen.windows(2).all(|w| w[0].percent <= w[1].percent));
    }

    #[tokio::test]
    async fn unknown_system_type_fails_before_any_progress() {
        let mut simulator = Simulator::new(0.0);
        let mut calls = 0;
        let err = simulator
            .run_scan("10.0.0.5", "unknown_type", |_| calls += 1, None)
            .await
            .unwrap_err();
        assert_eq!(err, ScanError::InvalidCategory("unknown_type".into()));
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn repeated_scans_differ() {
        let mut simulator = Simulator::new(0.0);
        let first = simulator.run_scan("10.0.0.5", "smart_port", |_| {}, None).await.unwrap();
        let second = simulator.run_scan("10.0.0.5", "smart_port", |_| {}, None).await.unwrap();
        assert_ne!(first.scan_id, second.scan_id);
        assert_invariants(&first);
        assert_invariants(&second);
    }

    #[tokio::test]
    async fn cancellation_stops_between_phases() {
        let mut simulator = Simulator::new(0.0);
        let token = CancelToken::new();
        let mut calls = 0;
        let err = simulator
            .run_scan(
                "10.0.0.5",
                "logistics_system",
                |p| {
                    calls += 1;
                    if p.index == 3 {
                        token.cancel();
                    }
                },
                Some(&token),
            )
            .await
            .unwrap_err();
        assert_eq!(err, ScanError::Cancelled);
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn phase_delays_follow_the_pace() {
        let start = tokio::time::Instant::now();
        let mut simulator = Simulator::new(0.5);
        simulator.run_scan("10.0.0.5", "smart_port", |_| {}, None).await.unwrap();
        let expected = Duration::from_millis(phases::nominal_duration_ms() / 2);
        assert!(start.elapsed() >= expected);
    }

    #[test]
    fn invalid_pace_disables_delays() {
        let simulator = Simulator::with_rng(StdRng::seed_from_u64(0), f64::NAN);
        assert!(simulator.phase_delay(&SCAN_PHASES[0]).is_zero());
        let simulator = Simulator::with_rng(StdRng::seed_from_u64(0), -2.0);
        assert!(simulator.phase_delay(&SCAN_PHASES[0]).is_zero());
    }
}
