// src/core/scanner/sampling.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::knowledge_base::{self, BASE_PORTS, FindingDetail};
use crate::core::models::{SystemType, Vulnerability};

/// Inclusive bounds on the number of findings a scan reports.
pub const MIN_FINDINGS: usize = 8;
pub const MAX_FINDINGS: usize = 17;

/// Inclusive bounds on the number of draws from the system port profile.
const MIN_EXTRA_PORT_DRAWS: usize = 3;
const MAX_EXTRA_PORT_DRAWS: usize = 7;

/// Inclusive bounds on the reported scan duration, in seconds.
const MIN_SCAN_SECONDS: u32 = 90;
const MAX_SCAN_SECONDS: u32 = 149;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Picks between `MIN_FINDINGS` and `MAX_FINDINGS` distinct entries from the
/// catalog of `system_type`, in random order.
pub fn sample_findings<R: Rng + ?Sized>(rng: &mut R, system_type: SystemType) -> Vec<Vulnerability> {
    let candidates: Vec<&'static FindingDetail> = knowledge_base::catalog(system_type).collect();
    let count = rng
        .gen_range(MIN_FINDINGS..=MAX_FINDINGS)
        .min(candidates.len());
    debug!(%system_type, count, catalog = candidates.len(), "Sampling findings.");

    candidates
        .choose_multiple(rng, count)
        .map(|detail| Vulnerability::from(*detail))
        .collect()
}

/// Builds the open port list: the base ports, every port a sampled finding is
/// attached to, and a few random draws from the system's port profile.
///
/// The result is sorted ascending without duplicates.
pub fn derive_open_ports<R: Rng + ?Sized>(
    rng: &mut R,
    system_type: SystemType,
    findings: &[Vulnerability],
) -> Vec<u16> {
    let mut ports: BTreeSet<u16> = BASE_PORTS.into_iter().collect();
    ports.extend(findings.iter().filter_map(|f| f.port));

    let profile = knowledge_base::system_ports(system_type);
    let draws = rng.gen_range(MIN_EXTRA_PORT_DRAWS..=MAX_EXTRA_PORT_DRAWS);
    for _ in 0..draws {
        if let Some(port) = profile.choose(rng) {
            ports.insert(*port);
        }
    }

    ports.into_iter().collect()
}

/// Generates a scan identifier of the form `SCAN-<unix millis>-<base36 suffix>`.
pub fn scan_id<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("SCAN-{}-{}", now.timestamp_millis(), suffix)
}

/// Reported duration of a scan, in seconds.
pub fn scan_duration<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_SCAN_SECONDS..=MAX_SCAN_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn sample_size_stays_in_range_and_ids_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for system_type in SystemType::iter() {
            for _ in 0..50 {
                let findings = sample_findings(&mut rng, system_type);
                assert!((MIN_FINDINGS..=MAX_FINDINGS).contains(&findings.len()));
                let ids: HashSet<_> = findings.iter().map(|f| f.id.as_str()).collect();
                assert_eq!(ids.len(), findings.len());
            }
        }
    }

    #[test]
    fn samples_come_from_the_requested_catalog() {
        let mut rng = StdRng::seed_from_u64(11);
        let allowed: HashSet<_> = knowledge_base::catalog(SystemType::LogisticsSystem)
            .map(|f| f.id)
            .collect();
        for _ in 0..50 {
            for f in sample_findings(&mut rng, SystemType::LogisticsSystem) {
                assert!(allowed.contains(f.id.as_str()), "{} not in catalog", f.id);
            }
        }
    }

    #[test]
    fn open_ports_are_sorted_unique_and_include_base_and_finding_ports() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let findings = sample_findings(&mut rng, SystemType::SmartPort);
            let ports = derive_open_ports(&mut rng, SystemType::SmartPort, &findings);

            assert!(ports.windows(2).all(|w| w[0] < w[1]));
            for base in BASE_PORTS {
                assert!(ports.contains(&base));
            }
            for port in findings.iter().filter_map(|f| f.port) {
                assert!(ports.contains(&port));
            }
            assert!(ports.len() > BASE_PORTS.len());
        }
    }

    #[test]
    fn scan_id_has_timestamp_and_suffix() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = scan_id(&mut rng, now);
        let parts: Vec<_> = id.split('-').collect();
        assert_eq!(parts[0], "SCAN");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn scan_duration_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert!((MIN_SCAN_SECONDS..=MAX_SCAN_SECONDS).contains(&scan_duration(&mut rng)));
        }
    }
}
