// src/config.rs

use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use tracing::{debug, info};

use crate::logging::{get_config_dir, get_data_dir, PROJECT_NAME};

/// Settings in effect after defaults, the config file and the environment
/// have been merged, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scan: ScanSettings,
    pub session: Session,
    pub history: HistorySettings,
    pub export: ExportSettings,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    /// Multiplier for the simulated phase delays. `0.0` runs scans instantly.
    pub pace: f64,
}

/// The identity the application acts as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    /// Only admins may start scans or browse history.
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySettings {
    pub enabled: bool,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub dir: PathBuf,
}

impl AppConfig {
    fn defaults(data_dir: &Path, user: Option<String>) -> Self {
        Self {
            scan: ScanSettings { pace: 1.0 },
            session: Session {
                user_id: user.unwrap_or_else(|| "operator".to_string()),
                is_admin: true,
            },
            history: HistorySettings {
                enabled: true,
                path: data_dir.join("history.json"),
            },
            export: ExportSettings {
                dir: data_dir.join("reports"),
            },
            config_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    scan: Option<RawScanConfig>,
    session: Option<RawSessionConfig>,
    history: Option<RawHistoryConfig>,
    export: Option<RawExportConfig>,
}

#[derive(Debug, Deserialize)]
struct RawScanConfig {
    pace: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSessionConfig {
    user: Option<String>,
    admin: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawHistoryConfig {
    enabled: Option<bool>,
    path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawExportConfig {
    dir: Option<PathBuf>,
}

pub fn default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Loads the configuration from the default locations and the process environment.
pub fn load_default() -> Result<AppConfig> {
    load(&default_config_path(), &get_data_dir(), |key| std::env::var(key).ok())
}

/// Loads the configuration.
///
/// # Arguments
/// * `config_path` - TOML file to read. A missing file is not an error.
/// * `data_dir` - Base directory for the default history and export paths.
/// * `env` - Environment lookup, e.g. `|k| std::env::var(k).ok()`.
pub fn load(
    config_path: &Path,
    data_dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig> {
    let mut cfg = AppConfig::defaults(data_dir, env("USER"));

    if config_path.exists() {
        let s = std::fs::read_to_string(config_path)
            .wrap_err_with(|| format!("failed to read config file {}", config_path.display()))?;
        let raw: RawConfig = toml::from_str(&s)
            .wrap_err_with(|| format!("failed to parse config file {}", config_path.display()))?;
        apply_raw(&mut cfg, raw)?;
        cfg.config_path = Some(config_path.to_path_buf());
        info!(path = %config_path.display(), "Loaded config file.");
    } else {
        debug!(path = %config_path.display(), "No config file, using defaults.");
    }

    apply_env(&mut cfg, env)?;
    Ok(cfg)
}

fn apply_raw(cfg: &mut AppConfig, raw: RawConfig) -> Result<()> {
    if let Some(scan) = raw.scan {
        if let Some(pace) = scan.pace {
            cfg.scan.pace = validate_pace(pace)?;
        }
    }
    if let Some(session) = raw.session {
        if let Some(user) = session.user {
            cfg.session.user_id = user;
        }
        if let Some(admin) = session.admin {
            cfg.session.is_admin = admin;
        }
    }
    if let Some(history) = raw.history {
        if let Some(enabled) = history.enabled {
            cfg.history.enabled = enabled;
        }
        if let Some(path) = history.path {
            cfg.history.path = path;
        }
    }
    if let Some(export) = raw.export {
        if let Some(dir) = export.dir {
            cfg.export.dir = dir;
        }
    }
    Ok(())
}

fn apply_env(cfg: &mut AppConfig, env: impl Fn(&str) -> Option<String>) -> Result<()> {
    let key = |suffix: &str| format!("{}_{}", PROJECT_NAME.as_str(), suffix);

    let pace_key = key("PACE");
    if let Some(v) = env(&pace_key) {
        let pace: f64 = v
            .trim()
            .parse()
            .map_err(|_| eyre!("{} must be a number, got {:?}", pace_key, v))?;
        cfg.scan.pace = validate_pace(pace)?;
    }
    if let Some(user) = env(&key("USER")).filter(|u| !u.trim().is_empty()) {
        cfg.session.user_id = user;
    }
    let admin_key = key("ADMIN");
    if let Some(v) = env(&admin_key) {
        cfg.session.is_admin = parse_bool(&v)
            .ok_or_else(|| eyre!("{} must be true or false, got {:?}", admin_key, v))?;
    }
    Ok(())
}

fn validate_pace(pace: f64) -> Result<f64> {
    if pace.is_finite() && pace >= 0.0 {
        Ok(pace)
    } else {
        Err(eyre!("scan pace must be a non-negative number, got {}", pace))
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("missing.toml"), dir.path(), env_of(&[])).unwrap();
        assert_eq!(cfg.scan.pace, 1.0);
        assert_eq!(cfg.session.user_id, "operator");
        assert!(cfg.session.is_admin);
        assert_eq!(cfg.history.path, dir.path().join("history.json"));
        assert_eq!(cfg.export.dir, dir.path().join("reports"));
        assert!(cfg.config_path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scan]\npace = 0.25\n\n[session]\nuser = \"harbormaster\"\nadmin = false\n\n[history]\nenabled = false\n",
        )
        .unwrap();

        let cfg = load(&path, dir.path(), env_of(&[("USER", "ignored")])).unwrap();
        assert_eq!(cfg.scan.pace, 0.25);
        assert_eq!(cfg.session.user_id, "harbormaster");
        assert!(!cfg.session.is_admin);
        assert!(!cfg.history.enabled);
        assert_eq!(cfg.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn environment_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\npace = 2.0\n[session]\nadmin = true\n").unwrap();

        let cfg = load(
            &path,
            dir.path(),
            env_of(&[
                ("HARBOR_RS_SCANNER_PACE", "0"),
                ("HARBOR_RS_SCANNER_USER", "night-shift"),
                ("HARBOR_RS_SCANNER_ADMIN", "no"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.scan.pace, 0.0);
        assert_eq!(cfg.session.user_id, "night-shift");
        assert!(!cfg.session.is_admin);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[scan]\npace = -1.0\n").unwrap();
        assert!(load(&path, dir.path(), env_of(&[])).is_err());

        std::fs::write(&path, "[unknown]\nkey = 1\n").unwrap();
        assert!(load(&path, dir.path(), env_of(&[])).is_err());

        let missing = dir.path().join("none.toml");
        assert!(load(&missing, dir.path(), env_of(&[("HARBOR_RS_SCANNER_ADMIN", "maybe")])).is_err());
        assert!(load(&missing, dir.path(), env_of(&[("HARBOR_RS_SCANNER_PACE", "fast")])).is_err());
    }
}
