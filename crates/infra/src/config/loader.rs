//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AGENDA_DB_PATH`: Database file path
//! - `AGENDA_DB_POOL_SIZE`: Connection pool size
//! - `AGENDA_BIND_ADDR`: HTTP listen address
//! - `AGENDA_CALENDAR_ENABLED`: Whether the external calendar check runs (true/false)
//! - `AGENDA_CALENDAR_API_BASE`: Calendar API base URL
//! - `AGENDA_CALENDAR_TOKEN`: Calendar API bearer token
//! - `AGENDA_CALENDAR_TIMEOUT_SECS`: Per-request calendar timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./agenda.json` or `./agenda.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use agenda_domain::{
    AgendaError, CalendarConfig, Config, DatabaseConfig, Result, ServerConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AgendaError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `AGENDA_DB_PATH` and `AGENDA_BIND_ADDR` must be present; everything else
/// falls back to the defaults in [`Config::default`].
///
/// # Errors
/// Returns `AgendaError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let db_path = env_var("AGENDA_DB_PATH")?;
    let bind_addr = env_var("AGENDA_BIND_ADDR")?;

    let pool_size = match std::env::var("AGENDA_DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| AgendaError::Config(format!("Invalid pool size: {e}")))?,
        Err(_) => defaults.database.pool_size,
    };

    let calendar_enabled = env_bool("AGENDA_CALENDAR_ENABLED", defaults.calendar.enabled);
    let api_base =
        std::env::var("AGENDA_CALENDAR_API_BASE").unwrap_or(defaults.calendar.api_base);
    let access_token = std::env::var("AGENDA_CALENDAR_TOKEN").ok();
    let timeout_seconds = match std::env::var("AGENDA_CALENDAR_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AgendaError::Config(format!("Invalid calendar timeout: {e}")))?,
        Err(_) => defaults.calendar.timeout_seconds,
    };

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size },
        calendar: CalendarConfig {
            enabled: calendar_enabled,
            api_base,
            access_token,
            timeout_seconds,
        },
        server: ServerConfig { bind_addr },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AgendaError::Config` if no file is found or parsing fails.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AgendaError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AgendaError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AgendaError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe standard locations for a configuration file.
fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config", "agenda"];
    let extensions = ["json", "toml"];
    let bases = [PathBuf::from("."), PathBuf::from("..")];

    for base in &bases {
        for name in &names {
            for ext in &extensions {
                let candidate = base.join(format!("{name}.{ext}"));
                if candidate.exists() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AgendaError::Config(format!("Missing environment variable: {name}")))
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name).map(|v| v == "true" || v == "1").unwrap_or(default)
}
