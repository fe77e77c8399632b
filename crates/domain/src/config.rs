//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::CALENDAR_ORACLE_TIMEOUT_SECS;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub calendar: CalendarConfig,
    pub server: ServerConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// External calendar integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub enabled: bool,
    pub api_base: String,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub timeout_seconds: u64,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig { path: "agenda.db".to_string(), pool_size: 8 },
            calendar: CalendarConfig {
                enabled: false,
                api_base: "https://www.googleapis.com/calendar/v3".to_string(),
                access_token: None,
                timeout_seconds: CALENDAR_ORACLE_TIMEOUT_SECS,
            },
            server: ServerConfig { bind_addr: "127.0.0.1:8080".to_string() },
        }
    }
}
