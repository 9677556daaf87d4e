//! Process configuration read from `HOSTEL_*` environment variables.
//!
//! # Responsibility
//! - Parse room count, logging settings and the demo-data switch.
//! - Keep parsing independent of the real process environment for tests.
//!
//! # Invariants
//! - A successfully parsed config always has a room count in
//!   `1..=MAX_ROOM_COUNT`, a supported log level and an absolute log directory.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

pub const ENV_ROOM_COUNT: &str = "HOSTEL_ROOM_COUNT";
pub const ENV_LOG_LEVEL: &str = "HOSTEL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "HOSTEL_LOG_DIR";
pub const ENV_SEED_DEMO: &str = "HOSTEL_SEED_DEMO";

const DEFAULT_ROOM_COUNT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(count) => count,
    None => panic!("default room count must be positive"),
};
/// Upper bound on `HOSTEL_ROOM_COUNT`; rooms are allocated eagerly at startup.
pub const MAX_ROOM_COUNT: u32 = 10_000;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration parse errors. Each variant names the offending variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidRoomCount(String),
    InvalidLogLevel(String),
    InvalidLogDir(String),
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoomCount(value) => write!(
                f,
                "{ENV_ROOM_COUNT} must be an integer in 1..={MAX_ROOM_COUNT}, got `{value}`"
            ),
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL} must be one of trace|debug|info|warn|error, got `{value}`"
            ),
            Self::InvalidLogDir(message) => write!(f, "{ENV_LOG_DIR} is invalid: {message}"),
            Self::InvalidFlag { key, value } => write!(
                f,
                "{key} must be one of 1|0|true|false|yes|no, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostelConfig {
    pub room_count: NonZeroU32,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
    /// Preload the sample students and warden on startup.
    pub seed_demo_data: bool,
}

impl Default for HostelConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            seed_demo_data: true,
        }
    }
}

impl HostelConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ROOM_COUNT) {
            config.room_count = raw
                .trim()
                .parse::<NonZeroU32>()
                .ok()
                .filter(|count| count.get() <= MAX_ROOM_COUNT)
                .ok_or_else(|| ConfigError::InvalidRoomCount(raw.clone()))?;
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&raw).map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?;
        }
        if let Some(raw) = lookup(ENV_LOG_DIR) {
            config.log_dir = normalize_log_dir(Path::new(&raw))
                .map_err(|err| ConfigError::InvalidLogDir(err.to_string()))?;
        }
        if let Some(raw) = lookup(ENV_SEED_DEMO) {
            config.seed_demo_data = parse_flag(ENV_SEED_DEMO, &raw)?;
        }

        Ok(config)
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("hostel").join("logs")
}

fn parse_flag(key: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
