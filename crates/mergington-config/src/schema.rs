//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::seed::default_activities;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub static_files: StaticFilesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Activities the registry is seeded with at startup.
    #[serde(default = "default_activities")]
    pub activities: Vec<ActivitySeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
            logging: LoggingConfig::default(),
            activities: default_activities(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Static asset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory served under `mount`.
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL prefix the directory is mounted at.
    #[serde(default = "default_mount")]
    pub mount: String,

    /// Landing document the root route redirects to.
    #[serde(default = "default_index")]
    pub index: String,
}

impl StaticFilesConfig {
    /// URL of the landing document, e.g. `/static/index.html`.
    pub fn index_url(&self) -> String {
        format!(
            "{}/{}",
            self.mount.trim_end_matches('/'),
            self.index.trim_start_matches('/')
        )
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
            mount: default_mount(),
            index: default_index(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_mount() -> String {
    "/static".to_string()
}

fn default_index() -> String {
    "index.html".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write logs to daily-rotated files.
    #[serde(default)]
    pub file: bool,

    /// Log directory. Defaults to the platform data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
            dir: None,
            max_files: default_max_files(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_max_files() -> usize {
    7
}

/// Seed record for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub schedule: String,

    pub max_participants: u32,

    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }
}
