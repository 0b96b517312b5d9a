//! Configuration management for the guard.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables, falling back to defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the project root.
pub const PROJECT_DIR_VAR: &str = "CLAUDE_PROJECT_DIR";

/// Environment variable overriding the protected directory name.
pub const PROTECTED_DIR_VAR: &str = "NOTES_GUARD_DIR";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "NOTES_GUARD_LOG_LEVEL";

/// Protected directory used when none is configured.
pub const DEFAULT_PROTECTED_DIR: &str = ".notes";

/// Main configuration structure for the guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// What to protect and where.
    pub guard: GuardConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Configuration for the path guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Project root supplied by the hosting agent.
    /// If None, the `cwd` hint of each request is used instead.
    pub project_dir: Option<PathBuf>,

    /// Name of the protected subdirectory, relative to the project root.
    pub protected_dir: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "trace").
    pub level: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            protected_dir: DEFAULT_PROTECTED_DIR.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // stderr is surfaced to the user by the agent, keep it quiet
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// No `.env` file is consulted: the agent being guarded can write files
    /// inside the project.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Values are taken as-is; the protected
    /// directory name is checked by the guard once logging is up.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(project_dir) = lookup(PROJECT_DIR_VAR) {
            config.guard.project_dir = Some(PathBuf::from(project_dir));
        }

        if let Some(protected_dir) = lookup(PROTECTED_DIR_VAR) {
            config.guard.protected_dir = protected_dir;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }

        config
    }
}
