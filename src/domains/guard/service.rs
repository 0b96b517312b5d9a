//! Guard service: picks the project root and runs the path guard.

use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

use super::decision::Decision;
use super::error::GuardError;
use super::path_guard::PathGuard;
use super::request::HookInput;
use crate::core::config::{DEFAULT_PROTECTED_DIR, GuardConfig, PROTECTED_DIR_VAR};

/// Service that turns decoded hook payloads into decisions.
#[derive(Debug, Clone)]
pub struct GuardService {
    config: GuardConfig,
    working_dir: Option<PathBuf>,
}

impl GuardService {
    /// Create a new guard service anchored at the process working directory.
    ///
    /// A protected directory that is not a plain relative path is replaced
    /// by the default, with a warning.
    pub fn new(mut config: GuardConfig) -> Self {
        if !is_plain_relative(Path::new(&config.protected_dir)) {
            warn!(
                "{PROTECTED_DIR_VAR}='{}' is not a plain relative path, \
                 protecting '{DEFAULT_PROTECTED_DIR}' instead",
                config.protected_dir
            );
            config.protected_dir = DEFAULT_PROTECTED_DIR.to_string();
        }

        let working_dir = match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                warn!(
                    "Cannot read working directory, anchoring relative paths at the project root: {}",
                    e
                );
                None
            }
        };
        Self {
            config,
            working_dir,
        }
    }

    /// The protected directory name in effect.
    pub fn protected_dir(&self) -> &str {
        &self.config.protected_dir
    }

    /// Replace the directory relative paths are anchored at.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    /// The project root for `input`: configured value first, then the
    /// request's `cwd` hint.
    pub fn project_root<'a>(&'a self, input: &'a HookInput) -> Option<&'a Path> {
        self.config.project_dir.as_deref().or_else(|| input.cwd())
    }

    /// Evaluate one hook payload.
    ///
    /// Fails open with a warning when no project root can be determined.
    pub fn handle(&self, input: &HookInput) -> Result<Decision, GuardError> {
        let request = input.to_request()?;

        let Some(project_root) = self.project_root(input) else {
            warn!("Could not determine project directory, allowing {}", request.tool_name());
            return Ok(Decision::Allow);
        };

        let working_dir = self.working_dir.as_deref().unwrap_or(project_root);
        let guard = PathGuard::new(&self.config.protected_dir, working_dir);
        let decision = guard.evaluate(&request, project_root);

        debug!(tool = request.tool_name(), deny = decision.is_deny(), "Evaluated request");
        Ok(decision)
    }
}

/// True when the path only has normal components (no root, `.` or `..`).
fn is_plain_relative(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some()
        && components.all(|component| matches!(component, Component::Normal(_)))
}
