//! Containment check for a single request.

use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use super::decision::Decision;
use super::request::ToolRequest;
use crate::core::security::{PathSecurityError, is_within_root, resolve_path};

/// Decides whether a request targets the protected directory.
#[derive(Debug, Clone)]
pub struct PathGuard {
    protected_dir: String,
    working_dir: PathBuf,
}

impl PathGuard {
    /// Create a guard for `protected_dir`, anchoring relative paths at
    /// `working_dir`.
    pub fn new(protected_dir: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            protected_dir: protected_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// The protected directory under `project_root`, unresolved.
    pub fn boundary(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.protected_dir)
    }

    /// Evaluate one request against the boundary under `project_root`.
    ///
    /// When the paths cannot be resolved the decision falls back to a plain
    /// substring test on the raw path, which errs towards denying.
    #[instrument(skip_all, fields(tool = request.tool_name()))]
    pub fn evaluate(&self, request: &ToolRequest, project_root: &Path) -> Decision {
        let Some(candidate) = request.target_path() else {
            debug!("No file path to check");
            return Decision::Allow;
        };

        let boundary = self.boundary(project_root);
        match self.is_protected(candidate, &boundary) {
            Ok(true) => {
                debug!(candidate, "Target is inside the protected directory");
                Decision::deny(format!(
                    "Access denied: The {} directory ({}) is read-only and protected from \
                     modifications. Please choose a different location for your files.",
                    self.protected_dir,
                    boundary.display()
                ))
            }
            Ok(false) => {
                debug!(candidate, "Target is outside the protected directory");
                Decision::Allow
            }
            Err(e) => {
                warn!("Path resolution failed, falling back to a textual check: {}", e);
                if candidate.contains(&self.protected_dir) {
                    Decision::deny(format!(
                        "Access denied: Files containing '{}' in the path are protected from \
                         modifications.",
                        self.protected_dir
                    ))
                } else {
                    Decision::Allow
                }
            }
        }
    }

    fn is_protected(&self, candidate: &str, boundary: &Path) -> Result<bool, PathSecurityError> {
        let candidate = resolve_path(Path::new(candidate), &self.working_dir)?;
        let boundary = resolve_path(boundary, &self.working_dir)?;
        Ok(is_within_root(&candidate, &boundary))
    }
}
