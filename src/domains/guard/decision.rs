//! Guard decisions and the payload that reports them to the agent.

use serde::Serialize;

/// Event name the deny payload is scoped to.
pub const HOOK_EVENT_NAME: &str = "PreToolUse";

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The operation may proceed; nothing is reported.
    Allow,
    /// The operation is vetoed for the given reason.
    Deny { reason: String },
}

impl Decision {
    /// Create a deny decision.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    /// True for a deny decision.
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }

    /// The payload to print for this decision, if any.
    pub fn to_output(&self) -> Option<HookOutput> {
        match self {
            Self::Allow => None,
            Self::Deny { reason } => Some(HookOutput {
                hook_specific_output: HookSpecificOutput {
                    hook_event_name: HOOK_EVENT_NAME,
                    permission_decision: PermissionDecision::Deny,
                    permission_decision_reason: reason.clone(),
                },
            }),
        }
    }
}

// ============================================================================
// Output Structure (JSON format for the agent)
// ============================================================================

/// Top-level hook response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
}

/// Permission values understood by the agent. Only `deny` is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Deny,
}
