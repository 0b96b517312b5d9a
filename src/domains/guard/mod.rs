//! Guard domain.
//!
//! Decodes PreToolUse payloads into typed tool requests and decides whether
//! they reach into the protected directory.

pub mod decision;
pub mod error;
pub mod path_guard;
pub mod request;
pub mod service;

pub use decision::{Decision, HookOutput};
pub use error::GuardError;
pub use path_guard::PathGuard;
pub use request::{FileTarget, HookInput, NotebookTarget, ToolRequest};
pub use service::GuardService;
