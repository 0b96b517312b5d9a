//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the guard,
//! including error handling, configuration, path security and the hook
//! runner that wires stdin to a decision on stdout.

pub mod config;
pub mod error;
pub mod hook;
pub mod security;

pub use config::Config;
pub use error::{Error, Result};
pub use hook::HookRunner;
pub use security::{PathSecurityError, is_within_root, resolve_path};
