//! Notes Guard Library
//!
//! A PreToolUse hook for coding agents that vetoes writes into a protected
//! directory (`.notes` by default) of the current project.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, path resolution and the hook runner
//! - **domains**: business logic organized by bounded context
//!   - **guard**: request decoding, the containment check and its decision
//!
//! # Example
//!
//! ```rust,no_run
//! use notes_guard::{Config, HookRunner};
//!
//! fn main() -> anyhow::Result<()> {
//!     let runner = HookRunner::new(Config::from_env());
//!     runner.run(std::io::stdin().lock(), std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, HookRunner, Result};
pub use domains::guard::Decision;
