// Security module for path resolution and containment checks
//
// This module turns user-supplied paths into canonical absolute form so that
// relative segments, `..` and symlink indirection cannot be used to slip a
// write past a directory boundary.

pub mod path_validator;

pub use path_validator::{PathSecurityError, is_within_root, resolve_path};
