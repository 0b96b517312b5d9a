//! Business logic, organized by bounded context.

pub mod guard;
