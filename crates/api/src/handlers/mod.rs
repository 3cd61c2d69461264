//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to `academy_core` for domain logic, to `academy_db`
//! repositories for persistence, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod ai;
pub mod certificates;
