//! Activity validation.
//!
//! Result types, the engine seam with its default rule set, and the
//! memoized read model the editor consults before publishing.

pub mod adapter;
pub mod engine;
pub mod rules;
