//! Domain types and pure logic for the Academy content backend.
//!
//! Nothing in this crate performs I/O: activities and their validation,
//! certificate templates, media records and AI prompt construction are all
//! plain data plus functions, shared by the server and dashboard crates.

pub mod activity;
pub mod ai;
pub mod certificate;
pub mod error;
pub mod media;
pub mod types;
pub mod validation;
