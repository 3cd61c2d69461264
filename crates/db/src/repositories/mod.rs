//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod certificate_template_repo;
pub mod media_repo;

pub use certificate_template_repo::CertificateTemplateRepo;
pub use media_repo::MediaRepo;
