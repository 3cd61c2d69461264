//! Client-side coordination for the certificate designer.
//!
//! [`save::CertificateSaver`] sends a template to the backend and reacts to
//! the outcome through injected [`save::Navigator`] and [`save::Alerter`]
//! implementations. [`export::TemplateExporter`] writes a template to a
//! local JSON file without touching the network.

pub mod error;
pub mod export;
pub mod save;

pub use error::DashboardError;
pub use export::TemplateExporter;
pub use save::{Alerter, CertificateSaver, HttpTemplateApi, Navigator, SaveOutcome, TemplateApi};
