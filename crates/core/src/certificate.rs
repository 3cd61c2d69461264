//! Certificate template types and the JSON export format.
//!
//! A template is whatever the designer produces: a required `name` plus any
//! number of design fields (layout, colours, text elements). Unknown fields
//! are kept verbatim so a template survives save, load and export unchanged.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// File name stem used when a template has no usable name.
pub const DEFAULT_EXPORT_STEM: &str = "certificate";

/// Suffix appended to every exported template file name.
pub const EXPORT_SUFFIX: &str = "-template.json";

/// Maximum length of a template name.
pub const MAX_NAME_LEN: u64 = 200;

/// In-memory certificate template as produced by the designer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub design: serde_json::Map<String, serde_json::Value>,
}

impl CertificateTemplate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            design: serde_json::Map::new(),
        }
    }

    /// Attach a design field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.design.insert(key.into(), value);
        self
    }
}

/// Body of `POST /api/certificates`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCertificateTemplate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    pub template: CertificateTemplate,
}

impl CreateCertificateTemplate {
    pub fn from_template(template: &CertificateTemplate) -> Self {
        Self {
            name: template.name.clone(),
            template: template.clone(),
        }
    }

    /// Validate field constraints, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be blank".into()));
        }
        Ok(())
    }
}

/// A template serialized for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTemplate {
    pub file_name: String,
    pub contents: String,
}

/// Download file name for a template: `{name}-template.json`, falling back
/// to `certificate-template.json` for a blank name.
pub fn export_file_name(name: &str) -> String {
    let stem = name.trim();
    let stem = if stem.is_empty() {
        DEFAULT_EXPORT_STEM
    } else {
        stem
    };
    format!("{stem}{EXPORT_SUFFIX}")
}

/// Serialize a template to indented JSON alongside its download name.
pub fn export_template(template: &CertificateTemplate) -> Result<ExportedTemplate, CoreError> {
    let contents = serde_json::to_string_pretty(template)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize template: {e}")))?;
    Ok(ExportedTemplate {
        file_name: export_file_name(&template.name),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn export_uses_template_name_and_round_trips() {
        let template = CertificateTemplate::named("Graduation");

        let exported = export_template(&template).unwrap();

        assert_eq!(exported.file_name, "Graduation-template.json");
        let parsed: CertificateTemplate = serde_json::from_str(&exported.contents).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn export_name_is_trimmed() {
        assert_eq!(export_file_name(" Graduation "), "Graduation-template.json");
        assert_eq!(export_file_name("Year 5 Award"), "Year 5 Award-template.json");
        assert_eq!(export_file_name(" \t "), "certificate-template.json");
    }

    #[test]
    fn name_length_is_bounded_by_max_name_len() {
        let at_limit = "a".repeat(MAX_NAME_LEN as usize);
        let over_limit = "a".repeat(MAX_NAME_LEN as usize + 1);

        let ok = CreateCertificateTemplate::from_template(&CertificateTemplate::named(at_limit));
        let too_long =
            CreateCertificateTemplate::from_template(&CertificateTemplate::named(over_limit));

        assert!(ok.check().is_ok());
        assert_matches!(too_long.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn export_preserves_design_fields() {
        let template = CertificateTemplate::named("Honours")
            .with_field("orientation", json!("landscape"))
            .with_field("elements", json!([{ "kind": "text", "x": 10, "y": 20 }]));

        let exported = export_template(&template).unwrap();

        assert!(exported.contents.contains("\n  \"orientation\""));
        let parsed: serde_json::Value = serde_json::from_str(&exported.contents).unwrap();
        assert_eq!(parsed["elements"][0]["x"], 10);
        assert_eq!(parsed["name"], "Honours");
    }

    #[test]
    fn blank_name_falls_back_to_default_stem() {
        assert_eq!(export_file_name(""), "certificate-template.json");
        assert_eq!(export_file_name("   "), "certificate-template.json");
    }

    #[test]
    fn missing_name_deserializes_as_empty() {
        let template: CertificateTemplate = serde_json::from_value(json!({ "width": 800 })).unwrap();
        assert_eq!(template.name, "");
        assert_eq!(template.design["width"], 800);
    }

    #[test]
    fn create_request_rejects_blank_and_long_names() {
        let blank = CreateCertificateTemplate::from_template(&CertificateTemplate::named(" "));
        assert_matches!(blank.check(), Err(CoreError::Validation(_)));

        let empty = CreateCertificateTemplate::from_template(&CertificateTemplate::named(""));
        assert_matches!(empty.check(), Err(CoreError::Validation(_)));

        let long = "x".repeat(MAX_NAME_LEN as usize + 1);
        let too_long = CreateCertificateTemplate::from_template(&CertificateTemplate::named(long));
        assert_matches!(too_long.check(), Err(CoreError::Validation(_)));

        let ok = CreateCertificateTemplate::from_template(&CertificateTemplate::named("Award"));
        assert!(ok.check().is_ok());
    }
}
