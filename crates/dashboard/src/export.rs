//! Local export of certificate templates.
//!
//! The template is written to a hidden staging file in the download
//! directory and renamed into place, so a partially written export never
//! appears under the final name. The staging file is removed on every path.

use std::io::Write;
use std::path::{Path, PathBuf};

use academy_core::certificate::{export_template, CertificateTemplate};

use crate::error::DashboardError;

/// A temporary file that becomes the export on [`StagedFile::persist`] and
/// is deleted on drop otherwise.
struct StagedFile {
    inner: tempfile::NamedTempFile,
}

impl StagedFile {
    fn create_in(dir: &Path) -> Result<Self, DashboardError> {
        let inner = tempfile::Builder::new()
            .prefix(".export-")
            .suffix(".part")
            .tempfile_in(dir)?;
        Ok(Self { inner })
    }

    fn write_once(&mut self, contents: &[u8]) -> Result<(), DashboardError> {
        self.inner.write_all(contents)?;
        self.inner.as_file().sync_all()?;
        Ok(())
    }

    fn persist(self, target: &Path) -> Result<(), DashboardError> {
        self.inner.persist(target).map_err(|e| DashboardError::Io(e.error))?;
        Ok(())
    }
}

/// Path separators and control characters are not allowed in the exported
/// file name.
fn local_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Writes templates as `{name}-template.json` into a download directory.
#[derive(Debug, Clone)]
pub struct TemplateExporter {
    dir: PathBuf,
}

impl TemplateExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export `template` and return the path of the written file. An
    /// existing file with the same name is replaced.
    pub fn export(&self, template: &CertificateTemplate) -> Result<PathBuf, DashboardError> {
        let exported = export_template(template)?;
        let target = self.dir.join(local_file_name(&exported.file_name));

        let mut staged = StagedFile::create_in(&self.dir)?;
        staged.write_once(exported.contents.as_bytes())?;
        staged.persist(&target)?;

        tracing::info!(path = %target.display(), "Certificate template exported");
        Ok(target)
    }
}
