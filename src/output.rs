use std::path::{Path, PathBuf};
use tracing::info;

use crate::aggregate::AggregatedModel;
use crate::config::{HTML_ARTIFACT, JSON_ARTIFACT, MARKDOWN_ARTIFACT, RenderOptions};
use crate::error::ReportError;
use crate::render::{render_html, render_json, render_markdown};

/// Rendered contents of the three artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub json: String,
    pub markdown: String,
    pub html: String,
}

impl Artifacts {
    pub fn render(model: &AggregatedModel, options: &RenderOptions) -> Result<Self, ReportError> {
        Ok(Self {
            json: render_json(model)?,
            markdown: render_markdown(model, options),
            html: render_html(model, options),
        })
    }

    /// Writes all three files into `dir`. No rollback: a failure leaves the
    /// files written before it on disk.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
        let mut written = Vec::with_capacity(3);
        for (name, content) in [
            (JSON_ARTIFACT, &self.json),
            (MARKDOWN_ARTIFACT, &self.markdown),
            (HTML_ARTIFACT, &self.html),
        ] {
            let path = dir.join(name);
            std::fs::write(&path, content).map_err(|source| ReportError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = content.len(), "wrote artifact");
            written.push(path);
        }
        Ok(written)
    }
}
