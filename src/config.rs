use std::path::PathBuf;

use crate::cli::Cli;

pub const JSON_ARTIFACT: &str = "keyword-classes.json";
pub const MARKDOWN_ARTIFACT: &str = "keyword-classes.md";
pub const HTML_ARTIFACT: &str = "keyword-classes.html";

/// Everything a single report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub workspace: PathBuf,
    pub keyword: String,
    pub with_references: bool,
    pub github_base_url: Option<String>,
}

/// The renderer-facing subset of [`ReportConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub github_base_url: Option<String>,
}

impl ReportConfig {
    /// Returns `None` when either positional argument is missing; the caller
    /// prints usage and performs no scan.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let workspace = cli.workspace.clone()?;
        let keyword = cli.keyword.clone()?;
        Some(Self {
            workspace,
            keyword,
            with_references: cli.with_references,
            github_base_url: cli.github.clone().filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            github_base_url: self.github_base_url.clone(),
        }
    }
}

impl RenderOptions {
    /// Source link for a record: base URL and root-prefixed file path joined
    /// with a single `/`, followed by `#L<line>`.
    pub fn source_link(&self, file: &str, line: usize) -> Option<String> {
        let base = self.github_base_url.as_deref()?;
        let base = base.trim_end_matches('/');
        let file = file.trim_start_matches('/');
        Some(format!("{base}/{file}#L{line}"))
    }
}
