use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to open workspace {path}: {reason}")]
    WorkspaceLoad { path: PathBuf, reason: String },

    #[error("failed to load the C# grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write artifact {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single document that could not be read or parsed. Never fatal: the
/// scanner skips the document and counts it.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parser produced no syntax tree for {path}")]
    Parse { path: PathBuf },
}
