use std::path::PathBuf;
use tracing::{debug, warn};
use tree_sitter::{Parser, Tree};

use crate::error::{DocumentError, ReportError};
use crate::syntax::{ClassNodes, ClassSyntax, CsClass, csharp_parser, using_directives};
use crate::workspace::{DocumentSource, Workspace};

/// One document with its text and syntax tree loaded.
pub struct ParsedDocument {
    source: DocumentSource,
    text: String,
    tree: Tree,
    usings: Vec<String>,
}

impl ParsedDocument {
    pub fn parse(parser: &mut Parser, source: DocumentSource) -> Result<Self, DocumentError> {
        let text = source.read_text()?;
        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| DocumentError::Parse {
                path: source.path().to_path_buf(),
            })?;
        if tree.root_node().has_error() {
            debug!(path = source.relative_path(), "document parsed with syntax errors");
        }
        let usings = using_directives(&tree, &text);
        Ok(Self {
            source,
            text,
            tree,
            usings,
        })
    }

    pub fn relative_path(&self) -> &str {
        self.source.relative_path()
    }

    pub fn usings(&self) -> &[String] {
        &self.usings
    }

    /// Class-like declarations whose full text contains `keyword`
    /// (case-sensitive substring; comments and string literals count).
    pub fn matching_classes<'d>(
        &'d self,
        keyword: &'d str,
    ) -> impl Iterator<Item = CsClass<'d>> + 'd {
        ClassNodes::new(self.tree.root_node())
            .map(move |node| CsClass::new(node, &self.text))
            .filter(move |class| class.full_text().contains(keyword))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// Sequential, single-pass document loader. Each document is read and parsed
/// only when the iterator reaches it; documents that cannot be read or parsed
/// are skipped and recorded.
pub struct Scanner<'w> {
    parser: Parser,
    documents: std::slice::Iter<'w, DocumentSource>,
    skipped: Vec<SkippedDocument>,
}

impl<'w> Scanner<'w> {
    pub fn new(workspace: &'w Workspace) -> Result<Self, ReportError> {
        Ok(Self {
            parser: csharp_parser()?,
            documents: workspace.documents().iter(),
            skipped: Vec::new(),
        })
    }

    pub fn skipped(&self) -> &[SkippedDocument] {
        &self.skipped
    }
}

impl Iterator for Scanner<'_> {
    type Item = ParsedDocument;

    fn next(&mut self) -> Option<ParsedDocument> {
        for source in self.documents.by_ref() {
            let path = source.path().to_path_buf();
            match ParsedDocument::parse(&mut self.parser, source.clone()) {
                Ok(document) => return Some(document),
                Err(err) => {
                    let reason = error_chain(&err);
                    warn!(path = %path.display(), error = %reason, "skipping document");
                    self.skipped.push(SkippedDocument { path, reason });
                }
            }
        }
        None
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
