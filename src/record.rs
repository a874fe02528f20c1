use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    ClassContainingKeyword,
}

/// Metadata for one class whose source contains the keyword. Built once by
/// the extractor; consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    file: String,
    line: usize,
    #[serde(rename = "match")]
    keyword: String,
    class_name: String,
    containing_class: String,
    attributes: Vec<String>,
    interfaces: Vec<String>,
    usings: Vec<String>,
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<Vec<String>>,
    kind: RecordKind,
}

/// Fields gathered by the extractor.
#[derive(Debug, Clone, Default)]
pub struct RecordParts {
    pub file: String,
    pub line: usize,
    pub keyword: String,
    pub class_name: String,
    pub source: String,
    pub attributes: Vec<String>,
    pub base_types: Vec<String>,
    pub usings: Vec<String>,
    pub namespace: Option<String>,
}

impl ClassRecord {
    pub fn new(parts: RecordParts) -> Self {
        Self {
            file: parts.file,
            line: parts.line,
            keyword: parts.keyword,
            class_name: parts.class_name,
            containing_class: parts.source,
            attributes: parts.attributes,
            interfaces: parts.base_types,
            usings: parts.usings,
            namespace: parts.namespace,
            references: None,
            kind: RecordKind::ClassContainingKeyword,
        }
    }

    /// Attaches the reference list while the record is still being built.
    pub fn with_references(self, references: Vec<String>) -> Self {
        Self {
            references: Some(references),
            ..self
        }
    }

    /// Root-prefixed, forward-slash path (`/src/A.cs`).
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn source(&self) -> &str {
        &self.containing_class
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn base_types(&self) -> &[String] {
        &self.interfaces
    }

    pub fn usings(&self) -> &[String] {
        &self.usings
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// `None` when reference resolution was not requested.
    pub fn references(&self) -> Option<&[String]> {
        self.references.as_deref()
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Number of lines in the class source.
    pub fn line_count(&self) -> usize {
        self.containing_class.split('\n').count()
    }

    /// Navigation anchor: lowercase class name and line. Not unique across
    /// files.
    pub fn anchor(&self) -> String {
        format!("{}-{}", self.class_name.to_lowercase(), self.line)
    }

    /// Normalized parent directory of [`ClassRecord::file`].
    pub fn folder_key(&self) -> String {
        folder_key(&self.file)
    }
}

pub const ROOT_FOLDER: &str = "(root)";

pub fn folder_key(file: &str) -> String {
    let normalized = file.replace('\\', "/");
    match normalized.rsplit_once('/') {
        Some((dir, _)) if !dir.trim_matches('/').is_empty() => dir.to_string(),
        _ => ROOT_FOLDER.to_string(),
    }
}
