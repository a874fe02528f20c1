use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{DocumentError, ReportError};

const BUILD_OUTPUT_DIRS: [&str; 2] = ["bin", "obj"];

/// A C# source file discovered under the workspace root. Text is read on
/// demand so that only one document needs to be resident at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    path: PathBuf,
    relative: String,
}

impl DocumentSource {
    pub fn new(path: PathBuf, relative: String) -> Self {
        Self { path, relative }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Workspace-relative, root-prefixed, forward-slash path (`/src/A.cs`).
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    pub fn read_text(&self) -> Result<String, DocumentError> {
        std::fs::read_to_string(&self.path).map_err(|source| DocumentError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    documents: Vec<DocumentSource>,
}

impl Workspace {
    /// Opens a workspace directory. A file path (a `.sln` or `.csproj`, say)
    /// opens its parent directory.
    pub fn open(path: &Path) -> Result<Self, ReportError> {
        let metadata = std::fs::metadata(path).map_err(|err| ReportError::WorkspaceLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let root = if metadata.is_dir() {
            path.to_path_buf()
        } else {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };

        let documents = discover_documents(&root)?;
        info!(root = %root.display(), documents = documents.len(), "opened workspace");
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[DocumentSource] {
        &self.documents
    }
}

fn discover_documents(root: &Path) -> Result<Vec<DocumentSource>, ReportError> {
    if !root.is_dir() {
        return Err(ReportError::WorkspaceLoad {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir
                && entry.depth() > 0
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| BUILD_OUTPUT_DIRS.contains(&name)))
        })
        .build();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable workspace entry");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !path.extension().is_some_and(|e| e == "cs") {
            continue;
        }
        let Some(relative) = relative_document_path(root, path) else {
            debug!(path = %path.display(), "document outside workspace root");
            continue;
        };
        documents.push(DocumentSource::new(path.to_path_buf(), relative));
    }

    Ok(documents)
}

/// `root/src/A.cs` becomes `/src/A.cs`.
pub fn relative_document_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                out.push('/');
                out.push_str(&part.to_string_lossy());
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn relative_document_path_is_root_prefixed() {
        let root = Path::new("/work/repo");
        assert_eq!(
            relative_document_path(root, Path::new("/work/repo/src/A.cs")).as_deref(),
            Some("/src/A.cs")
        );
        assert_eq!(
            relative_document_path(root, Path::new("/work/repo/A.cs")).as_deref(),
            Some("/A.cs")
        );
        assert!(relative_document_path(root, Path::new("/elsewhere/A.cs")).is_none());
    }

    #[test]
    fn open_discovers_cs_files_sorted_and_skips_build_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("b/Zeta.cs"), "class Zeta {}");
        write_file(&root.join("a/Alpha.cs"), "class Alpha {}");
        write_file(&root.join("Root.cs"), "class Root {}");
        write_file(&root.join("a/notes.txt"), "class NotCode {}");
        write_file(&root.join("obj/Debug/Generated.cs"), "class Generated {}");
        write_file(&root.join("bin/Out.cs"), "class Out {}");

        let workspace = Workspace::open(root).unwrap();
        let paths: Vec<&str> = workspace
            .documents()
            .iter()
            .map(|d| d.relative_path())
            .collect();
        assert_eq!(paths, vec!["/Root.cs", "/a/Alpha.cs", "/b/Zeta.cs"]);
    }

    #[test]
    fn open_accepts_solution_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("App.sln"), "");
        write_file(&root.join("src/A.cs"), "class A {}");

        let workspace = Workspace::open(&root.join("App.sln")).unwrap();
        let paths: Vec<&str> = workspace
            .documents()
            .iter()
            .map(|d| d.relative_path())
            .collect();
        assert_eq!(paths, vec!["/src/A.cs"]);
    }

    #[test]
    fn open_missing_path_is_a_workspace_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = Workspace::open(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ReportError::WorkspaceLoad { .. }));
    }
}
