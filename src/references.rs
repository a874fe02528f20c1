use rayon::prelude::*;
use tracing::debug;

use crate::workspace::Workspace;

/// Naive cross-document reference search: a document "references" a class
/// when its text contains the class name as a literal substring. Not scope
/// or word-boundary aware, so `Item` is found inside `ItemBuilder`.
pub struct ReferenceResolver<'w> {
    workspace: &'w Workspace,
}

impl<'w> ReferenceResolver<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        Self { workspace }
    }

    /// Paths of every document other than `file` mentioning `class_name`, in
    /// document order. Documents are re-read on every call.
    pub fn resolve(&self, file: &str, class_name: &str) -> Vec<String> {
        if class_name.is_empty() {
            return Vec::new();
        }

        self.workspace
            .documents()
            .par_iter()
            .filter(|doc| doc.relative_path() != file)
            .filter_map(|doc| match doc.read_text() {
                Ok(text) => text
                    .contains(class_name)
                    .then(|| doc.relative_path().to_string()),
                Err(err) => {
                    debug!(path = doc.relative_path(), error = %err, "reference search skipped document");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn literal_substring_matches_prefix_of_longer_identifier() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Item.cs"), "class Item { }").unwrap();
        fs::write(dir.path().join("Builder.cs"), "// ItemBuilder").unwrap();
        fs::write(dir.path().join("Other.cs"), "class Unrelated { }").unwrap();

        let workspace = Workspace::open(dir.path()).unwrap();
        let resolver = ReferenceResolver::new(&workspace);
        assert_eq!(resolver.resolve("/Item.cs", "Item"), vec!["/Builder.cs"]);
    }

    #[test]
    fn preserves_document_order_and_excludes_own_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["A.cs", "B.cs", "C.cs", "D.cs", "E.cs"] {
            fs::write(dir.path().join(name), "var x = new Widget();").unwrap();
        }

        let workspace = Workspace::open(dir.path()).unwrap();
        let resolver = ReferenceResolver::new(&workspace);
        assert_eq!(
            resolver.resolve("/C.cs", "Widget"),
            vec!["/A.cs", "/B.cs", "/D.cs", "/E.cs"]
        );
        assert!(resolver.resolve("/C.cs", "widget").is_empty());
    }
}
