use crate::record::{ClassRecord, RecordParts};
use crate::syntax::ClassSyntax;

/// Builds the record for one matching class. `usings` are the directives of
/// the enclosing document, computed once per document.
pub fn extract_record<C: ClassSyntax>(
    file: &str,
    usings: &[String],
    class: &C,
    keyword: &str,
) -> ClassRecord {
    ClassRecord::new(RecordParts {
        file: file.to_string(),
        line: class.start_row() + 1,
        keyword: keyword.to_string(),
        class_name: class.identifier().unwrap_or_default().to_string(),
        source: class.full_text().to_string(),
        attributes: class.attributes(),
        base_types: class.base_types(),
        usings: usings.to_vec(),
        namespace: class.enclosing_namespace(),
    })
}
