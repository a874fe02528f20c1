use tracing::info;

use crate::aggregate::{AggregatedModel, Aggregator};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::extract::extract_record;
use crate::references::ReferenceResolver;
use crate::scan::Scanner;
use crate::workspace::Workspace;

/// Scan, extract, optionally resolve references, and aggregate. Documents
/// are processed one at a time in workspace order.
pub fn build_report(config: &ReportConfig) -> Result<AggregatedModel, ReportError> {
    let workspace = Workspace::open(&config.workspace)?;
    let resolver = config
        .with_references
        .then(|| ReferenceResolver::new(&workspace));

    let mut aggregator = Aggregator::new(config.keyword.as_str());
    let mut scanner = Scanner::new(&workspace)?;
    for document in scanner.by_ref() {
        for class in document.matching_classes(&config.keyword) {
            let record = extract_record(
                document.relative_path(),
                document.usings(),
                &class,
                &config.keyword,
            );
            let record = match &resolver {
                Some(resolver) => {
                    let references = resolver.resolve(record.file(), record.class_name());
                    record.with_references(references)
                }
                None => record,
            };
            aggregator.push(record);
        }
    }
    aggregator.skip_documents(scanner.skipped().len());

    let model = aggregator.finish();
    let summary = model.summary();
    info!(
        keyword = %config.keyword,
        classes = summary.total_classes,
        lines = summary.total_lines,
        folders = model.groups().len(),
        skipped = summary.skipped_documents,
        "scan complete"
    );
    Ok(model)
}
