use serde::Serialize;
use std::collections::BTreeMap;

use crate::record::ClassRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_classes: usize,
    pub total_lines: usize,
    pub skipped_documents: usize,
}

/// Immutable snapshot consumed by every renderer. Folder keys iterate in
/// ascending order; records within a folder keep discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedModel {
    keyword: String,
    groups: BTreeMap<String, Vec<ClassRecord>>,
    summary: Summary,
}

impl AggregatedModel {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<ClassRecord>> {
        &self.groups
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }
}

/// Single-owner accumulator threaded through the pipeline.
#[derive(Debug, Default)]
pub struct Aggregator {
    keyword: String,
    groups: BTreeMap<String, Vec<ClassRecord>>,
    summary: Summary,
}

impl Aggregator {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, record: ClassRecord) {
        self.summary.total_classes += 1;
        self.summary.total_lines += record.line_count();
        self.groups.entry(record.folder_key()).or_default().push(record);
    }

    pub fn skip_documents(&mut self, count: usize) {
        self.summary.skipped_documents += count;
    }

    pub fn finish(self) -> AggregatedModel {
        AggregatedModel {
            keyword: self.keyword,
            groups: self.groups,
            summary: self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ROOT_FOLDER, RecordParts};

    fn record(file: &str, name: &str, source: &str) -> ClassRecord {
        ClassRecord::new(RecordParts {
            file: file.to_string(),
            line: 1,
            keyword: "K".to_string(),
            class_name: name.to_string(),
            source: source.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn groups_by_folder_with_sorted_keys_and_discovery_order() {
        let mut aggregator = Aggregator::new("K");
        aggregator.push(record("/z/One.cs", "One", "class One\n{\n}"));
        aggregator.push(record("/a/Two.cs", "Two", "class Two {}"));
        aggregator.push(record("/z/Three.cs", "Three", "class Three {}"));
        aggregator.push(record("/Root.cs", "Root", "class Root\n{}"));
        let model = aggregator.finish();

        let keys: Vec<&str> = model.groups().keys().map(String::as_str).collect();
        assert_eq!(keys, vec![ROOT_FOLDER, "/a", "/z"]);

        let z: Vec<&str> = model.groups()["/z"].iter().map(|r| r.class_name()).collect();
        assert_eq!(z, vec!["One", "Three"]);

        assert_eq!(model.summary().total_classes, 4);
        assert_eq!(model.summary().total_lines, 3 + 1 + 1 + 2);
        assert_eq!(model.keyword(), "K");
    }

    #[test]
    fn group_counts_sum_to_total_and_keys_match_record_folders() {
        let mut aggregator = Aggregator::new("K");
        for file in ["/a/A.cs", "/a/b/B.cs", "/C.cs", "/a/D.cs", "/a/b/c/E.cs"] {
            aggregator.push(record(file, "X", "class X {}"));
        }
        let model = aggregator.finish();
        let summed: usize = model.groups().values().map(Vec::len).sum();
        assert_eq!(summed, model.summary().total_classes);
        for (key, records) in model.groups() {
            assert!(records.iter().all(|r| &r.folder_key() == key));
        }
    }

    #[test]
    fn empty_aggregator_yields_zero_totals() {
        let mut aggregator = Aggregator::new("Nothing");
        aggregator.skip_documents(2);
        let model = aggregator.finish();
        assert!(model.groups().is_empty());
        assert_eq!(
            model.summary(),
            Summary {
                total_classes: 0,
                total_lines: 0,
                skipped_documents: 2,
            }
        );
    }
}
