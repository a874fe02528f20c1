//! Pure renderers over an [`AggregatedModel`].
//!
//! All three formats iterate folders in ascending key order and records in
//! discovery order, so identical models render to identical bytes.

mod html;
mod json;
mod markdown;

pub use html::render_html;
pub use json::render_json;
pub use markdown::render_markdown;

use crate::aggregate::AggregatedModel;
use crate::record::ClassRecord;

pub(crate) fn folders(model: &AggregatedModel) -> impl Iterator<Item = (&str, &[ClassRecord])> {
    model
        .groups()
        .iter()
        .map(|(folder, records)| (folder.as_str(), records.as_slice()))
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}


#[cfg(test)]
pub(crate) mod fixtures {
    use crate::aggregate::{AggregatedModel, Aggregator};
    use crate::record::{ClassRecord, RecordParts};

    pub fn record(file: &str, name: &str, line: usize, source: &str) -> ClassRecord {
        ClassRecord::new(RecordParts {
            file: file.to_string(),
            line,
            keyword: "Cache".to_string(),
            class_name: name.to_string(),
            source: source.to_string(),
            attributes: vec!["Serializable".to_string()],
            base_types: vec!["ICache<string>".to_string()],
            usings: vec!["using System;".to_string()],
            namespace: Some("Acme".to_string()),
        })
    }

    pub fn model(records: Vec<ClassRecord>) -> AggregatedModel {
        let mut aggregator = Aggregator::new("Cache");
        for record in records {
            aggregator.push(record);
        }
        aggregator.finish()
    }

    /// Two distinct classes named `Foo` at line 5 in different folders.
    pub fn colliding_model() -> AggregatedModel {
        model(vec![
            record("/src/A.cs", "Foo", 5, "class Foo { Cache c; }"),
            record("/lib/B.cs", "Foo", 5, "class Foo { Cache d; }"),
        ])
    }
}
