use std::fmt::Write;

use super::{escape_html, folders};
use crate::aggregate::AggregatedModel;
use crate::config::RenderOptions;
use crate::record::ClassRecord;

pub fn render_markdown(model: &AggregatedModel, options: &RenderOptions) -> String {
    let mut out = String::new();
    let summary = model.summary();

    let _ = writeln!(out, "# Classes containing {}", code_span(model.keyword()));
    out.push('\n');
    let _ = writeln!(out, "- **Total classes:** {}", summary.total_classes);
    let _ = writeln!(out, "- **Total lines:** {}", summary.total_lines);
    let _ = writeln!(out, "- **Skipped documents:** {}", summary.skipped_documents);
    out.push('\n');

    out.push_str("## Table of Contents\n\n");
    if model.groups().is_empty() {
        out.push_str("_No matching classes._\n");
    }
    for (folder, records) in folders(model) {
        let _ = writeln!(out, "- **{}**", escape_html(folder));
        for record in records {
            let _ = writeln!(
                out,
                "  - [{}](#{}) {}",
                record.class_name(),
                record.anchor(),
                code_span(&format!("{}:{}", record.file(), record.line()))
            );
        }
    }

    for (folder, records) in folders(model) {
        let _ = write!(out, "\n## {}\n", escape_html(folder));
        for record in records {
            out.push('\n');
            write_entry(&mut out, record, options);
        }
    }

    out
}

fn write_entry(out: &mut String, record: &ClassRecord, options: &RenderOptions) {
    let _ = writeln!(out, "<a id=\"{}\"></a>", escape_html(&record.anchor()));
    out.push_str("<details>\n");
    let _ = writeln!(
        out,
        "<summary><strong>{}</strong> <code>{}:{}</code></summary>",
        escape_html(record.class_name()),
        escape_html(record.file()),
        record.line()
    );
    out.push('\n');

    let namespace = record.namespace().map(code_span).unwrap_or_else(none);
    let _ = writeln!(out, "- **Namespace:** {namespace}");
    let _ = writeln!(out, "- **Attributes:** {}", inline_list(record.attributes()));
    let _ = writeln!(out, "- **Base types:** {}", inline_list(record.base_types()));
    if let Some(references) = record.references() {
        if references.is_empty() {
            let _ = writeln!(out, "- **References:** {}", none());
        } else {
            out.push_str("- **References:**\n");
            for reference in references {
                let _ = writeln!(out, "  - {}", code_span(reference));
            }
        }
    }
    if let Some(link) = options.source_link(record.file(), record.line()) {
        let _ = writeln!(
            out,
            "- **Source:** [{}#L{}](<{}>)",
            escape_html(record.file()),
            record.line(),
            escape_html(&link)
        );
    }
    out.push('\n');

    let fence = code_fence(record.source());
    let _ = writeln!(out, "{fence}csharp");
    out.push_str(record.source());
    if !record.source().ends_with('\n') {
        out.push('\n');
    }
    let _ = writeln!(out, "{fence}");
    out.push('\n');
    out.push_str("</details>\n");
}

fn none() -> String {
    "_(none)_".to_string()
}

fn inline_list(items: &[String]) -> String {
    if items.is_empty() {
        return none();
    }
    items
        .iter()
        .map(|item| code_span(item))
        .collect::<Vec<_>>()
        .join(", ")
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Fence at least three backticks long and longer than any run in `text`.
fn code_fence(text: &str) -> String {
    "`".repeat((longest_backtick_run(text) + 1).max(3))
}

fn code_span(text: &str) -> String {
    let ticks = "`".repeat(longest_backtick_run(text) + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{ticks} {text} {ticks}")
    } else {
        format!("{ticks}{text}{ticks}")
    }
}
