use std::fmt::Write;

use super::{escape_html, folders};
use crate::aggregate::AggregatedModel;
use crate::config::RenderOptions;
use crate::record::ClassRecord;

const HIGHLIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

const STYLE: &str = r#"body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 2rem auto; max-width: 72rem; padding: 0 1rem; }
#class-filter { width: 100%; padding: 0.5rem; font-size: 1rem; margin: 1rem 0; }
details.class-entry { border: 1px solid #d0d7de; border-radius: 6px; margin: 0.75rem 0; padding: 0.5rem 0.75rem; }
details.class-entry summary { cursor: pointer; }
ul.meta { list-style: none; padding-left: 0; }
pre code { font-size: 0.85rem; }
.hidden { display: none; }
"#;

const SCRIPT: &str = r#"(function () {
  var input = document.getElementById("class-filter");
  function applyFilter() {
    var query = input.value.toLowerCase();
    document.querySelectorAll("[data-class-name]").forEach(function (el) {
      el.classList.toggle("hidden", el.getAttribute("data-class-name").indexOf(query) === -1);
    });
    document.querySelectorAll("[data-folder]").forEach(function (group) {
      var visible = group.querySelector("[data-class-name]:not(.hidden)");
      group.classList.toggle("hidden", visible === null);
    });
  }
  input.addEventListener("input", applyFilter);
  if (window.hljs) {
    document.querySelectorAll("pre code.language-csharp").forEach(function (block) {
      window.hljs.highlightElement(block);
    });
  }
})();
"#;

pub fn render_html(model: &AggregatedModel, options: &RenderOptions) -> String {
    let mut out = String::new();
    let summary = model.summary();
    let keyword = escape_html(model.keyword());

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>Classes containing {keyword}</title>");
    let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{HIGHLIGHT_CSS}\">");
    let _ = writeln!(out, "<script src=\"{HIGHLIGHT_JS}\"></script>");
    let _ = writeln!(out, "<style>\n{STYLE}</style>");
    out.push_str("</head>\n<body>\n");

    let _ = writeln!(out, "<h1>Classes containing <code>{keyword}</code></h1>");
    out.push_str("<ul class=\"summary\">\n");
    let _ = writeln!(out, "<li>Total classes: {}</li>", summary.total_classes);
    let _ = writeln!(out, "<li>Total lines: {}</li>", summary.total_lines);
    let _ = writeln!(out, "<li>Skipped documents: {}</li>", summary.skipped_documents);
    out.push_str("</ul>\n");
    out.push_str(
        "<input type=\"search\" id=\"class-filter\" placeholder=\"Filter by class name\" autocomplete=\"off\">\n",
    );

    out.push_str("<nav id=\"toc\">\n<h2>Table of Contents</h2>\n");
    if model.groups().is_empty() {
        out.push_str("<p><em>No matching classes.</em></p>\n");
    }
    out.push_str("<ul>\n");
    for (folder, records) in folders(model) {
        let folder = escape_html(folder);
        let _ = writeln!(
            out,
            "<li class=\"toc-folder\" data-folder=\"{folder}\"><strong>{folder}</strong>\n<ul>"
        );
        for record in records {
            let _ = writeln!(
                out,
                "<li data-class-name=\"{}\"><a href=\"#{}\">{}</a> <code>{}:{}</code></li>",
                escape_html(&record.class_name().to_lowercase()),
                escape_html(&record.anchor()),
                escape_html(record.class_name()),
                escape_html(record.file()),
                record.line()
            );
        }
        out.push_str("</ul>\n</li>\n");
    }
    out.push_str("</ul>\n</nav>\n<main>\n");

    for (folder, records) in folders(model) {
        let folder = escape_html(folder);
        let _ = writeln!(out, "<section class=\"folder\" data-folder=\"{folder}\">");
        let _ = writeln!(out, "<h2>{folder}</h2>");
        for record in records {
            write_entry(&mut out, record, options);
        }
        out.push_str("</section>\n");
    }

    out.push_str("</main>\n");
    let _ = writeln!(out, "<script>\n{SCRIPT}</script>");
    out.push_str("</body>\n</html>\n");
    out
}

fn write_entry(out: &mut String, record: &ClassRecord, options: &RenderOptions) {
    let _ = writeln!(
        out,
        "<details class=\"class-entry\" id=\"{}\" data-class-name=\"{}\">",
        escape_html(&record.anchor()),
        escape_html(&record.class_name().to_lowercase())
    );
    let _ = writeln!(
        out,
        "<summary><strong>{}</strong> <code>{}:{}</code></summary>",
        escape_html(record.class_name()),
        escape_html(record.file()),
        record.line()
    );

    out.push_str("<ul class=\"meta\">\n");
    let namespace = record
        .namespace()
        .map(|ns| format!("<code>{}</code>", escape_html(ns)))
        .unwrap_or_else(|| "<em>(none)</em>".to_string());
    let _ = writeln!(out, "<li><strong>Namespace:</strong> {namespace}</li>");
    let _ = writeln!(
        out,
        "<li><strong>Attributes:</strong> {}</li>",
        code_list(record.attributes())
    );
    let _ = writeln!(
        out,
        "<li><strong>Base types:</strong> {}</li>",
        code_list(record.base_types())
    );
    if let Some(references) = record.references() {
        let _ = writeln!(
            out,
            "<li><strong>References:</strong> {}</li>",
            code_list(references)
        );
    }
    if let Some(link) = options.source_link(record.file(), record.line()) {
        let _ = writeln!(
            out,
            "<li><strong>Source:</strong> <a href=\"{}\">{}#L{}</a></li>",
            escape_html(&link),
            escape_html(record.file()),
            record.line()
        );
    }
    out.push_str("</ul>\n");

    let _ = writeln!(
        out,
        "<pre><code class=\"language-csharp\">{}</code></pre>",
        escape_html(record.source())
    );
    out.push_str("</details>\n");
}

fn code_list(items: &[String]) -> String {
    if items.is_empty() {
        return "<em>(none)</em>".to_string();
    }
    items
        .iter()
        .map(|item| format!("<code>{}</code>", escape_html(item)))
        .collect::<Vec<_>>()
        .join(", ")
}
