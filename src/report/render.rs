//! Built-in AsciiDoc and Markdown page rendering.
//!
//! Index pages render a heading, the optional description and a nested link
//! list built from `contents`. Table pages render a heading, the optional
//! description and a table made of `headers` and `rows`, where every cell is
//! either a `{ value, role }` map or a bare value.

use super::format::Format;
use crate::types::Document;
use serde_json::Value;

pub fn render_index(format: Format, context: &Document) -> String {
    let mut out = String::new();
    push_heading(&mut out, format, 1, context);
    push_description(&mut out, context);

    if let Some(Value::Array(contents)) = context.get("contents") {
        push_links(&mut out, format, contents, 1);
    }
    out
}

pub fn render_table(format: Format, context: &Document) -> String {
    let mut out = String::new();
    push_heading(&mut out, format, 2, context);
    push_description(&mut out, context);

    let headers = list(context.get("headers"));
    let rows = list(context.get("rows"));
    if headers.is_empty() && rows.is_empty() {
        return out;
    }

    match format {
        Format::AsciiDoc => push_asciidoc_table(&mut out, context, headers, rows),
        Format::Markdown => push_markdown_table(&mut out, headers, rows),
    }
    out
}

fn push_heading(out: &mut String, format: Format, level: usize, context: &Document) {
    let Some(title) = title(context) else {
        return;
    };
    match format {
        Format::AsciiDoc => out.push_str(&format!("{} ++{}++\n\n", "=".repeat(level), title)),
        Format::Markdown => out.push_str(&format!("{} {}\n\n", "#".repeat(level), title)),
    }
}

fn push_description(out: &mut String, context: &Document) {
    if let Some(description) = context.get("description").and_then(Value::as_str) {
        let description = description.trim_end();
        if !description.is_empty() {
            out.push_str(description);
            out.push_str("\n\n");
        }
    }
}

fn push_links(out: &mut String, format: Format, contents: &[Value], depth: usize) {
    for entry in contents.iter().filter_map(Value::as_object) {
        let path = entry.get("path").and_then(Value::as_str).unwrap_or(".");
        let target = match entry.get("type").and_then(Value::as_str) {
            Some("index") => format!("{}/index.{}", path, format.extension()),
            _ => format!("{}.{}", path, format.extension()),
        };
        let label = title(entry).unwrap_or_else(|| path.to_string());

        match format {
            Format::AsciiDoc => out.push_str(&format!("{} xref:{}[++{}++]\n", "*".repeat(depth), target, label)),
            Format::Markdown => out.push_str(&format!("{}* [{}]({})\n", "  ".repeat(depth - 1), label, target)),
        }

        if let Some(Value::Array(nested)) = entry.get("contents") {
            push_links(out, format, nested, depth + 1);
        }
    }
}

fn push_asciidoc_table(out: &mut String, context: &Document, headers: &[Value], rows: &[Value]) {
    let columns = column_count(context, headers, rows);
    out.push_str(&format!("[%header,cols=\"{}\"]\n", vec!["1"; columns].join(",")));
    out.push_str("|===\n");
    for header in headers {
        out.push_str(&format!("|++{}++\n", escape(&cell_text(header))));
    }
    out.push('\n');
    for row in rows {
        for cell in list(Some(row)) {
            let text = cell_text(cell);
            if text.is_empty() {
                out.push_str("a|{empty}\n");
            } else {
                out.push_str(&format!("a|++{}++\n", escape(&text)));
            }
        }
        out.push('\n');
    }
    out.push_str("|===\n");
}

fn push_markdown_table(out: &mut String, headers: &[Value], rows: &[Value]) {
    let header_cells: Vec<String> = headers.iter().map(|h| escape(&cell_text(h))).collect();
    out.push_str(&format!("| {} |\n", header_cells.join(" | ")));
    out.push_str(&format!("|{}\n", " --- |".repeat(header_cells.len().max(1))));
    for row in rows {
        let cells: Vec<String> = list(Some(row)).iter().map(|c| escape(&cell_text(c))).collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
}

/// `title`, falling back to `name`
fn title(context: &Document) -> Option<String> {
    ["title", "name"]
        .iter()
        .filter_map(|key| context.get(*key))
        .find(|value| !value.is_null())
        .map(value_text)
        .filter(|text| !text.trim().is_empty())
}

fn column_count(context: &Document, headers: &[Value], rows: &[Value]) -> usize {
    let declared = context.get("columnCount").and_then(Value::as_u64).map(|n| n as usize);
    let observed = if headers.is_empty() { rows.first().map_or(0, |row| list(Some(row)).len()) } else { headers.len() };
    declared.unwrap_or(observed).max(1)
}

fn list(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn cell_text(cell: &Value) -> String {
    match cell.as_object().and_then(|map| map.get("value")) {
        Some(value) => value_text(value),
        None => value_text(cell),
    }
}

/// Render a cell value: lists as `[a, b]`, maps as `{k: v}`
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => format!("[{}]", items.iter().map(value_text).collect::<Vec<_>>().join(", ")),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter().map(|(k, v)| format!("{}: {}", k, value_text(v))).collect::<Vec<_>>().join(", ")
        ),
    }
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
